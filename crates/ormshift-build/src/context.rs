use crate::{
    Generator, sorted_by,
    writer::{SourceWriter, literal},
};
use ormshift_schema::{
    node::{DataContext, ParameterMapping, StoredProcedureMapping, configuration_name},
    types::normalize_into,
};
use std::collections::BTreeSet;

pub const BASE_USINGS: &[&str] = &["Microsoft.EntityFrameworkCore"];

/// Import needed by the queryable return type of procedure wrappers.
pub const QUERY_USING: &str = "System.Linq";

pub fn generate(generator: &Generator, context: &DataContext) -> String {
    let mut namespaces = BTreeSet::new();
    let mut body = SourceWriter::new();

    body.block(format!("public class {} : DbContext", context.name), |w| {
        for table in sorted_by(&context.tables, |t| t.name.as_str()) {
            w.line(format!(
                "public DbSet<{}> {} {{ get; set; }}",
                table.entity_type, table.name
            ));
        }
        w.blank();

        w.block(
            "protected override void OnModelCreating(ModelBuilder modelBuilder)",
            |w| {
                let entity_types: BTreeSet<&str> =
                    context.tables.iter().map(|t| t.entity_type.as_str()).collect();

                for entity_type in entity_types {
                    w.line(format!(
                        "modelBuilder.ApplyConfiguration(new {}());",
                        configuration_name(entity_type)
                    ));
                }
            },
        );

        for sp in sorted_by(&context.stored_procedures, |s| s.method_name.as_str()) {
            w.blank();
            write_procedure(w, sp, &mut namespaces);
        }
    });

    let usings = BASE_USINGS
        .iter()
        .copied()
        .chain(context.has_stored_procedures().then_some(QUERY_USING))
        .chain(namespaces.iter().map(String::as_str));

    let mut w = SourceWriter::new();
    w.preamble(usings, generator.options().namespace());
    w.append(body);

    w.finish()
}

fn write_procedure(w: &mut SourceWriter, sp: &StoredProcedureMapping, namespaces: &mut BTreeSet<String>) {
    let return_type = normalize_into(&sp.return_type, namespaces);
    let params: Vec<String> = sp
        .parameters
        .iter()
        .map(|p| parameter(p, namespaces))
        .collect();
    let args: Vec<String> = sp.parameters.iter().map(argument).collect();

    let function = match sp.qualified_name() {
        (Some(schema), name) => format!("[DbFunction({}, {})]", literal(name), literal(schema)),
        (None, name) => format!("[DbFunction({})]", literal(name)),
    };

    w.line(function);
    w.line(format!(
        "public IQueryable<{return_type}> {}({}) =>",
        sp.method_name,
        params.join(", ")
    ));
    w.line(format!(
        "    FromExpression(() => {}({}));",
        sp.method_name,
        args.join(", ")
    ));
}

// parameter
// `ref string name /* Size=50 */`
fn parameter(p: &ParameterMapping, namespaces: &mut BTreeSet<String>) -> String {
    let ty = normalize_into(&p.ty, namespaces);
    let mut out = match p.direction.qualifier() {
        Some(q) => format!("{q} {ty} {}", p.name),
        None => format!("{ty} {}", p.name),
    };
    if let Some(size) = p.size {
        out.push_str(&format!(" /* Size={size} */"));
    }

    out
}

fn argument(p: &ParameterMapping) -> String {
    match p.direction.qualifier() {
        Some(q) => format!("{q} {}", p.name),
        None => p.name.clone(),
    }
}

///
/// TESTS
///
