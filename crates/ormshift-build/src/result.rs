use crate::{Generator, entity::write_members, sorted_by, writer::SourceWriter};
use ormshift_schema::{node::StoredProcedureResult, types::normalize_into};
use std::collections::BTreeSet;

pub fn generate(generator: &Generator, results: &[StoredProcedureResult]) -> String {
    let mut namespaces = BTreeSet::new();
    let mut body = SourceWriter::new();

    for result in sorted_by(results, |r| r.name.as_str()) {
        body.block(format!("public class {}", result.name), |w| {
            let members: Vec<String> = result
                .properties
                .iter()
                .map(|p| {
                    let ty = normalize_into(&p.ty, &mut namespaces);
                    format!("public {ty} {} {{ get; set; }}", p.name)
                })
                .collect();

            write_members(w, &members);
        });
        body.blank();
    }

    let mut w = SourceWriter::new();
    w.preamble(
        namespaces.iter().map(String::as_str),
        generator.options().namespace(),
    );
    w.append(body);

    w.finish()
}

///
/// TESTS
///
