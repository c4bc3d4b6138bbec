use crate::{
    Generator, sorted_by,
    writer::{SourceWriter, literal},
};
use ormshift_schema::{
    node::{Entity, EntityProperty, Navigation},
    types::{XML_NAMESPACE, is_xml_type, normalize},
};
use std::collections::BTreeMap;

pub const BASE_USINGS: &[&str] = &[
    "Microsoft.EntityFrameworkCore",
    "Microsoft.EntityFrameworkCore.Metadata.Builders",
];

const XML_CONVERSION: &str = ".HasConversion(v => v.ToString(), v => XElement.Parse(v))";

pub fn generate(generator: &Generator, entities: &[Entity]) -> String {
    let by_name: BTreeMap<&str, &Entity> = entities.iter().map(|e| (e.name.as_str(), e)).collect();

    let needs_xml = entities
        .iter()
        .flat_map(|e| &e.properties)
        .any(is_markup);
    let usings = BASE_USINGS
        .iter()
        .copied()
        .chain(needs_xml.then_some(XML_NAMESPACE));

    let mut w = SourceWriter::new();
    w.preamble(usings, generator.options().namespace());

    for entity in sorted_by(entities, |e| e.name.as_str()) {
        w.block(
            format!(
                "public class {} : IEntityTypeConfiguration<{}>",
                entity.configuration_name(),
                entity.name
            ),
            |w| {
                w.block(
                    format!("public void Configure(EntityTypeBuilder<{}> builder)", entity.name),
                    |w| write_configure_body(w, entity, &by_name),
                );
            },
        );
        w.blank();
    }

    w.finish()
}

fn write_configure_body(w: &mut SourceWriter, entity: &Entity, by_name: &BTreeMap<&str, &Entity>) {
    if let Some(base) = entity.base_type() {
        // table and key come from the root of the hierarchy
        w.line(format!("builder.HasBaseType<{base}>();"));
    } else {
        write_table(w, entity);
        write_key(w, entity);
    }

    for prop in &entity.properties {
        w.chain(format!("builder.Property(e => e.{})", prop.name), &property_calls(prop));
    }

    for nav in &entity.navigations {
        if let Some((head, calls)) = relationship(entity, nav, by_name) {
            w.chain(head, &calls);
        }
    }
}

fn write_table(w: &mut SourceWriter, entity: &Entity) {
    let table = literal(&entity.table_name);

    match entity.schema() {
        Some(schema) => w.line(format!("builder.ToTable({table}, {});", literal(schema))),
        None => w.line(format!("builder.ToTable({table});")),
    }
}

fn write_key(w: &mut SourceWriter, entity: &Entity) {
    let keys: Vec<&str> = entity.key_properties().map(|p| p.name.as_str()).collect();

    match keys.as_slice() {
        [] => w.line("builder.HasNoKey();"),
        [key] => w.line(format!("builder.HasKey(e => e.{key});")),
        keys => {
            let members: Vec<String> = keys.iter().map(|k| format!("e.{k}")).collect();
            w.line(format!("builder.HasKey(e => new {{ {} }});", members.join(", ")));
        }
    }
}

fn property_calls(prop: &EntityProperty) -> Vec<String> {
    let mut calls = vec![format!(".HasColumnName({})", literal(prop.resolved_column_name()))];

    if let Some(db_type) = prop.db_type() {
        calls.push(format!(".HasColumnType({})", literal(db_type)));
    }
    if prop.is_db_generated {
        calls.push(".ValueGeneratedOnAdd()".to_string());
    }
    if is_markup(prop) {
        calls.push(XML_CONVERSION.to_string());
    }

    calls
}

// is_markup
// checked on the normalized type so wrapper spellings match too
fn is_markup(prop: &EntityProperty) -> bool {
    is_xml_type(&normalize(&prop.ty).name)
}

// sorts_after
// pairs configured from both ends are bound by the first-sorting side only
fn sorts_after(entity: &Entity, nav: &Navigation, inverse: &Navigation) -> bool {
    (entity.name.as_str(), nav.name.as_str()) > (nav.target_entity.as_str(), inverse.name.as_str())
}

// relationship
// dependent side of a foreign-key relationship, or the first-sorting side
// of a many-to-many or doubly keyed one-to-one pair; every other navigation
// is configured elsewhere
fn relationship(
    entity: &Entity,
    nav: &Navigation,
    by_name: &BTreeMap<&str, &Entity>,
) -> Option<(String, Vec<String>)> {
    let inverse = nav.inverse().and_then(|name| {
        by_name
            .get(nav.target_entity.as_str())
            .and_then(|target| target.get_navigation(name))
    });

    if nav.is_collection {
        let join_table = nav.join_table_key()?;
        let inverse = inverse.filter(|inv| inv.is_collection)?;
        if sorts_after(entity, nav, inverse) {
            return None;
        }

        let calls = vec![
            format!(".WithMany(e => e.{})", inverse.name),
            format!(".UsingEntity({})", literal(join_table)),
        ];

        return Some((format!("builder.HasMany(e => e.{})", nav.name), calls));
    }

    let foreign_key = literal(nav.foreign_key()?);
    if let Some(inv) = inverse
        && !inv.is_collection
        && inv.foreign_key().is_some()
        && sorts_after(entity, nav, inv)
    {
        return None;
    }

    let calls = match inverse {
        Some(inv) if inv.is_collection => vec![
            format!(".WithMany(e => e.{})", inv.name),
            format!(".HasForeignKey({foreign_key})"),
        ],
        Some(inv) => vec![
            format!(".WithOne(e => e.{})", inv.name),
            format!(".HasForeignKey<{}>({foreign_key})", entity.name),
        ],
        None => vec![
            ".WithMany()".to_string(),
            format!(".HasForeignKey({foreign_key})"),
        ],
    };

    Some((format!("builder.HasOne(e => e.{})", nav.name), calls))
}

///
/// TESTS
///
