use crate::{Generator, sorted_by, writer::SourceWriter};
use ormshift_schema::{
    node::{Entity, Navigation},
    types::normalize_into,
};
use std::collections::BTreeSet;

/// Imports every entity source needs, ahead of the collected ones.
pub const BASE_USINGS: &[&str] = &["System.Collections.Generic"];

/// Collection type used for collection navigations.
const COLLECTION_TYPE: &str = "List";

pub fn generate(generator: &Generator, entities: &[Entity]) -> String {
    let mut namespaces = BTreeSet::new();
    let mut body = SourceWriter::new();

    for entity in sorted_by(entities, |e| e.name.as_str()) {
        write_entity(&mut body, entity, &mut namespaces);
        body.blank();
    }

    let usings = BASE_USINGS
        .iter()
        .copied()
        .chain(namespaces.iter().map(String::as_str));

    let mut w = SourceWriter::new();
    w.preamble(usings, generator.options().namespace());
    w.append(body);

    w.finish()
}

fn write_entity(w: &mut SourceWriter, entity: &Entity, namespaces: &mut BTreeSet<String>) {
    let head = match entity.base_type() {
        Some(base) => format!("public class {} : {base}", entity.name),
        None => format!("public class {}", entity.name),
    };

    w.block(head, |w| {
        let mut members = Vec::new();

        for prop in &entity.properties {
            let ty = normalize_into(&prop.ty, namespaces);
            members.push(format!("public {ty} {} {{ get; set; }}", prop.name));
        }
        for nav in &entity.navigations {
            members.push(navigation_member(nav));
        }

        write_members(w, &members);
    });
}

fn navigation_member(nav: &Navigation) -> String {
    if nav.is_collection {
        format!(
            "public {COLLECTION_TYPE}<{}> {} {{ get; set; }} = new();",
            nav.target_entity, nav.name
        )
    } else {
        format!("public {} {} {{ get; set; }}", nav.target_entity, nav.name)
    }
}

// write_members
// members are separated by one blank line
pub fn write_members(w: &mut SourceWriter, members: &[String]) {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        w.line(member);
    }
}

///
/// TESTS
///
