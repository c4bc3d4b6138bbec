use super::{context_route, entity_route, result_route};
use crate::{
    MAX_ENTITY_NAME_LEN,
    node::{DataContext, Entity, Model},
    prelude::*,
};
use std::collections::BTreeSet;

/// Blank and duplicate names across the whole model.
pub fn validate_names(model: &Model, errs: &mut ErrorTree) {
    validate_unique(
        "entity",
        model.entities.iter().map(|e| e.name.as_str()),
        errs,
    );
    validate_unique(
        "context",
        model.contexts.iter().map(|c| c.name.as_str()),
        errs,
    );
    validate_unique(
        "result",
        model.results.iter().map(|r| r.name.as_str()),
        errs,
    );

    for (i, entity) in model.entities.iter().enumerate() {
        errs.merge_for(entity_route(i, &entity.name), validate_entity_names(entity));
    }

    for (i, context) in model.contexts.iter().enumerate() {
        let route = context_route(i, &context.name);

        // the name becomes a class and a file name
        if !context.name.trim().is_empty() && !is_identifier(&context.name) {
            errs.add_for(
                route.clone(),
                format!("name '{}' is not an identifier", context.name),
            );
        }

        errs.merge_for(route, validate_context_names(context));
    }

    for (i, result) in model.results.iter().enumerate() {
        let mut child = ErrorTree::new();
        validate_members(result.properties.iter().map(|p| p.name.as_str()), &mut child);
        errs.merge_for(result_route(i, &result.name), child);
    }
}

// validate_unique
// top-level names; blanks are reported once per occurrence
fn validate_unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>, errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();

    for (i, name) in names.enumerate() {
        if name.trim().is_empty() {
            err!(errs, "{kind} #{i} has a blank name");
        } else if !seen.insert(name) {
            err!(errs, "duplicate {kind} name '{name}'");
        }
    }
}

fn validate_entity_names(entity: &Entity) -> ErrorTree {
    let mut errs = ErrorTree::new();

    if entity.name.len() > MAX_ENTITY_NAME_LEN {
        err!(errs, "name exceeds {MAX_ENTITY_NAME_LEN} characters");
    }

    if entity.table_name.trim().is_empty() {
        errs.add("blank table name");
    }

    // properties and navigations share one member namespace
    let members = entity
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .chain(entity.navigations.iter().map(|n| n.name.as_str()));
    validate_members(members, &mut errs);

    for property in &entity.properties {
        if property.ty.trim().is_empty() {
            err!(errs, "property '{}' has a blank type", property.name);
        }
    }

    errs
}

fn validate_context_names(context: &DataContext) -> ErrorTree {
    let mut errs = ErrorTree::new();

    validate_members(context.tables.iter().map(|t| t.name.as_str()), &mut errs);

    let mut methods = BTreeSet::new();
    for (i, sp) in context.stored_procedures.iter().enumerate() {
        if sp.method_name.trim().is_empty() {
            err!(errs, "stored procedure #{i} has a blank method name");
        } else if !methods.insert(sp.method_name.as_str()) {
            err!(errs, "duplicate stored procedure method '{}'", sp.method_name);
        }

        if sp.qualified_name().1.trim().is_empty() {
            err!(errs, "stored procedure #{i} has a blank native name");
        }

        validate_members(sp.parameters.iter().map(|p| p.name.as_str()), &mut errs);
    }

    errs
}

// is_identifier
// letter or underscore, then letters, digits or underscores
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn validate_members<'a>(names: impl Iterator<Item = &'a str>, errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();

    for (i, name) in names.enumerate() {
        if name.trim().is_empty() {
            err!(errs, "member #{i} has a blank name");
        } else if !seen.insert(name) {
            err!(errs, "duplicate member name '{name}'");
        }
    }
}

///
/// TESTS
///
