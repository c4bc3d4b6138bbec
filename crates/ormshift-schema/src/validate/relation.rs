use super::{context_route, entity_route};
use crate::{
    node::{Entity, Model},
    prelude::*,
};
use std::collections::{BTreeMap, BTreeSet};

/// Every entity reference in the model must name an entity in the same batch,
/// and inheritance chains must terminate.
pub fn validate_references(model: &Model, errs: &mut ErrorTree) {
    let entities: BTreeMap<&str, &Entity> = model
        .entities
        .iter()
        .map(|e| (e.name.as_str(), e))
        .collect();

    for (i, entity) in model.entities.iter().enumerate() {
        let mut child = ErrorTree::new();
        validate_base_type(entity, &entities, &mut child);

        for nav in &entity.navigations {
            if !entities.contains_key(nav.target_entity.as_str()) {
                err!(
                    child,
                    "navigation '{}' targets unknown entity '{}'",
                    nav.name,
                    nav.target_entity
                );
            }
        }

        errs.merge_for(entity_route(i, &entity.name), child);
    }

    for (i, context) in model.contexts.iter().enumerate() {
        let mut child = ErrorTree::new();

        for table in &context.tables {
            if !entities.contains_key(table.entity_type.as_str()) {
                err!(
                    child,
                    "table '{}' maps unknown entity '{}'",
                    table.name,
                    table.entity_type
                );
            }
        }

        errs.merge_for(context_route(i, &context.name), child);
    }
}

// validate_base_type
// walks the chain upwards; a name seen twice means a cycle
fn validate_base_type(entity: &Entity, entities: &BTreeMap<&str, &Entity>, errs: &mut ErrorTree) {
    let mut visited = BTreeSet::from([entity.name.as_str()]);
    let mut current = entity;

    while let Some(base) = current.base_type() {
        let Some(next) = entities.get(base) else {
            err!(errs, "base type '{base}' is not an entity in this batch");
            return;
        };

        if !visited.insert(base) {
            err!(errs, "inheritance cycle through '{base}'");
            return;
        }

        current = *next;
    }
}

///
/// TESTS
///
