//! Model validation.
//!
//! Everything a caller can get wrong about a batch is checked here, before
//! key promotion and inverse resolution. The generator itself trusts its
//! input and never fails.

pub mod naming;
pub mod relation;

use crate::{error::ErrorTree, node::Model};

/// Run every validation pass over a complete model.
///
/// All problems are collected into one tree so a caller sees the whole list
/// at once.
pub fn validate_model(model: &Model) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    naming::validate_names(model, &mut errs);
    relation::validate_references(model, &mut errs);

    errs.result()
}

// route helpers shared by the passes; blank names fall back to position

pub(crate) fn entity_route(index: usize, name: &str) -> String {
    route("entity", index, name)
}

pub(crate) fn context_route(index: usize, name: &str) -> String {
    route("context", index, name)
}

pub(crate) fn result_route(index: usize, name: &str) -> String {
    route("result", index, name)
}

fn route(kind: &str, index: usize, name: &str) -> String {
    if name.trim().is_empty() {
        format!("{kind} #{index}")
    } else {
        format!("{kind} {name}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{DataContext, Entity, EntityProperty, Navigation, TableMapping};

    fn northwind() -> Model {
        Model {
            entities: vec![
                Entity::new("Customer", "Customers")
                    .with_property(EntityProperty::key("CustomerID", "String"))
                    .with_navigation(
                        Navigation::many("Orders", "Order").with_association("FK_Orders_Customers"),
                    ),
                Entity::new("Order", "Orders")
                    .with_property(EntityProperty::key("OrderID", "Int32").generated())
                    .with_property(EntityProperty::new("CustomerID", "String"))
                    .with_navigation(
                        Navigation::one("Customer", "Customer")
                            .with_foreign_key("CustomerID")
                            .with_association("FK_Orders_Customers"),
                    ),
            ],
            contexts: vec![
                DataContext::new("NorthwindDataContext")
                    .with_table(TableMapping::new("Customers", "Customer"))
                    .with_table(TableMapping::new("Orders", "Order")),
            ],
            results: Vec::new(),
        }
    }

    #[test]
    fn valid_model_passes() {
        assert!(validate_model(&northwind()).is_ok());
    }

    #[test]
    fn every_problem_is_reported_together() {
        let mut model = northwind();
        model.entities.push(Entity::new("Customer", "Customers2"));
        model.entities[1].navigations[0].target_entity = "Shipper".to_string();
        model.contexts[0].tables.push(TableMapping::new("Products", "Product"));

        let errs = validate_model(&model).unwrap_err();
        assert_eq!(errs.len(), 3, "{errs}");
    }

    #[test]
    fn blank_names_are_routed_by_position() {
        assert_eq!(entity_route(3, "  "), "entity #3");
        assert_eq!(context_route(0, "Db"), "context Db");
        assert_eq!(result_route(1, ""), "result #1");
    }
}
