//! Fully qualified property types, including the markup type.

use ormshift_schema::node::{DataContext, Entity, EntityProperty, Model, TableMapping};

pub const CONTEXT_NAME: &str = "DemoContext";

#[must_use]
pub fn doc() -> Entity {
    Entity::new("Doc", "Docs")
        .with_property(EntityProperty::key("Id", "System.Int32").with_column("Id"))
        .with_property(
            EntityProperty::new("Content", "System.Xml.Linq.XElement?")
                .with_column("Content")
                .with_db_type("XML")
                .nullable(),
        )
}

#[must_use]
pub fn context() -> DataContext {
    DataContext::new(CONTEXT_NAME).with_table(TableMapping::new("Docs", "Doc"))
}

#[must_use]
pub fn model() -> Model {
    Model {
        entities: vec![doc()],
        contexts: vec![context()],
        results: Vec::new(),
    }
}
