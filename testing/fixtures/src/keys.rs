//! Typed-dataset key scenarios: composite, identity and missing keys.

use ormshift_schema::node::{Entity, EntityProperty, Model};

#[must_use]
pub fn composite_table() -> Entity {
    Entity::new("CompositeTable", "CompositeTable")
        .with_property(EntityProperty::key("KeyPart1", "System.Int32"))
        .with_property(EntityProperty::key("KeyPart2", "System.Int32"))
        .with_property(EntityProperty::new("Value", "System.String").nullable())
}

#[must_use]
pub fn identity_table() -> Entity {
    Entity::new("IdentityTable", "IdentityTable")
        .with_property(EntityProperty::key("Id", "System.Int32").generated())
        .with_property(EntityProperty::new("Name", "System.String").with_db_type("NVarChar(50)"))
}

/// No column is marked as key; the pipeline promotes `Code`.
#[must_use]
pub fn no_key_table() -> Entity {
    Entity::new("NoKeyTable", "NoKeyTable")
        .with_property(EntityProperty::new("Code", "System.String"))
        .with_property(EntityProperty::new("Description", "System.String").nullable())
}

#[must_use]
pub fn entities() -> Vec<Entity> {
    vec![no_key_table(), identity_table(), composite_table()]
}

#[must_use]
pub fn model() -> Model {
    Model {
        entities: entities(),
        ..Model::default()
    }
}
