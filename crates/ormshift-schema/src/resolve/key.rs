use crate::node::Entity;
use tracing::warn;

/// Promote the first declared property of every key-less entity.
///
/// Derived entities inherit their key and entities without properties have
/// nothing to promote; both are left alone. Returns how many entities were
/// changed.
pub fn promote_primary_keys(entities: &mut [Entity]) -> usize {
    entities
        .iter_mut()
        .filter_map(promote_primary_key)
        .count()
}

/// Promote the first declared property of a single key-less entity,
/// returning the promoted property name.
pub fn promote_primary_key(entity: &mut Entity) -> Option<&str> {
    if entity.is_derived() || entity.has_key() {
        return None;
    }

    let first = entity.properties.first_mut()?;
    first.is_primary_key = true;
    warn!(
        entity = %entity.name,
        property = %first.name,
        "no key declared, promoting first property"
    );

    Some(first.name.as_str())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::EntityProperty;

    #[test]
    fn promotes_first_property_of_keyless_entity() {
        let mut entity = Entity::new("NoKeyTable", "NoKeyTable")
            .with_property(EntityProperty::new("Code", "String"))
            .with_property(EntityProperty::new("Label", "String"));

        assert_eq!(promote_primary_key(&mut entity), Some("Code"));
        let keys: Vec<_> = entity.key_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(keys, ["Code"]);
    }

    #[test]
    fn declared_keys_are_kept() {
        let mut entity = Entity::new("CompositeTable", "CompositeTable")
            .with_property(EntityProperty::new("Note", "String"))
            .with_property(EntityProperty::key("KeyPart1", "Int32"))
            .with_property(EntityProperty::key("KeyPart2", "Int32"));

        assert_eq!(promote_primary_key(&mut entity), None);
        assert!(!entity.properties[0].is_primary_key);
    }

    #[test]
    fn skips_derived_and_empty_entities() {
        let mut entities = vec![
            Entity::new("PreferredCustomer", "Customers")
                .with_base_type("Customer")
                .with_property(EntityProperty::new("Discount", "Decimal")),
            Entity::new("Empty", "Empty"),
            Entity::new("Log", "Log").with_property(EntityProperty::new("Line", "String")),
        ];

        assert_eq!(promote_primary_keys(&mut entities), 1);
        assert!(!entities[0].has_key());
        assert!(entities[2].has_key());
    }
}
