use crate::prelude::*;

///
/// Entity
///
/// A persisted record type discovered by one of the legacy front ends.
/// Property and navigation order is the declaration order of the source and
/// is preserved all the way to the rendered output.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,
    pub table_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityProperty>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigations: Vec<Navigation>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: EntityProperty) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: Navigation) -> Self {
        self.navigations.push(navigation);
        self
    }

    /// Properties marked as primary key, in declaration order.
    pub fn key_properties(&self) -> impl Iterator<Item = &EntityProperty> {
        self.properties.iter().filter(|p| p.is_primary_key)
    }

    #[must_use]
    pub fn has_key(&self) -> bool {
        self.properties.iter().any(|p| p.is_primary_key)
    }

    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.base_type().is_some()
    }

    // base_type
    // a blank base type is treated as no base type
    #[must_use]
    pub fn base_type(&self) -> Option<&str> {
        super::non_blank(self.base_type.as_ref())
    }

    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        super::non_blank(self.schema.as_ref())
    }

    #[must_use]
    pub fn get_navigation(&self, name: &str) -> Option<&Navigation> {
        self.navigations.iter().find(|n| n.name == name)
    }

    /// Name of the generated mapping configuration type.
    #[must_use]
    pub fn configuration_name(&self) -> String {
        configuration_name(&self.name)
    }
}

/// Configuration type name for an entity type name.
#[must_use]
pub fn configuration_name(entity_type: &str) -> String {
    format!("{entity_type}Configuration")
}

///
/// TESTS
///
