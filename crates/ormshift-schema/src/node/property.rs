use crate::prelude::*;
use std::ops::Not;

///
/// EntityProperty
///
/// A scalar column of an entity or a stored-procedure result shape. `ty` is
/// the raw type expression as the front end saw it (`System.Int32`,
/// `string?`, `Nullable<decimal>`); normalization happens at render time.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntityProperty {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_primary_key: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_db_generated: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_nullable: bool,
}

impl EntityProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a primary-key property.
    #[must_use]
    pub fn key(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name, ty).primary_key()
    }

    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    #[must_use]
    pub const fn generated(mut self) -> Self {
        self.is_db_generated = true;
        self
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    #[must_use]
    pub fn with_column(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = Some(column_name.into());
        self
    }

    #[must_use]
    pub fn with_db_type(mut self, db_type: impl Into<String>) -> Self {
        self.db_type = Some(db_type.into());
        self
    }

    #[must_use]
    /// Resolve the storage column name, falling back to the property name.
    pub fn resolved_column_name(&self) -> &str {
        super::non_blank(self.column_name.as_ref()).unwrap_or(&self.name)
    }

    #[must_use]
    pub fn db_type(&self) -> Option<&str> {
        super::non_blank(self.db_type.as_ref())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_name_falls_back_to_property_name() {
        let prop = EntityProperty::new("CompanyName", "String");
        assert_eq!(prop.resolved_column_name(), "CompanyName");

        let prop = prop.with_column(" ");
        assert_eq!(prop.resolved_column_name(), "CompanyName");

        let prop = EntityProperty::new("Name", "String").with_column("company_name");
        assert_eq!(prop.resolved_column_name(), "company_name");
    }

    #[test]
    fn flags_deserialize_with_defaults() {
        let prop: EntityProperty =
            serde_json::from_str(r#"{"name":"Id","type":"Int32","is_primary_key":true}"#)
                .unwrap();

        assert!(prop.is_primary_key);
        assert!(!prop.is_db_generated);
        assert!(!prop.is_nullable);
        assert_eq!(prop.db_type(), None);
    }
}
