use crate::prelude::*;
use std::ops::Not;

///
/// Navigation
///
/// A relationship from one entity to another. Both sides of a relationship
/// carry the same `association_name` (one-to-many) or `join_table`
/// (many-to-many); `inverse` is filled in by the resolver only.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Navigation {
    pub name: String,
    pub target_entity: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_collection: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse: Option<String>,
}

impl Navigation {
    /// A singular (reference) navigation.
    #[must_use]
    pub fn one(name: impl Into<String>, target_entity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_entity: target_entity.into(),
            ..Self::default()
        }
    }

    /// A collection navigation.
    #[must_use]
    pub fn many(name: impl Into<String>, target_entity: impl Into<String>) -> Self {
        Self {
            is_collection: true,
            ..Self::one(name, target_entity)
        }
    }

    #[must_use]
    pub fn with_foreign_key(mut self, foreign_key: impl Into<String>) -> Self {
        self.foreign_key = Some(foreign_key.into());
        self
    }

    #[must_use]
    pub fn with_association(mut self, association_name: impl Into<String>) -> Self {
        self.association_name = Some(association_name.into());
        self
    }

    #[must_use]
    pub fn with_join_table(mut self, join_table: impl Into<String>) -> Self {
        self.join_table = Some(join_table.into());
        self
    }

    #[must_use]
    pub fn foreign_key(&self) -> Option<&str> {
        super::non_blank(self.foreign_key.as_ref())
    }

    /// Association identity, if present and not blank. Compared exactly.
    #[must_use]
    pub fn association_key(&self) -> Option<&str> {
        super::identity(self.association_name.as_ref())
    }

    /// Join-table identity, if present and not blank. Compared exactly.
    #[must_use]
    pub fn join_table_key(&self) -> Option<&str> {
        super::identity(self.join_table.as_ref())
    }

    #[must_use]
    pub fn inverse(&self) -> Option<&str> {
        super::non_blank(self.inverse.as_ref())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities_are_exact_and_blank_is_absent() {
        let nav = Navigation::one("Customer", "Customer")
            .with_association(" FK_Orders ")
            .with_join_table("\t")
            .with_foreign_key(" CustomerID ");

        assert_eq!(nav.association_key(), Some(" FK_Orders "));
        assert_eq!(nav.join_table_key(), None);
        assert_eq!(nav.foreign_key(), Some("CustomerID"));
        assert_eq!(nav.inverse(), None);
    }
}
