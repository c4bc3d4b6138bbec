use crate::prelude::*;

///
/// DataContext
///
/// Aggregates the tables and stored procedures discovered for one legacy
/// context or session unit.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DataContext {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<TableMapping>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stored_procedures: Vec<StoredProcedureMapping>,
}

impl DataContext {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: TableMapping) -> Self {
        self.tables.push(table);
        self
    }

    #[must_use]
    pub fn with_stored_procedure(mut self, procedure: StoredProcedureMapping) -> Self {
        self.stored_procedures.push(procedure);
        self
    }

    #[must_use]
    pub fn has_stored_procedures(&self) -> bool {
        !self.stored_procedures.is_empty()
    }
}

///
/// TableMapping
///
/// Binds a context-facing collection name to an entity type.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableMapping {
    pub name: String,
    pub entity_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigations: Vec<Navigation>,
}

impl TableMapping {
    #[must_use]
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            ..Self::default()
        }
    }
}
