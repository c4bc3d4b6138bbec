use crate::prelude::*;

///
/// Model
///
/// Everything discovered for one generation run: the entity batch, the
/// contexts that expose it, and the ad hoc result shapes.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<DataContext>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<StoredProcedureResult>,
}

impl Model {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entities: Vec::new(),
            contexts: Vec::new(),
            results: Vec::new(),
        }
    }

    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Append another model's contents, keeping arrival order.
    pub fn extend(&mut self, other: Self) {
        self.entities.extend(other.entities);
        self.contexts.extend(other.contexts);
        self.results.extend(other.results);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.contexts.is_empty() && self.results.is_empty()
    }
}
