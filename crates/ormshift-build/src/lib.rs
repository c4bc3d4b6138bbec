//! Source generation for the migrated data-access layer.
//!
//! Every render operation is a pure function of a resolved batch and is
//! byte-for-byte deterministic: traversal order comes from explicit sort keys,
//! never from input arrival order, except for property, navigation and
//! parameter order which are kept as declared.

mod config;
mod context;
mod entity;
mod result;
mod writer;

use ormshift_schema::node::{DataContext, Entity, StoredProcedureResult};

///
/// RenderOptions
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    /// File-scoped namespace written after the imports of every output.
    pub namespace: Option<String>,
}

impl RenderOptions {
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace
            .as_deref()
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
    }
}

///
/// Generator
///
/// Renders the four independent outputs. Inputs must already be validated
/// and resolved; rendering itself never fails.
///

#[derive(Clone, Debug, Default)]
pub struct Generator {
    options: RenderOptions,
}

impl Generator {
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// One class per entity, ordered by entity name.
    #[must_use]
    pub fn render_entities(&self, entities: &[Entity]) -> String {
        entity::generate(self, entities)
    }

    /// One mapping configuration class per entity, ordered by entity name.
    #[must_use]
    pub fn render_entity_configurations(&self, entities: &[Entity]) -> String {
        config::generate(self, entities)
    }

    #[must_use]
    pub fn render_data_context(&self, context: &DataContext) -> String {
        context::generate(self, context)
    }

    #[must_use]
    pub fn render_stored_procedure_results(&self, results: &[StoredProcedureResult]) -> String {
        result::generate(self, results)
    }
}

// render_entities
#[must_use]
pub fn render_entities(entities: &[Entity]) -> String {
    Generator::default().render_entities(entities)
}

// render_entity_configurations
#[must_use]
pub fn render_entity_configurations(entities: &[Entity]) -> String {
    Generator::default().render_entity_configurations(entities)
}

// render_data_context
#[must_use]
pub fn render_data_context(context: &DataContext) -> String {
    Generator::default().render_data_context(context)
}

// render_stored_procedure_results
#[must_use]
pub fn render_stored_procedure_results(results: &[StoredProcedureResult]) -> String {
    Generator::default().render_stored_procedure_results(results)
}

// sorted_by
// stable, so equal names keep arrival order
fn sorted_by<'a, T>(items: &'a [T], key: impl Fn(&T) -> &str) -> Vec<&'a T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| key(a).cmp(key(b)));

    sorted
}

///
/// TESTS
///
