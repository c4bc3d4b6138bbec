//! The boundary between legacy dialect front ends and the core.
//!
//! A front end parses one source unit (an attribute-mapped class file, an
//! XML mapping document, a typed-dataset designer file) and hands back an
//! [`Extraction`]. The core never detects dialects itself.

use derive_more::{Display, FromStr};
use ormshift_schema::node::{DataContext, Entity, Model, StoredProcedureResult};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Dialect
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[remain::sorted]
pub enum Dialect {
    AttributeMapped,
    #[default]
    Snapshot,
    TypedDataSet,
    XmlMapping,
}

///
/// ExtractError
///

#[derive(Debug, ThisError)]
pub enum ExtractError {
    #[error("malformed {dialect} source '{unit}': {message}")]
    Malformed {
        dialect: Dialect,
        unit: String,
        message: String,
    },

    #[error("snapshot holds {0} contexts; extract them with extract_all")]
    MultipleContexts(usize),

    #[error("invalid model snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

///
/// Extraction
///
/// Everything one source unit contributed: its entities, at most one
/// context, and any procedure result shapes.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Extraction {
    pub entities: Vec<Entity>,
    pub context: Option<DataContext>,
    pub results: Vec<StoredProcedureResult>,
}

impl Extraction {
    #[must_use]
    pub const fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            context: None,
            results: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: DataContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_results(mut self, results: Vec<StoredProcedureResult>) -> Self {
        self.results = results;
        self
    }

    #[must_use]
    pub fn into_model(self) -> Model {
        Model {
            entities: self.entities,
            contexts: self.context.into_iter().collect(),
            results: self.results,
        }
    }
}

///
/// Extractor
///
/// Implemented once per legacy dialect. Errors are surfaced, never masked:
/// a failed extraction contributes nothing to the batch.
///

pub trait Extractor {
    type Source: ?Sized;

    fn dialect(&self) -> Dialect;

    fn extract(&self, source: &Self::Source) -> Result<Extraction, ExtractError>;
}

///
/// ModelSnapshot
///
/// JSON exchange form of a batch, produced by out-of-process front ends.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub dialect: Dialect,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<DataContext>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<StoredProcedureResult>,
}

impl ModelSnapshot {
    #[must_use]
    pub fn from_model(dialect: Dialect, model: Model) -> Self {
        Self {
            dialect,
            entities: model.entities,
            contexts: model.contexts,
            results: model.results,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One extraction per context; entities and results ride on the first.
    #[must_use]
    pub fn into_extractions(self) -> Vec<Extraction> {
        let mut contexts = self.contexts.into_iter();
        let first = Extraction {
            entities: self.entities,
            context: contexts.next(),
            results: self.results,
        };

        std::iter::once(first)
            .chain(contexts.map(|c| Extraction::default().with_context(c)))
            .collect()
    }
}

///
/// SnapshotExtractor
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotExtractor;

impl SnapshotExtractor {
    /// Extract a snapshot that may carry any number of contexts.
    pub fn extract_all(&self, source: &str) -> Result<Vec<Extraction>, ExtractError> {
        Ok(ModelSnapshot::from_json(source)?.into_extractions())
    }
}

impl Extractor for SnapshotExtractor {
    type Source = str;

    fn dialect(&self) -> Dialect {
        Dialect::Snapshot
    }

    fn extract(&self, source: &str) -> Result<Extraction, ExtractError> {
        let snapshot = ModelSnapshot::from_json(source)?;
        if snapshot.contexts.len() > 1 {
            return Err(ExtractError::MultipleContexts(snapshot.contexts.len()));
        }

        let mut extractions = snapshot.into_extractions();

        Ok(extractions.swap_remove(0))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use ormshift_testing_fixtures::{northwind, school};

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = ModelSnapshot::from_model(Dialect::AttributeMapped, northwind::model());
        let json = snapshot.to_json().unwrap();

        assert_eq!(ModelSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn extract_single_context_snapshot() {
        let json = ModelSnapshot::from_model(Dialect::XmlMapping, school::model())
            .to_json()
            .unwrap();

        let extraction = SnapshotExtractor.extract(&json).unwrap();
        assert_eq!(extraction.entities, school::entities());
        assert_eq!(extraction.context, Some(school::context()));
        assert!(extraction.results.is_empty());
    }

    #[test]
    fn extract_all_splits_contexts() {
        let mut model = northwind::model();
        model.extend(school::model());
        let json = ModelSnapshot::from_model(Dialect::Snapshot, model).to_json().unwrap();

        assert!(matches!(
            SnapshotExtractor.extract(&json),
            Err(ExtractError::MultipleContexts(2))
        ));

        let extractions = SnapshotExtractor.extract_all(&json).unwrap();
        assert_eq!(extractions.len(), 2);
        assert_eq!(extractions[0].entities.len(), 5);
        assert_eq!(extractions[0].results.len(), 1);
        assert!(extractions[1].entities.is_empty());
        assert_eq!(
            extractions[1].context.as_ref().map(|c| c.name.as_str()),
            Some(school::CONTEXT_NAME)
        );
    }

    #[test]
    fn minimal_snapshot_uses_defaults() {
        let json = r#"{
            "entities": [
                {
                    "name": "Shipper",
                    "table_name": "Shippers",
                    "properties": [{ "name": "ShipperID", "type": "Int32", "is_primary_key": true }]
                }
            ]
        }"#;

        let extraction = SnapshotExtractor.extract(json).unwrap();
        assert_eq!(extraction.entities[0].properties[0].ty, "Int32");
        assert!(extraction.entities[0].has_key());
        assert_eq!(extraction.context, None);
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let err = SnapshotExtractor.extract("{ \"entities\": 3 }").unwrap_err();

        assert!(matches!(err, ExtractError::Snapshot(_)));
        assert!(err.to_string().starts_with("invalid model snapshot"));
    }

    #[test]
    fn dialect_names_parse() {
        assert_eq!("XmlMapping".parse::<Dialect>().unwrap(), Dialect::XmlMapping);
        assert_eq!(Dialect::TypedDataSet.to_string(), "TypedDataSet");
        assert_eq!(SnapshotExtractor.dialect(), Dialect::Snapshot);
    }
}
