//! Batch collection through to generated sources.
//!
//! Front-end output is appended to a [`Batch`]; `prepare` consumes the batch,
//! validates it, promotes missing keys and resolves inverses exactly once.
//! Only a [`PreparedModel`] can be rendered.

use crate::{
    Error,
    extract::{Extraction, Extractor},
};
use ormshift_build::{Generator, RenderOptions};
use ormshift_config_build::{GenerateConfig, OutputConfig};
use ormshift_schema::{
    node::{Entity, Model},
    resolve::{promote_primary_keys, resolve_inverses},
    validate::validate_model,
};
use sha2::{Digest, Sha256};
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

///
/// Batch
///
/// Append-only collection of everything the front ends produced for one
/// generation run.
///

#[derive(Clone, Debug, Default)]
pub struct Batch {
    model: Model,
    units: usize,
}

impl Batch {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            model: Model::new(),
            units: 0,
        }
    }

    pub fn push(&mut self, extraction: Extraction) {
        debug!(
            entities = extraction.entities.len(),
            context = extraction.context.as_ref().map(|c| c.name.as_str()),
            "batch received extraction"
        );

        self.units += 1;
        self.model.extend(extraction.into_model());
    }

    /// Run an extractor over one source unit; nothing is added on failure.
    pub fn extract<E: Extractor>(&mut self, extractor: &E, source: &E::Source) -> Result<(), Error> {
        let extraction = extractor.extract(source)?;
        self.push(extraction);

        Ok(())
    }

    /// Number of extractions received.
    #[must_use]
    pub const fn units(&self) -> usize {
        self.units
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Validate, promote keys and resolve inverses.
    pub fn prepare(self, options: &PrepareOptions) -> Result<PreparedModel, Error> {
        let mut model = self.model;
        info!(
            units = self.units,
            entities = model.entities.len(),
            contexts = model.contexts.len(),
            results = model.results.len(),
            "preparing batch"
        );

        validate_model(&model).map_err(ormshift_schema::Error::from)?;

        if options.promote_first_key {
            let promoted = promote_primary_keys(&mut model.entities);
            debug!(promoted, "key promotion finished");
        }

        model.entities = resolve_inverses(std::mem::take(&mut model.entities));

        Ok(PreparedModel { model })
    }
}

impl Extend<Extraction> for Batch {
    fn extend<T: IntoIterator<Item = Extraction>>(&mut self, iter: T) {
        for extraction in iter {
            self.push(extraction);
        }
    }
}

impl FromIterator<Extraction> for Batch {
    fn from_iter<T: IntoIterator<Item = Extraction>>(iter: T) -> Self {
        let mut batch = Self::new();
        batch.extend(iter);

        batch
    }
}

///
/// PrepareOptions
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrepareOptions {
    /// Mark the first declared property as key when an entity declares none.
    pub promote_first_key: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            promote_first_key: true,
        }
    }
}

impl From<&GenerateConfig> for PrepareOptions {
    fn from(config: &GenerateConfig) -> Self {
        Self {
            promote_first_key: config.promote_first_key,
        }
    }
}

/// Generator configured from the `[generate]` section.
#[must_use]
pub fn generator_for(config: &GenerateConfig) -> Generator {
    let options = RenderOptions {
        namespace: config.namespace.clone(),
    };

    Generator::new(options)
}

///
/// PreparedModel
///
/// A validated, resolved batch. Read-only from here on.
///

#[derive(Clone, Debug)]
pub struct PreparedModel {
    model: Model,
}

impl PreparedModel {
    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.model.entities
    }

    /// Render all four outputs; contexts are ordered by name.
    #[must_use]
    pub fn generate(&self, generator: &Generator) -> GeneratedSources {
        let mut contexts: Vec<ContextSource> = self
            .model
            .contexts
            .iter()
            .map(|context| ContextSource {
                name: context.name.clone(),
                text: generator.render_data_context(context),
            })
            .collect();
        contexts.sort_by(|a, b| a.name.cmp(&b.name));

        GeneratedSources {
            entities: generator.render_entities(&self.model.entities),
            configurations: generator.render_entity_configurations(&self.model.entities),
            contexts,
            results: generator.render_stored_procedure_results(&self.model.results),
        }
    }
}

///
/// ContextSource
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContextSource {
    pub name: String,
    pub text: String,
}

///
/// GeneratedSources
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedSources {
    pub entities: String,
    pub configurations: String,
    pub contexts: Vec<ContextSource>,
    pub results: String,
}

impl GeneratedSources {
    /// SHA-256 over every output in a fixed order, as lowercase hex.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        for (label, text) in self.sections() {
            hasher.update(label.as_bytes());
            hasher.update([0u8]);
            hasher.update(text.as_bytes());
            hasher.update([0u8]);
        }

        hex::encode(hasher.finalize())
    }

    /// Compare against an expected fingerprint (case-insensitive).
    pub fn verify(&self, expected: &str) -> Result<(), Error> {
        verify_fingerprint(&self.fingerprint(), expected)
    }

    /// Write every output under `dir`, returning the written paths.
    ///
    /// Nothing is written when two outputs would land on the same file.
    pub fn write_to(&self, dir: &Path, output: &OutputConfig) -> Result<Vec<PathBuf>, Error> {
        let mut files = vec![
            (output.entities.clone(), &self.entities),
            (output.configurations.clone(), &self.configurations),
        ];
        files.extend(
            self.contexts
                .iter()
                .map(|c| (output.context_file(&c.name), &c.text)),
        );
        files.push((output.results.clone(), &self.results));

        let mut targets = BTreeSet::new();
        for (name, _) in &files {
            // case-folded so case-insensitive filesystems collide too
            if !targets.insert(name.to_lowercase()) {
                return Err(Error::OutputCollision {
                    path: dir.join(name),
                });
            }
        }

        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

        let mut written = Vec::with_capacity(files.len());
        for (name, text) in files {
            let path = dir.join(name);
            fs::write(&path, text).map_err(|e| Error::io(&path, e))?;
            debug!(path = %path.display(), bytes = text.len(), "wrote generated source");
            written.push(path);
        }

        Ok(written)
    }

    // sections
    // fixed hashing order; contexts are already sorted by name
    fn sections(&self) -> Vec<(&str, &str)> {
        let mut sections = vec![
            ("entities", self.entities.as_str()),
            ("configurations", self.configurations.as_str()),
        ];
        sections.extend(
            self.contexts
                .iter()
                .map(|c| (c.name.as_str(), c.text.as_str())),
        );
        sections.push(("results", self.results.as_str()));

        sections
    }
}

/// Compare a computed fingerprint against an expected one (case-insensitive).
pub fn verify_fingerprint(actual: &str, expected: &str) -> Result<(), Error> {
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(Error::FingerprintMismatch {
            expected: expected.trim().to_string(),
            actual: actual.to_string(),
        })
    }
}

///
/// TESTS
///
