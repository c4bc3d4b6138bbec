//! ## Crate layout
//! - `build`: deterministic source rendering (entities, configurations,
//!   contexts, procedure results).
//! - `config`: `ormshift.toml` loading.
//! - `error`: the facade error type.
//! - `extract`: the boundary every legacy dialect front end implements.
//! - `pipeline`: batch collection, validation, resolution and output.
//! - `schema`: the canonical mapping model, type normalizer and resolver.
//!
//! The `prelude` module exposes what a front end or a test harness needs to
//! feed a batch through to generated sources.

pub use ormshift_build as build;
pub use ormshift_config_build as config;
pub use ormshift_schema as schema;

pub mod error;
pub mod extract;
pub mod pipeline;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{Generator, RenderOptions},
        config::Config,
        error::Error,
        extract::{Dialect, ExtractError, Extraction, Extractor, ModelSnapshot, SnapshotExtractor},
        pipeline::{Batch, GeneratedSources, PrepareOptions, PreparedModel},
        schema::node::*,
    };
}
