//! Canonical mapping model shared by every legacy dialect front end.
//!
//! ## Crate layout
//! - `node`: passive model records (entities, properties, navigations, contexts).
//! - `types`: type-expression normalization and namespace tracking.
//! - `resolve`: batch passes run once before rendering (keys, inverses).
//! - `validate`: batch-wide caller-contract checks.
//! - `error`: route-aware error aggregation.

pub mod error;
pub mod node;
pub mod resolve;
pub mod types;
pub mod validate;

/// Namespace that is always in scope for generated sources and never imported.
pub const STANDARD_NAMESPACE: &str = "System";

/// Maximum length for entity identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 128;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{NormalizedType, PrimitiveAlias},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

impl From<ErrorTree> for Error {
    fn from(errs: ErrorTree) -> Self {
        Self::Validation(errs)
    }
}
