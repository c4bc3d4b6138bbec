use crate::extract::ExtractError;
use ormshift_config_build::ConfigError;
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] ormshift_schema::Error),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("i/o error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("two outputs target '{path}'")]
    OutputCollision { path: PathBuf },

    #[error("fingerprint mismatch: expected {expected}, generated {actual}")]
    FingerprintMismatch { expected: String, actual: String },
}

impl Error {
    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
