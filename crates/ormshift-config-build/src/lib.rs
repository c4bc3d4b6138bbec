//! `ormshift.toml` loading.
//!
//! Every key is optional; a missing section falls back to its defaults and an
//! unknown key is rejected so typos surface instead of being ignored.

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// File name looked up when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "ormshift.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generate: GenerateConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load a config file; a missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&text, path)
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse config text; `origin` only labels errors.
    pub fn parse(text: &str, origin: impl AsRef<Path>) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.as_ref().to_path_buf(),
            source,
        })
    }
}

///
/// GenerateConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// File-scoped namespace for every generated source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Mark the first declared property as key when an entity declares none.
    pub promote_first_key: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            promote_first_key: true,
        }
    }
}

///
/// OutputConfig
///
/// Where generated sources land. Context sources are named after the
/// context (`<Name>.cs`).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub entities: String,
    pub configurations: String,
    pub results: String,
}

impl OutputConfig {
    pub const SOURCE_EXTENSION: &str = "cs";

    /// File name for one context's source.
    #[must_use]
    pub fn context_file(&self, context_name: &str) -> String {
        format!("{context_name}.{}", Self::SOURCE_EXTENSION)
    }

    /// Output directory, with `override_dir` taking precedence.
    #[must_use]
    pub fn resolved_dir<'a>(&'a self, override_dir: Option<&'a Path>) -> &'a Path {
        override_dir.unwrap_or(&self.dir)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
            entities: "Entities.cs".to_string(),
            configurations: "EntityConfigurations.cs".to_string(),
            results: "StoredProcedureResults.cs".to_string(),
        }
    }
}

///
/// TESTS
///
