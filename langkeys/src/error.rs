//! All error types for the langkeys crate.
//!
//! Loading a single locale never aborts a run: [`crate::loader::load_all`] turns these
//! into log events and an empty tree. They surface directly only from configuration
//! and discovery APIs.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("translation source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("malformed translation source {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Wraps a parse or read failure with the path of the offending source.
    pub fn malformed(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::Malformed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Creates a new configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }
}
