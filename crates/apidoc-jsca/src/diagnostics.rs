//! Error types
//!
//! Mapping the registry into JSCA never fails; errors only arise when the
//! finished document is serialized or written to its destination.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for apidoc-jsca operations
pub type JscaResult<T> = Result<T, JscaError>;

/// Main error type for apidoc-jsca
#[derive(Debug, Error)]
pub enum JscaError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be written to the given path
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl JscaError {
    /// Create a write error for a path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JscaError::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        JscaError::Config(message.into())
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        JscaError::Other(message.into())
    }
}
