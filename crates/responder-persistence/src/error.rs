//! Error types for persistence operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read the dataset file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the dataset file.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a valid serialized dataset.
    #[error("invalid dataset in {path}: {source}")]
    DecodeError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the dataset to JSON.
    #[error("failed to serialize dataset: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
