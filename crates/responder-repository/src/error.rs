//! Error types for repository operations.

use responder_models::QuestionId;
use responder_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The referenced question does not exist (raised form; read paths
    /// signal absence with `Ok(None)` instead).
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    /// A create input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// A required create field is missing, the wrong type, or blank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is absent from the input.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// The field is present but not a string.
    #[error("expected {field} to be a string, got {actual}")]
    NotAString {
        field: &'static str,
        actual: &'static str,
    },

    /// The field is an empty or whitespace-only string.
    #[error("expected {field} to be non-empty")]
    EmptyField { field: &'static str },
}

/// Result type alias for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
