//! Error types for the museum library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for museum operations.
#[derive(Debug, Error)]
pub enum MuseumError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted document could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input rejected before any mutation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An exhibit with this id is already registered in the store.
    #[error("Exhibit id {0} is already taken")]
    DuplicateId(u64),

    /// An exhibit with this uid is already registered in the store.
    #[error("Exhibit uid '{0}' is already taken")]
    DuplicateUid(String),
}

/// Result type alias for museum operations.
pub type Result<T> = std::result::Result<T, MuseumError>;
