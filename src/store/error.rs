//! Store-level errors (wraps domain errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

/// Dataset loading failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("dataset not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no *.json datasets under: {0}")]
    EmptyScan(PathBuf),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
