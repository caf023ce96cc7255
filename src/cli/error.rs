//! CLI-level errors (top of the error chain)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::store::StoreError;

/// CLI errors are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("failed to serialize forest: {0}")]
    Export(#[from] serde_json::Error),

    #[error("no agency with id: {0}")]
    UnknownAgency(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Store(e) => match e {
                StoreError::NotFound(_) | StoreError::EmptyScan(_) => exitcode::NOINPUT,
                StoreError::Io { .. } => exitcode::IOERR,
                StoreError::Malformed { .. } | StoreError::Domain(_) => exitcode::DATAERR,
            },
            CliError::Domain(DomainError::DuplicateId(_)) => exitcode::DATAERR,
            CliError::Domain(DomainError::UnknownLineage(_)) => exitcode::USAGE,
            CliError::Settings(_) => exitcode::CONFIG,
            CliError::Export(_) => exitcode::SOFTWARE,
            CliError::UnknownAgency(_) => exitcode::USAGE,
        }
    }
}
