//! Domain-level errors (no infrastructure dependencies)

use thiserror::Error;

/// Domain errors represent violations of the dataset's structural contract.
///
/// Classification and tree construction themselves never fail: dangling and
/// cyclic parent references degrade into implicit roots and bounded walks.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("duplicate agency id: {0}")]
    DuplicateId(String),

    #[error("unknown lineage tag: {0}")]
    UnknownLineage(String),
}
