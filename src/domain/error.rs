//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of loader and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("\"{0}\" not found")]
    NotFound(String),

    #[error("no room for \"{item}\" in \"{target}\"")]
    OutOfCapacity { target: String, item: String },

    #[error("duplicate name in catalog: {0}")]
    DuplicateName(String),

    #[error("multi-container \"{multi}\" references unregistered compartment \"{compartment}\"")]
    UnresolvedReference { multi: String, compartment: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
