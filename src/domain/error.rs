//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} must not be empty")]
    EmptyIdentifier { field: &'static str },

    #[error("{field} must not contain whitespace: {value:?}")]
    InvalidIdentifier { field: &'static str, value: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
