//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The role string does not name a known role.
    #[error("unknown role: {0}")]
    InvalidRole(String),

    /// The status string does not name a known project status.
    #[error("unknown project status: {0}")]
    InvalidProjectStatus(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
