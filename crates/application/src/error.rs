//! Application error types

use thiserror::Error;

use buildflow_domain::DomainError;

use crate::ports::{ApiError, StorageError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A call through the API gateway failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A token storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApplicationError {
    /// The underlying gateway error, when this wraps one.
    ///
    /// Pages use this to pull the server's human-readable message out of a
    /// failed login without unwrapping the whole error chain.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
