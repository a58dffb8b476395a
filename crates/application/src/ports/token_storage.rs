//! Token storage port
//!
//! The stored credential is a single named entry holding the raw token
//! string. Absence means "no session"; presence does not by itself
//! guarantee validity.

use async_trait::async_trait;
use thiserror::Error;

use buildflow_domain::AuthToken;

/// Errors that can occur during token storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error from the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting the session token.
///
/// At most one token is stored at a time; storing replaces any previous
/// value and clearing is idempotent.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Reads the stored token. A missing entry is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing store itself fails.
    async fn load(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be written.
    async fn store(&self, token: &AuthToken) -> Result<(), StorageError>;

    /// Removes the stored token. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing store itself fails.
    async fn clear(&self) -> Result<(), StorageError>;
}
