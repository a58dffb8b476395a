//! In-memory token storage.
//!
//! Thread-safe single-slot store for the session token. The file-backed
//! adapter in the infrastructure layer is the persistent counterpart; this
//! one serves tests and embedders that keep the session in process memory.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use buildflow_domain::AuthToken;

use crate::ports::{StorageError, TokenStorage};

/// Thread-safe in-memory token store.
///
/// Cloning is cheap and all clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStorage {
    token: Arc<RwLock<Option<AuthToken>>>,
}

impl InMemoryTokenStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a token.
    #[must_use]
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn load(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self.token.read().await.clone())
    }

    async fn store(&self, token: &AuthToken) -> Result<(), StorageError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.token.write().await = None;
        Ok(())
    }
}
