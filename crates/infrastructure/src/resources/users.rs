//! User account collection client.
//!
//! The users page is admin-gated in the rendering layer
//! (`SessionState::can_manage_users`); the API enforces the same rule
//! server-side.

use buildflow_application::ports::{ApiError, Navigator, TokenStorage};
use buildflow_domain::UserAccount;

use crate::gateway::ApiGateway;

/// Client for the `usuarios` endpoints.
pub struct Users<'a, S, N> {
    gateway: &'a ApiGateway<S, N>,
}

impl<'a, S, N> Users<'a, S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    pub(crate) const fn new(gateway: &'a ApiGateway<S, N>) -> Self {
        Self { gateway }
    }

    /// Lists all user accounts.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn list(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.gateway.get("usuarios").await
    }

    /// Creates an account and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn create(&self, account: &UserAccount) -> Result<UserAccount, ApiError> {
        self.gateway.post("usuarios", account).await
    }

    /// Updates an account and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn update(&self, id: i64, account: &UserAccount) -> Result<UserAccount, ApiError> {
        self.gateway.put(&format!("usuarios/{id}"), account).await
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("usuarios/{id}")).await
    }
}
