//! Phase and subphase collection clients.

use buildflow_application::ports::{ApiError, Navigator, TokenStorage};
use buildflow_domain::{Phase, Subphase};

use crate::gateway::ApiGateway;

/// Client for the `fases` endpoints.
pub struct Phases<'a, S, N> {
    gateway: &'a ApiGateway<S, N>,
}

impl<'a, S, N> Phases<'a, S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    pub(crate) const fn new(gateway: &'a ApiGateway<S, N>) -> Self {
        Self { gateway }
    }

    /// Lists all phases.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn list(&self) -> Result<Vec<Phase>, ApiError> {
        self.gateway.get("fases").await
    }

    /// Fetches a single phase.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn fetch(&self, id: i64) -> Result<Phase, ApiError> {
        self.gateway.get(&format!("fases/{id}")).await
    }

    /// Creates a phase and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn create(&self, phase: &Phase) -> Result<Phase, ApiError> {
        self.gateway.post("fases", phase).await
    }

    /// Updates a phase and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn update(&self, id: i64, phase: &Phase) -> Result<Phase, ApiError> {
        self.gateway.put(&format!("fases/{id}"), phase).await
    }

    /// Deletes a phase.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("fases/{id}")).await
    }
}

/// Client for the `subfases` endpoints.
pub struct Subphases<'a, S, N> {
    gateway: &'a ApiGateway<S, N>,
}

impl<'a, S, N> Subphases<'a, S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    pub(crate) const fn new(gateway: &'a ApiGateway<S, N>) -> Self {
        Self { gateway }
    }

    /// Lists all subphases.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn list(&self) -> Result<Vec<Subphase>, ApiError> {
        self.gateway.get("subfases").await
    }

    /// Creates a subphase and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn create(&self, subphase: &Subphase) -> Result<Subphase, ApiError> {
        self.gateway.post("subfases", subphase).await
    }

    /// Updates a subphase and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn update(&self, id: i64, subphase: &Subphase) -> Result<Subphase, ApiError> {
        self.gateway.put(&format!("subfases/{id}"), subphase).await
    }

    /// Deletes a subphase.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("subfases/{id}")).await
    }
}
