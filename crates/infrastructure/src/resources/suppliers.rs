//! Supplier collection client.

use buildflow_application::ports::{ApiError, Navigator, TokenStorage};
use buildflow_domain::Supplier;

use crate::gateway::ApiGateway;

/// Client for the `proveedores` endpoints.
pub struct Suppliers<'a, S, N> {
    gateway: &'a ApiGateway<S, N>,
}

impl<'a, S, N> Suppliers<'a, S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    pub(crate) const fn new(gateway: &'a ApiGateway<S, N>) -> Self {
        Self { gateway }
    }

    /// Lists all suppliers.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn list(&self) -> Result<Vec<Supplier>, ApiError> {
        self.gateway.get("proveedores").await
    }

    /// Creates a supplier and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn create(&self, supplier: &Supplier) -> Result<Supplier, ApiError> {
        self.gateway.post("proveedores", supplier).await
    }

    /// Updates a supplier and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn update(&self, id: i64, supplier: &Supplier) -> Result<Supplier, ApiError> {
        self.gateway.put(&format!("proveedores/{id}"), supplier).await
    }

    /// Deletes a supplier.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("proveedores/{id}")).await
    }
}
