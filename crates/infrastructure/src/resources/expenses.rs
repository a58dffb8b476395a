//! Expense collection client.

use buildflow_application::ports::{ApiError, Navigator, TokenStorage};
use buildflow_domain::Expense;

use crate::gateway::ApiGateway;

/// Client for the `gastos` endpoints.
pub struct Expenses<'a, S, N> {
    gateway: &'a ApiGateway<S, N>,
}

impl<'a, S, N> Expenses<'a, S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    pub(crate) const fn new(gateway: &'a ApiGateway<S, N>) -> Self {
        Self { gateway }
    }

    /// Lists all expenses.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn list(&self) -> Result<Vec<Expense>, ApiError> {
        self.gateway.get("gastos").await
    }

    /// Creates an expense and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn create(&self, expense: &Expense) -> Result<Expense, ApiError> {
        self.gateway.post("gastos", expense).await
    }

    /// Updates an expense and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn update(&self, id: i64, expense: &Expense) -> Result<Expense, ApiError> {
        self.gateway.put(&format!("gastos/{id}"), expense).await
    }

    /// Deletes an expense.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("gastos/{id}")).await
    }
}
