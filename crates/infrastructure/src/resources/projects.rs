//! Project collection client.

use buildflow_application::ports::{ApiError, Navigator, TokenStorage};
use buildflow_domain::Project;

use crate::gateway::ApiGateway;

/// Client for the `proyectos` endpoints.
pub struct Projects<'a, S, N> {
    gateway: &'a ApiGateway<S, N>,
}

impl<'a, S, N> Projects<'a, S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    pub(crate) const fn new(gateway: &'a ApiGateway<S, N>) -> Self {
        Self { gateway }
    }

    /// Lists all projects.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        self.gateway.get("proyectos").await
    }

    /// Fetches a single project.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn fetch(&self, id: i64) -> Result<Project, ApiError> {
        self.gateway.get(&format!("proyectos/{id}")).await
    }

    /// Creates a project and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn create(&self, project: &Project) -> Result<Project, ApiError> {
        self.gateway.post("proyectos", project).await
    }

    /// Updates a project and returns the stored record.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn update(&self, id: i64, project: &Project) -> Result<Project, ApiError> {
        self.gateway.put(&format!("proyectos/{id}"), project).await
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.gateway.delete(&format!("proyectos/{id}")).await
    }
}
