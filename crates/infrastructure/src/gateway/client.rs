//! API gateway implementation using reqwest.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url, redirect};
use serde::Serialize;
use serde::de::DeserializeOwned;

use buildflow_application::ports::{ApiError, AuthGateway, Navigator, TokenStorage};
use buildflow_application::session::SessionTeardown;
use buildflow_domain::{AuthToken, Credentials};

use crate::config::GatewayConfig;
use crate::gateway::{AuthRecovery, BearerAuth};
use crate::resources::{Expenses, Phases, Projects, Subphases, Suppliers, Users};

/// Token payload returned by `POST auth/login`.
#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    token: String,
}

/// Error payload carried by non-success responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// The single egress point for all calls to the remote API.
///
/// Wraps `reqwest::Client` with the interceptor pair: every call attaches
/// the stored bearer token on the way out and recovers from authentication
/// denials on the way back. Pages use the typed resource clients
/// ([`ApiGateway::projects`] and friends) and never see a token or a raw
/// status code.
pub struct ApiGateway<S, N> {
    client: Client,
    base_url: Url,
    auth: BearerAuth<S>,
    recovery: AuthRecovery<S, N>,
}

impl<S, N> ApiGateway<S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    /// Creates a gateway over the shared token store and teardown path.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        config: &GatewayConfig,
        storage: Arc<S>,
        teardown: Arc<SessionTeardown<S, N>>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("BuildFlow/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .redirect(redirect::Policy::limited(10))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            auth: BearerAuth::new(storage),
            recovery: AuthRecovery::new(teardown),
        })
    }

    /// Typed client for `proyectos`.
    #[must_use]
    pub const fn projects(&self) -> Projects<'_, S, N> {
        Projects::new(self)
    }

    /// Typed client for `fases`.
    #[must_use]
    pub const fn phases(&self) -> Phases<'_, S, N> {
        Phases::new(self)
    }

    /// Typed client for `subfases`.
    #[must_use]
    pub const fn subphases(&self) -> Subphases<'_, S, N> {
        Subphases::new(self)
    }

    /// Typed client for `proveedores`.
    #[must_use]
    pub const fn suppliers(&self) -> Suppliers<'_, S, N> {
        Suppliers::new(self)
    }

    /// Typed client for `gastos`.
    #[must_use]
    pub const fn expenses(&self) -> Expenses<'_, S, N> {
        Expenses::new(self)
    }

    /// Typed client for `usuarios`.
    #[must_use]
    pub const fn users(&self) -> Users<'_, S, N> {
        Users::new(self)
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract; [`ApiError::Decode`] if
    /// the body does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.client.get(self.endpoint(path)?)).await?;
        Self::decode(response).await
    }

    /// Issues a POST with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.client.post(self.endpoint(path)?).json(body))
            .await?;
        Self::decode(response).await
    }

    /// Issues a PUT with a JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.client.put(self.endpoint(path)?).json(body))
            .await?;
        Self::decode(response).await
    }

    /// Issues a DELETE, discarding any response body.
    ///
    /// # Errors
    ///
    /// Gateway errors per the interceptor contract.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.client.delete(self.endpoint(path)?))
            .await
            .map(drop)
    }

    /// Resolves a path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|e| ApiError::InvalidUrl(format!("{e}: {path}")))
    }

    /// Runs a request through the interceptor pair.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = self.auth.apply(builder).await;
        let response = builder.send().await.map_err(map_transport_error)?;

        let status = response.status();
        self.recovery.inspect(status).await?;

        if !status.is_success() {
            let message = extract_message(response).await;
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl<S, N> AuthGateway for ApiGateway<S, N>
where
    S: TokenStorage,
    N: Navigator,
{
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        let body: LoginResponse = self.post("auth/login", credentials).await?;
        Ok(AuthToken::new(body.token))
    }

    async fn check_session(&self) -> Result<(), ApiError> {
        // The backend has no dedicated liveness endpoint; a protected
        // collection read stands in for one.
        self.execute(self.client.get(self.endpoint("proyectos")?))
            .await
            .map(drop)
    }
}

/// Maps reqwest transport failures (no response received) to gateway
/// errors. These never tear the session down.
fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        return ApiError::Timeout;
    }
    if error.is_connect() {
        return ApiError::ConnectionFailed(error.to_string());
    }
    ApiError::Transport(error.to_string())
}

/// Pulls the optional human-readable `message` field out of an error body.
async fn extract_message(response: Response) -> Option<String> {
    let text = response.text().await.unwrap_or_default();
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) => body.message,
        Err(_) => None,
    }
}
