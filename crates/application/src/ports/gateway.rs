//! Authentication gateway port
//!
//! The session manager never talks HTTP directly; it goes through this
//! trait, implemented by the API gateway adapter in the infrastructure
//! layer.

use async_trait::async_trait;
use thiserror::Error;

use buildflow_domain::{AuthToken, Credentials};

/// Errors surfaced by calls through the API gateway.
///
/// The taxonomy matters to the session layer: only
/// [`ApiError::AuthenticationDenied`] is fatal to a session. Everything
/// else propagates to the caller for display and leaves session state
/// untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the credential (expired, revoked or malformed).
    #[error("authentication denied")]
    AuthenticationDenied,

    /// The server answered with a non-success status other than a denial.
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no detail"))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Human-readable message from the response body, when present.
        message: Option<String>,
    },

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Whether this error invalidates the session.
    #[must_use]
    pub const fn is_authentication_denied(&self) -> bool {
        matches!(self, Self::AuthenticationDenied)
    }

    /// The server's human-readable message, when one was returned.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Port for the authentication operations the session manager needs.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a bearer token (`POST auth/login`).
    ///
    /// # Errors
    ///
    /// Returns the gateway error unchanged; the caller decides how to
    /// display it. No token is persisted by this call.
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    /// Liveness probe: a protected collection read that succeeds only while
    /// the stored token is accepted by the server.
    ///
    /// # Errors
    ///
    /// [`ApiError::AuthenticationDenied`] when the token was rejected; any
    /// other error means the probe itself failed and says nothing about
    /// token validity.
    async fn check_session(&self) -> Result<(), ApiError>;
}
