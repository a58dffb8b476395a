//! Gateway configuration.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Errors raised while building a [`GatewayConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The timeout value could not be parsed.
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Connection settings for the API gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    base_url: Url,
    timeout: Duration,
}

impl GatewayConfig {
    /// Base URL used when `BUILDFLOW_API_URL` is not set.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api";

    const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Creates a config for the given base URL.
    ///
    /// The URL is normalized to end in a slash so endpoint paths join under
    /// it instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut normalized = base_url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{e}: {base_url}")))?;
        Ok(Self {
            base_url,
            timeout: Duration::from_millis(Self::DEFAULT_TIMEOUT_MS),
        })
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `BUILDFLOW_API_URL` and `BUILDFLOW_TIMEOUT_MS` from the
    /// environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("BUILDFLOW_API_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        let timeout_ms = match std::env::var("BUILDFLOW_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidTimeout(format!("{e}: {raw}")))?,
            Err(_) => Self::DEFAULT_TIMEOUT_MS,
        };
        Ok(Self::new(&base_url)?.with_timeout(Duration::from_millis(timeout_ms)))
    }

    /// The normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
