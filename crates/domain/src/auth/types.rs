//! Credential, token and identity types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Login credentials submitted to the authentication endpoint.
///
/// Serializes to the `{ "username": ..., "password": ... }` body expected by
/// `POST auth/login`. The `Debug` implementation redacts the password so
/// credentials can appear in logs safely.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password. Never printed.
    pub password: String,
}

impl Credentials {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer credential issued by the authentication endpoint.
///
/// The raw string is never interpreted client-side; it is stored, attached
/// to outgoing requests, and cleared on teardown. Round-trips through
/// storage and the request stage byte-for-byte.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns the raw string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Renders the `Authorization` header value for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// A truncated preview of the token (first 8 chars + ...), safe to log.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.0.len() > 12 {
            format!("{}...", &self.0[..8])
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&self.preview()).finish()
    }
}

impl From<String> for AuthToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Access role attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including user administration.
    #[serde(rename = "ADMIN")]
    Admin,
    /// Project and budget management.
    #[serde(rename = "GERENTE")]
    Manager,
    /// Site supervision.
    #[serde(rename = "SUPERVISOR")]
    Supervisor,
}

impl Role {
    /// The wire name of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "GERENTE",
            Self::Supervisor => "SUPERVISOR",
        }
    }

    /// Whether this role grants user administration.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "GERENTE" => Ok(Self::Manager),
            "SUPERVISOR" => Ok(Self::Supervisor),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

/// Identity of the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account username.
    pub username: String,
    /// Given name.
    #[serde(rename = "nombre")]
    pub given_name: String,
    /// Family name.
    #[serde(rename = "apellido")]
    pub family_name: String,
    /// Contact email.
    pub email: String,
    /// Access role.
    #[serde(rename = "rol")]
    pub role: Role,
}

impl UserProfile {
    /// The fixed profile synthesized when a stored token passes the
    /// liveness probe.
    ///
    /// The backend has no identity endpoint, so the session layer cannot
    /// ask "who am I" after validating a token. This constructor is the
    /// single seam to replace once such an endpoint exists.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            username: "admin".to_string(),
            given_name: "Admin".to_string(),
            family_name: "User".to_string(),
            email: "admin@buildflow.com".to_string(),
            role: Role::Admin,
        }
    }

    /// Display name, given name first.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}
