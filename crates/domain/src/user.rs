//! User account records.

use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// A managed user account (`usuarios` endpoints).
///
/// Distinct from [`crate::UserProfile`]: this is the administration record
/// listed and edited on the users page, not the session identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Login username.
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
    /// Write-only password, set on create; never returned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Soft-delete flag carried by the backend (1 = active).
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}
