//! Supplier records.

use serde::{Deserialize, Serialize};

/// A goods or services provider (`proveedores` endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Company name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Tax identifier (RUC).
    pub ruc: String,
    /// Contact phone.
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    #[serde(rename = "direccion")]
    pub address: String,
    /// What the supplier provides.
    #[serde(rename = "tipoServicio")]
    pub service_type: String,
    /// Soft-delete flag carried by the backend (1 = active).
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}
