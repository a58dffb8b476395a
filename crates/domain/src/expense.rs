//! Expense records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseType {
    /// Construction materials.
    #[serde(rename = "MATERIAL")]
    Material,
    /// Labor costs.
    #[serde(rename = "MANO_OBRA")]
    Labor,
    /// Machinery and equipment.
    #[serde(rename = "EQUIPO")]
    Equipment,
    /// Anything else.
    #[serde(rename = "OTROS")]
    Other,
}

/// A cost entry against a project (`gastos` endpoints).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// What the money was spent on.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Amount spent.
    #[serde(rename = "monto")]
    pub amount: f64,
    /// Date of the expense.
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Project charged.
    #[serde(rename = "proyectoId")]
    pub project_id: i64,
    /// Phase charged, if attributed to one.
    #[serde(rename = "faseId", default, skip_serializing_if = "Option::is_none")]
    pub phase_id: Option<i64>,
    /// Supplier billed, if any.
    #[serde(rename = "proveedorId", default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    /// Expense category.
    #[serde(rename = "tipoGasto")]
    pub kind: ExpenseType,
    /// Soft-delete flag carried by the backend (1 = active).
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expense_uses_wire_field_names() {
        let expense = Expense {
            id: Some(12),
            description: "Cemento Portland".to_string(),
            amount: 5400.50,
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            project_id: 7,
            phase_id: Some(3),
            supplier_id: None,
            kind: ExpenseType::Material,
            record_status: Some(1),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["monto"], 5400.50);
        assert_eq!(json["tipoGasto"], "MATERIAL");
        assert_eq!(json["faseId"], 3);
        assert!(json.get("proveedorId").is_none());
    }
}
