//! Phase and subphase records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A top-level stage of a project (`fases` endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Phase name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Phase start date.
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,
    /// Phase end date.
    #[serde(rename = "fechaFin")]
    pub end_date: NaiveDate,
    /// Owning project.
    #[serde(rename = "proyectoId")]
    pub project_id: i64,
    /// Soft-delete flag carried by the backend (1 = active).
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

/// Progress status of a subphase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubphaseStatus {
    /// Not started.
    #[serde(rename = "PENDIENTE")]
    Pending,
    /// Work in progress.
    #[serde(rename = "EN_PROGRESO")]
    InProgress,
    /// Finished.
    #[serde(rename = "COMPLETADA")]
    Completed,
}

/// A unit of work within a phase (`subfases` endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subphase {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Subphase name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Subphase start date.
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,
    /// Subphase end date.
    #[serde(rename = "fechaFin")]
    pub end_date: NaiveDate,
    /// Progress status.
    #[serde(rename = "estadoSubfase")]
    pub status: SubphaseStatus,
    /// Owning phase.
    #[serde(rename = "faseId")]
    pub phase_id: i64,
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
    fn subphase_round_trips_wire_names() {
        let subphase = Subphase {
            id: None,
            name: "Encofrado".to_string(),
            description: "Encofrado de columnas".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            status: SubphaseStatus::Pending,
            phase_id: 3,
            record_status: None,
        };
        let json = serde_json::to_value(&subphase).unwrap();
        assert_eq!(json["estadoSubfase"], "PENDIENTE");
        assert_eq!(json["faseId"], 3);

        let back: Subphase = serde_json::from_value(json).unwrap();
        assert_eq!(back, subphase);
    }
}
