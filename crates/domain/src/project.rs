//! Construction project records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Being planned; no work started.
    #[serde(rename = "PLANIFICACION")]
    Planning,
    /// Work in progress.
    #[serde(rename = "EN_PROGRESO")]
    InProgress,
    /// Finished.
    #[serde(rename = "COMPLETADO")]
    Completed,
    /// Abandoned.
    #[serde(rename = "CANCELADO")]
    Cancelled,
}

impl ProjectStatus {
    /// The wire name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "PLANIFICACION",
            Self::InProgress => "EN_PROGRESO",
            Self::Completed => "COMPLETADO",
            Self::Cancelled => "CANCELADO",
        }
    }

    /// Whether the project has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLANIFICACION" => Ok(Self::Planning),
            "EN_PROGRESO" => Ok(Self::InProgress),
            "COMPLETADO" => Ok(Self::Completed),
            "CANCELADO" => Ok(Self::Cancelled),
            other => Err(DomainError::InvalidProjectStatus(other.to_string())),
        }
    }
}

/// A construction project as exchanged with `proyectos` endpoints.
///
/// Pure data; the client passes these records through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier; absent on create payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Project name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Site location.
    #[serde(rename = "ubicacion")]
    pub location: String,
    /// Work start date.
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,
    /// Planned completion date.
    #[serde(rename = "fechaFinEstimada")]
    pub estimated_end_date: NaiveDate,
    /// Actual completion date, once known.
    #[serde(rename = "fechaFinReal", default, skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<NaiveDate>,
    /// Total approved budget.
    #[serde(rename = "presupuestoTotal")]
    pub total_budget: f64,
    /// Budget not yet spent.
    #[serde(rename = "presupuestoRestante")]
    pub remaining_budget: f64,
    /// Lifecycle status.
    #[serde(rename = "estadoProyecto")]
    pub status: ProjectStatus,
    /// Completion percentage, 0-100.
    #[serde(rename = "porcentajeCompletado")]
    pub percent_complete: f64,
    /// Soft-delete flag carried by the backend (1 = active).
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub record_status: Option<i32>,
}

impl Project {
    /// Budget already committed.
    #[must_use]
    pub fn spent_budget(&self) -> f64 {
        self.total_budget - self.remaining_budget
    }
}
