//! Project entity model and DTOs.

use chrono::NaiveDate;
use gearbase_core::status::{compute_status, ProjectStatus};
use gearbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `status` holds the value computed at the last write. API responses go
/// through [`ProjectResponse`], which recomputes the effective status for
/// display and carries the stored one as `originalStatus`.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub location: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_id: Option<DbId>,
    pub project_manager_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The stored status parsed back into the enum.
    ///
    /// Falls back to `Planning` if the column somehow holds an unknown value;
    /// the CHECK constraint makes that unreachable in practice.
    pub fn stored_status(&self) -> ProjectStatus {
        self.status.parse().unwrap_or(ProjectStatus::Planning)
    }

    /// Build the API representation, recomputing the effective status as of
    /// `today`.
    pub fn into_response(self, today: NaiveDate) -> ProjectResponse {
        let stored = self.stored_status();
        let effective = compute_status(self.start_date, self.end_date, stored, today);
        ProjectResponse {
            id: self.id,
            name: self.name,
            description: self.description,
            status: effective,
            original_status: stored,
            location: self.location,
            budget: self.budget,
            start_date: self.start_date,
            end_date: self.end_date,
            client_id: self.client_id,
            project_manager_id: self.project_manager_id,
            contact_id: self.contact_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// API representation of a project: effective status plus the stored one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Recomputed from the dates as of the request.
    pub status: ProjectStatus,
    /// The value stored at the last write.
    pub original_status: ProjectStatus,
    pub location: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_id: Option<DbId>,
    pub project_manager_id: Option<DbId>,
    pub contact_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input body shared by `POST /projects` and `PUT /projects/{id}`.
///
/// PUT is a full replace so identical bodies always yield identical rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: String,
    pub description: Option<String>,
    /// Manual status; `Cancelled` / `On Hold` survive recomputation.
    pub status: Option<ProjectStatus>,
    pub location: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client_id: Option<DbId>,
    pub project_manager_id: Option<DbId>,
    pub contact_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(status: &str, start: &str, end: &str) -> Project {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        Project {
            id: 7,
            name: "Pilot".into(),
            description: None,
            status: status.into(),
            location: None,
            budget: Some(8000.0),
            start_date: Some(start.parse().unwrap()),
            end_date: Some(end.parse().unwrap()),
            client_id: None,
            project_manager_id: None,
            contact_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn response_recomputes_status_but_keeps_original() {
        // Stored as Planned, but the window has since gone live.
        let project = sample("Planned", "2026-08-10", "2026-08-20");
        let response = project.into_response("2026-08-15".parse().unwrap());

        assert_eq!(response.status, ProjectStatus::Active);
        assert_eq!(response.original_status, ProjectStatus::Planned);
    }

    #[test]
    fn response_serializes_camel_case() {
        let project = sample("Active", "2026-08-10", "2026-08-20");
        let response = project.into_response("2026-08-15".parse().unwrap());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["startDate"], "2026-08-10");
        assert_eq!(json["originalStatus"], "Active");
        assert!(json.get("start_date").is_none());
    }
}
