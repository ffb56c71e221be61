//! Project team-member assignment model and DTOs.

use chrono::NaiveDate;
use gearbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_team_members` table: one contiguous assignment of
/// a user to a project in a given role.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub project_role_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Assignment joined with user and role names, for the team list view.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberWithNames {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub project_role_id: DbId,
    pub role_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input body for team-assignment create and update.
///
/// Every field except `notes` is required; they stay `Option` here so the
/// handler can reject missing values with a 400 instead of a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInput {
    pub user_id: Option<DbId>,
    pub project_role_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
