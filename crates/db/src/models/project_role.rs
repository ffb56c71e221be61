//! Project role entity model (fixed vocabulary, read-only lookup).

use gearbase_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A project role row from the `project_roles` table (e.g. DIT, Data Manager).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRole {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
