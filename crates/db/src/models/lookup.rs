//! Shared model for the inventory lookup vocabularies.
//!
//! `categories`, `conditions`, and `locations` have identical shapes, so one
//! entity/DTO pair serves all three tables.

use gearbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from one of the lookup tables.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupEntry {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a lookup entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLookupEntry {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a lookup entry. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLookupEntry {
    pub name: Option<String>,
    pub description: Option<String>,
}
