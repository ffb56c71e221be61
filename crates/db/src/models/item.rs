//! Gear inventory item model and DTOs.

use gearbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<DbId>,
    pub condition_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub quantity: i32,
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Item row joined with its lookup names, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithNames {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub condition_id: Option<DbId>,
    pub condition_name: Option<String>,
    pub location_id: Option<DbId>,
    pub location_name: Option<String>,
    pub quantity: i32,
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub name: String,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<DbId>,
    pub condition_id: Option<DbId>,
    pub location_id: Option<DbId>,
    /// Defaults to 1 if omitted.
    pub quantity: Option<i32>,
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
}

/// DTO for updating an existing item. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<DbId>,
    pub condition_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub quantity: Option<i32>,
    pub daily_rate: Option<f64>,
    pub notes: Option<String>,
}
