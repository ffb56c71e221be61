//! Booking model and DTOs: item reservations for a project over a date range.

use chrono::NaiveDate;
use gearbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub project_id: DbId,
    pub item_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub quantity: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Booking joined with item and project names, for list views.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithNames {
    pub id: DbId,
    pub project_id: DbId,
    pub project_name: String,
    pub item_id: DbId,
    pub item_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub quantity: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub project_id: DbId,
    pub item_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Defaults to 1 if omitted.
    pub quantity: Option<i32>,
    pub notes: Option<String>,
}

/// DTO for updating an existing booking. Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    pub item_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub quantity: Option<i32>,
    pub notes: Option<String>,
}
