//! Repository for the `bookings` table.

use gearbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingWithNames, CreateBooking, UpdateBooking};

const COLUMNS: &str = "id, project_id, item_id, start_date, end_date, quantity, notes, \
     created_at, updated_at";

const JOINED_COLUMNS: &str = "b.id, b.project_id, p.name AS project_name, b.item_id, \
     i.name AS item_name, b.start_date, b.end_date, b.quantity, b.notes, \
     b.created_at, b.updated_at";

pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking. Quantity defaults to 1.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (project_id, item_id, start_date, end_date, quantity, notes) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 1), $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.project_id)
            .bind(input.item_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.quantity)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings with project and item names, optionally filtered by
    /// project, ordered by start date.
    pub async fn list(
        pool: &PgPool,
        project_id: Option<DbId>,
    ) -> Result<Vec<BookingWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM bookings b \
             JOIN projects p ON p.id = b.project_id \
             JOIN items i ON i.id = b.item_id \
             WHERE $1::BIGINT IS NULL OR b.project_id = $1 \
             ORDER BY b.start_date, i.name"
        );
        sqlx::query_as::<_, BookingWithNames>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET \
                item_id = COALESCE($2, item_id), \
                start_date = COALESCE($3, start_date), \
                end_date = COALESCE($4, end_date), \
                quantity = COALESCE($5, quantity), \
                notes = COALESCE($6, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.item_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.quantity)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a booking. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
