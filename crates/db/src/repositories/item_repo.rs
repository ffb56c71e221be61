//! Repository for the `items` table.

use gearbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{CreateItem, Item, ItemWithNames, UpdateItem};

const COLUMNS: &str = "id, name, description, serial_number, category_id, condition_id, \
     location_id, quantity, daily_rate, notes, created_at, updated_at";

/// Joined projection with lookup names resolved.
const JOINED_COLUMNS: &str = "i.id, i.name, i.description, i.serial_number, \
     i.category_id, cat.name AS category_name, \
     i.condition_id, cond.name AS condition_name, \
     i.location_id, loc.name AS location_name, \
     i.quantity, i.daily_rate, i.notes, i.created_at, i.updated_at";

pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row. Quantity defaults to 1.
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items \
                (name, description, serial_number, category_id, condition_id, location_id, \
                 quantity, daily_rate, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 1), $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.serial_number)
            .bind(input.category_id)
            .bind(input.condition_id)
            .bind(input.location_id)
            .bind(input.quantity)
            .bind(input.daily_rate)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items with lookup names resolved, optionally filtered by
    /// category, ordered by name.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<ItemWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM items i \
             LEFT JOIN categories cat ON cat.id = i.category_id \
             LEFT JOIN conditions cond ON cond.id = i.condition_id \
             LEFT JOIN locations loc ON loc.id = i.location_id \
             WHERE $1::BIGINT IS NULL OR i.category_id = $1 \
             ORDER BY i.name"
        );
        sqlx::query_as::<_, ItemWithNames>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                serial_number = COALESCE($4, serial_number), \
                category_id = COALESCE($5, category_id), \
                condition_id = COALESCE($6, condition_id), \
                location_id = COALESCE($7, location_id), \
                quantity = COALESCE($8, quantity), \
                daily_rate = COALESCE($9, daily_rate), \
                notes = COALESCE($10, notes) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.serial_number)
            .bind(input.category_id)
            .bind(input.condition_id)
            .bind(input.location_id)
            .bind(input.quantity)
            .bind(input.daily_rate)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
