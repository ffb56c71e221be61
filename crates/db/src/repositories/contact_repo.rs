//! Repository for the `contacts` table (scoped under a client).

use gearbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

const COLUMNS: &str =
    "id, client_id, name, email, phone, role_title, notes, created_at, updated_at";

pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact under a client.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateContact,
    ) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (client_id, name, email, phone, role_title, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(client_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.role_title)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by id, scoped to its client.
    pub async fn find_by_id(
        pool: &PgPool,
        client_id: DbId,
        id: DbId,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1 AND client_id = $2");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(client_id)
            .fetch_optional(pool)
            .await
    }

    /// List a client's contacts ordered by name.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE client_id = $1 ORDER BY name");
        sqlx::query_as::<_, Contact>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update a contact. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        client_id: DbId,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                name = COALESCE($3, name), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone), \
                role_title = COALESCE($6, role_title), \
                notes = COALESCE($7, notes) \
             WHERE id = $1 AND client_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(client_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.role_title)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, client_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND client_id = $2")
            .bind(id)
            .bind(client_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
