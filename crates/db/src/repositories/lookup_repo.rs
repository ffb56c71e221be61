//! Repositories for the inventory lookup tables.
//!
//! `categories`, `conditions`, and `locations` share one shape, so the CRUD
//! is written once over a compile-time table name and exposed as three
//! concrete repos.

use gearbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::lookup::{CreateLookupEntry, LookupEntry, UpdateLookupEntry};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

async fn list(pool: &PgPool, table: &str) -> Result<Vec<LookupEntry>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM {table} ORDER BY name");
    sqlx::query_as::<_, LookupEntry>(&query).fetch_all(pool).await
}

async fn find_by_id(
    pool: &PgPool,
    table: &str,
    id: DbId,
) -> Result<Option<LookupEntry>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM {table} WHERE id = $1");
    sqlx::query_as::<_, LookupEntry>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

async fn create(
    pool: &PgPool,
    table: &str,
    input: &CreateLookupEntry,
) -> Result<LookupEntry, sqlx::Error> {
    let query = format!(
        "INSERT INTO {table} (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, LookupEntry>(&query)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(pool)
        .await
}

async fn update(
    pool: &PgPool,
    table: &str,
    id: DbId,
    input: &UpdateLookupEntry,
) -> Result<Option<LookupEntry>, sqlx::Error> {
    let query = format!(
        "UPDATE {table} SET \
            name = COALESCE($2, name), \
            description = COALESCE($3, description) \
         WHERE id = $1 \
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, LookupEntry>(&query)
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_optional(pool)
        .await
}

async fn delete(pool: &PgPool, table: &str, id: DbId) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {table} WHERE id = $1");
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

macro_rules! lookup_repo {
    ($name:ident, $table:literal) => {
        pub struct $name;

        impl $name {
            pub async fn list(pool: &PgPool) -> Result<Vec<LookupEntry>, sqlx::Error> {
                list(pool, $table).await
            }

            pub async fn find_by_id(
                pool: &PgPool,
                id: DbId,
            ) -> Result<Option<LookupEntry>, sqlx::Error> {
                find_by_id(pool, $table, id).await
            }

            pub async fn create(
                pool: &PgPool,
                input: &CreateLookupEntry,
            ) -> Result<LookupEntry, sqlx::Error> {
                create(pool, $table, input).await
            }

            pub async fn update(
                pool: &PgPool,
                id: DbId,
                input: &UpdateLookupEntry,
            ) -> Result<Option<LookupEntry>, sqlx::Error> {
                update(pool, $table, id, input).await
            }

            pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
                delete(pool, $table, id).await
            }
        }
    };
}

lookup_repo!(CategoryRepo, "categories");
lookup_repo!(ConditionRepo, "conditions");
lookup_repo!(LocationRepo, "locations");
