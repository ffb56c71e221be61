//! Repository for kit templates and their item lines.
//!
//! Create and update write the template and its lines in one transaction;
//! any failure rolls the whole write back.

use gearbase_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::kit_template::{
    KitItemInput, KitTemplate, KitTemplateInput, KitTemplateLine, KitTemplateWithItems,
};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

const LINE_COLUMNS: &str = "kti.id, kti.item_id, i.name AS item_name, kti.quantity";

pub struct KitTemplateRepo;

impl KitTemplateRepo {
    /// Create a template together with its item lines.
    pub async fn create(
        pool: &PgPool,
        input: &KitTemplateInput,
    ) -> Result<KitTemplateWithItems, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO kit_templates (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let template = sqlx::query_as::<_, KitTemplate>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        insert_lines(&mut tx, template.id, &input.items).await?;

        tx.commit().await?;
        Self::get_with_items_given(pool, template).await
    }

    /// Replace a template's fields and its entire item list.
    ///
    /// Returns `None` if the template does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &KitTemplateInput,
    ) -> Result<Option<KitTemplateWithItems>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE kit_templates SET name = $2, description = $3 WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let template = sqlx::query_as::<_, KitTemplate>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(template) = template else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM kit_template_items WHERE template_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_lines(&mut tx, id, &input.items).await?;

        tx.commit().await?;
        Self::get_with_items_given(pool, template).await.map(Some)
    }

    /// List all templates (without lines), ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<KitTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kit_templates ORDER BY name");
        sqlx::query_as::<_, KitTemplate>(&query).fetch_all(pool).await
    }

    /// Fetch a template with its item lines.
    pub async fn get_with_items(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<KitTemplateWithItems>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kit_templates WHERE id = $1");
        let template = sqlx::query_as::<_, KitTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match template {
            Some(template) => Self::get_with_items_given(pool, template).await.map(Some),
            None => Ok(None),
        }
    }

    /// Delete a template. Returns `true` if a row was removed. Lines cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kit_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_with_items_given(
        pool: &PgPool,
        template: KitTemplate,
    ) -> Result<KitTemplateWithItems, sqlx::Error> {
        let query = format!(
            "SELECT {LINE_COLUMNS} FROM kit_template_items kti \
             JOIN items i ON i.id = kti.item_id \
             WHERE kti.template_id = $1 \
             ORDER BY i.name"
        );
        let items = sqlx::query_as::<_, KitTemplateLine>(&query)
            .bind(template.id)
            .fetch_all(pool)
            .await?;
        Ok(KitTemplateWithItems { template, items })
    }
}

async fn insert_lines(
    tx: &mut Transaction<'_, Postgres>,
    template_id: DbId,
    items: &[KitItemInput],
) -> Result<(), sqlx::Error> {
    for line in items {
        sqlx::query(
            "INSERT INTO kit_template_items (template_id, item_id, quantity) VALUES ($1, $2, $3)",
        )
        .bind(template_id)
        .bind(line.item_id)
        .bind(line.quantity)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
