//! Repository for the `project_roles` table (seeded vocabulary, read-only).

use sqlx::PgPool;

use crate::models::project_role::ProjectRole;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct ProjectRoleRepo;

impl ProjectRoleRepo {
    /// List all project roles ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_roles ORDER BY name");
        sqlx::query_as::<_, ProjectRole>(&query).fetch_all(pool).await
    }
}
