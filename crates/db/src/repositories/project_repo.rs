//! Repository for the `projects` table.

use gearbase_core::status::ProjectStatus;
use gearbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{Project, ProjectInput};

const COLUMNS: &str = "id, name, description, status, location, budget, start_date, end_date, \
     client_id, project_manager_id, contact_id, created_at, updated_at";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project. `status` is the value the handler computed from
    /// the dates; it is never taken verbatim from the client.
    pub async fn create(
        pool: &PgPool,
        input: &ProjectInput,
        status: ProjectStatus,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                (name, description, status, location, budget, start_date, end_date, \
                 client_id, project_manager_id, contact_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(status.as_str())
            .bind(&input.location)
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.client_id)
            .bind(input.project_manager_id)
            .bind(input.contact_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List only the projects a user holds a team assignment on, newest first.
    ///
    /// Used for the `staff` access scope.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE EXISTS (\
                SELECT 1 FROM project_team_members tm \
                WHERE tm.project_id = projects.id AND tm.user_id = $1) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Full-replace update, so identical PUT bodies yield identical rows.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
        status: ProjectStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                name = $2, description = $3, status = $4, location = $5, budget = $6, \
                start_date = $7, end_date = $8, client_id = $9, project_manager_id = $10, \
                contact_id = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(status.as_str())
            .bind(&input.location)
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.client_id)
            .bind(input.project_manager_id)
            .bind(input.contact_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Returns `true` if a row was removed. Team assignments
    /// and bookings cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
