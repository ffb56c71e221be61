//! Repository for the `project_team_members` table.
//!
//! Writes run the overlap checks and the insert/update inside a single
//! SERIALIZABLE transaction, so two concurrent requests cannot both pass the
//! check and commit conflicting rows. Serialization failures surface as
//! SQLSTATE 40001 and are mapped to 409 by the API layer.

use chrono::NaiveDate;
use gearbase_core::overlap::{find_conflict, DateRange, OwnedRange};
use gearbase_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::team_member::{TeamMember, TeamMemberWithNames};

const COLUMNS: &str = "id, project_id, user_id, project_role_id, start_date, end_date, notes, \
     created_at, updated_at";

const JOINED_COLUMNS: &str = "tm.id, tm.project_id, tm.user_id, u.username AS user_name, \
     tm.project_role_id, pr.name AS role_name, tm.start_date, tm.end_date, tm.notes, \
     tm.created_at, tm.updated_at";

/// Why a team-assignment write was refused.
#[derive(Debug, thiserror::Error)]
pub enum TeamWriteError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),

    /// The user already holds an overlapping assignment on this project.
    #[error("User already has an assignment from {start} to {end} on this project")]
    Overlap { start: NaiveDate, end: NaiveDate },

    /// The user is flagged exclusive-usage and overlaps an assignment on
    /// another project.
    #[error("User has exclusive usage and is already assigned to '{project_name}' from {start} to {end}")]
    ExclusiveConflict {
        project_name: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// A cross-project assignment that blocks an exclusive-usage user.
#[derive(Debug, sqlx::FromRow)]
struct ForeignAssignment {
    project_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// List a project's assignments with user and role names, ordered by
    /// start date then user name.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<TeamMemberWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM project_team_members tm \
             JOIN users u ON u.id = tm.user_id \
             JOIN project_roles pr ON pr.id = tm.project_role_id \
             WHERE tm.project_id = $1 \
             ORDER BY tm.start_date, u.username"
        );
        sqlx::query_as::<_, TeamMemberWithNames>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one assignment with user and role names resolved.
    pub async fn get_with_names(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<TeamMemberWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM project_team_members tm \
             JOIN users u ON u.id = tm.user_id \
             JOIN project_roles pr ON pr.id = tm.project_role_id \
             WHERE tm.id = $1 AND tm.project_id = $2"
        );
        sqlx::query_as::<_, TeamMemberWithNames>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new assignment after running both overlap checks inside a
    /// serializable transaction.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
        project_role_id: DbId,
        range: DateRange,
        notes: Option<&str>,
    ) -> Result<TeamMember, TeamWriteError> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        check_conflicts(&mut tx, project_id, user_id, range, None).await?;

        let query = format!(
            "INSERT INTO project_team_members \
                (project_id, user_id, project_role_id, start_date, end_date, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let member = sqlx::query_as::<_, TeamMember>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(project_role_id)
            .bind(range.start)
            .bind(range.end)
            .bind(notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(member)
    }

    /// Replace an assignment's fields after re-running the overlap checks,
    /// excluding the row itself from the conflict set.
    ///
    /// Returns `None` if the assignment does not exist under this project.
    pub async fn update(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        user_id: DbId,
        project_role_id: DbId,
        range: DateRange,
        notes: Option<&str>,
    ) -> Result<Option<TeamMember>, TeamWriteError> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        check_conflicts(&mut tx, project_id, user_id, range, Some(id)).await?;

        let query = format!(
            "UPDATE project_team_members SET \
                user_id = $3, project_role_id = $4, start_date = $5, end_date = $6, notes = $7 \
             WHERE id = $1 AND project_id = $2 \
             RETURNING {COLUMNS}"
        );
        let member = sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(project_id)
            .bind(user_id)
            .bind(project_role_id)
            .bind(range.start)
            .bind(range.end)
            .bind(notes)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(member)
    }

    /// Delete an assignment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_team_members WHERE id = $1 AND project_id = $2")
                .bind(id)
                .bind(project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Run both conflict checks for a candidate range on the open transaction.
///
/// 1. Same-project overlap: the user may not hold two overlapping ranges on
///    one project, regardless of role.
/// 2. Exclusive usage: a user flagged `exclusive_usage` may not overlap an
///    assignment on any other project.
async fn check_conflicts(
    tx: &mut PgConnection,
    project_id: DbId,
    user_id: DbId,
    candidate: DateRange,
    exclude_id: Option<DbId>,
) -> Result<(), TeamWriteError> {
    let rows: Vec<(DbId, NaiveDate, NaiveDate)> = sqlx::query_as(
        "SELECT id, start_date, end_date FROM project_team_members \
         WHERE project_id = $1 AND user_id = $2",
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_all(&mut *tx)
    .await?;

    let existing: Vec<OwnedRange> = rows
        .into_iter()
        .filter_map(|(id, start, end)| {
            DateRange::new(start, end).ok().map(|range| OwnedRange { id, range })
        })
        .collect();

    if let Some(conflict) = find_conflict(&existing, candidate, exclude_id) {
        tracing::debug!(
            user_id,
            project_id,
            conflict_id = conflict.id,
            "assignment refused: overlapping range on same project"
        );
        return Err(TeamWriteError::Overlap {
            start: conflict.range.start,
            end: conflict.range.end,
        });
    }

    let exclusive: Option<bool> =
        sqlx::query_scalar("SELECT exclusive_usage FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

    if exclusive.unwrap_or(false) {
        let foreign: Option<ForeignAssignment> = sqlx::query_as(
            "SELECT p.name AS project_name, tm.start_date, tm.end_date \
             FROM project_team_members tm \
             JOIN projects p ON p.id = tm.project_id \
             WHERE tm.user_id = $1 AND tm.project_id <> $2 \
               AND tm.start_date <= $4 AND $3 <= tm.end_date \
               AND ($5::BIGINT IS NULL OR tm.id <> $5) \
             ORDER BY tm.start_date \
             LIMIT 1",
        )
        .bind(user_id)
        .bind(project_id)
        .bind(candidate.start)
        .bind(candidate.end)
        .bind(exclude_id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(hit) = foreign {
            tracing::debug!(
                user_id,
                project_id,
                other_project = %hit.project_name,
                "assignment refused: exclusive-usage user booked elsewhere"
            );
            return Err(TeamWriteError::ExclusiveConflict {
                project_name: hit.project_name,
                start: hit.start_date,
                end: hit.end_date,
            });
        }
    }

    Ok(())
}
