//! Handlers for `/projects/{project_id}/team` (team assignments).
//!
//! Create and update validate required fields and the date range locally,
//! then hand the overlap checks to the repository, which runs them together
//! with the write in one serializable transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gearbase_core::error::CoreError;
use gearbase_core::overlap::DateRange;
use gearbase_core::types::DbId;
use gearbase_db::models::team_member::{TeamMemberInput, TeamMemberWithNames};
use gearbase_db::repositories::{ProjectRepo, TeamMemberRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::access::{AccessScope, RequireManager};
use crate::state::AppState;

/// Required fields pulled out of a [`TeamMemberInput`], or 400.
struct ValidatedAssignment {
    user_id: DbId,
    project_role_id: DbId,
    range: DateRange,
}

fn validate(input: &TeamMemberInput) -> AppResult<ValidatedAssignment> {
    let missing = |field: &str| {
        AppError::Core(CoreError::Validation(format!("{field} is required")))
    };
    let user_id = input.user_id.ok_or_else(|| missing("userId"))?;
    let project_role_id = input.project_role_id.ok_or_else(|| missing("projectRoleId"))?;
    let start = input.start_date.ok_or_else(|| missing("startDate"))?;
    let end = input.end_date.ok_or_else(|| missing("endDate"))?;
    let range = DateRange::new(start, end).map_err(AppError::Core)?;
    Ok(ValidatedAssignment {
        user_id,
        project_role_id,
        range,
    })
}

/// 404 unless the parent project exists.
async fn ensure_project(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

/// GET /api/v1/projects/{project_id}/team
///
/// Assignments with user and role names, ordered by start date then name.
pub async fn list(
    State(state): State<AppState>,
    scope: AccessScope,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<TeamMemberWithNames>>> {
    ensure_project(&state, project_id).await?;
    scope.ensure_can_view(&state.pool, project_id).await?;
    let members = TeamMemberRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(members))
}

/// POST /api/v1/projects/{project_id}/team
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(project_id): Path<DbId>,
    Json(input): Json<TeamMemberInput>,
) -> AppResult<(StatusCode, Json<TeamMemberWithNames>)> {
    ensure_project(&state, project_id).await?;
    let assignment = validate(&input)?;

    let member = TeamMemberRepo::create(
        &state.pool,
        project_id,
        assignment.user_id,
        assignment.project_role_id,
        assignment.range,
        input.notes.as_deref(),
    )
    .await?;

    let member = TeamMemberRepo::get_with_names(&state.pool, project_id, member.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created assignment vanished".into()))?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/v1/projects/{project_id}/team/{id}
///
/// Same validation as create; the row being updated is excluded from the
/// overlap comparison set.
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<TeamMemberInput>,
) -> AppResult<Json<TeamMemberWithNames>> {
    ensure_project(&state, project_id).await?;
    let assignment = validate(&input)?;

    let member = TeamMemberRepo::update(
        &state.pool,
        project_id,
        id,
        assignment.user_id,
        assignment.project_role_id,
        assignment.range,
        input.notes.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Assignment",
        id,
    }))?;

    let member = TeamMemberRepo::get_with_names(&state.pool, project_id, member.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Updated assignment vanished".into()))?;
    Ok(Json(member))
}

/// DELETE /api/v1/projects/{project_id}/team/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = TeamMemberRepo::delete(&state.pool, project_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id,
        }))
    }
}
