//! Handlers for the `/projects` resource.
//!
//! Status is computed from the dates on every write before persisting; reads
//! recompute it again so responses always carry the fresh value alongside the
//! stored one (`originalStatus`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gearbase_core::error::CoreError;
use gearbase_core::status::{compute_status, ProjectStatus};
use gearbase_core::types::DbId;
use gearbase_db::models::project::{ProjectInput, ProjectResponse};
use gearbase_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::access::{AccessScope, RequireManager};
use crate::state::AppState;

/// Validate the input and compute the status to store.
fn validated_status(input: &ProjectInput) -> AppResult<ProjectStatus> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name must not be empty".into(),
        )));
    }
    if let (Some(start), Some(end)) = (input.start_date, input.end_date) {
        if end < start {
            return Err(AppError::Core(CoreError::Validation(format!(
                "End date {end} is before start date {start}"
            ))));
        }
    }
    let current = input.status.unwrap_or(ProjectStatus::Planning);
    Ok(compute_status(
        input.start_date,
        input.end_date,
        current,
        Utc::now().date_naive(),
    ))
}

/// GET /api/v1/projects
///
/// Filtered by the caller's access scope: staff only see projects they hold
/// a team assignment on.
pub async fn list(
    State(state): State<AppState>,
    scope: AccessScope,
) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = match &scope {
        AccessScope::All(_) => ProjectRepo::list(&state.pool).await?,
        AccessScope::Assigned(user) => {
            ProjectRepo::list_for_user(&state.pool, user.user_id).await?
        }
    };
    let today = Utc::now().date_naive();
    let responses = projects.into_iter().map(|p| p.into_response(today)).collect();
    Ok(Json(responses))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    scope: AccessScope,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    scope.ensure_can_view(&state.pool, id).await?;
    Ok(Json(project.into_response(Utc::now().date_naive())))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Json(input): Json<ProjectInput>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    let status = validated_status(&input)?;
    let project = ProjectRepo::create(&state.pool, &input, status).await?;
    Ok((
        StatusCode::CREATED,
        Json(project.into_response(Utc::now().date_naive())),
    ))
}

/// PUT /api/v1/projects/{id}
///
/// Full replace; identical bodies yield identical stored rows.
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<ProjectResponse>> {
    let status = validated_status(&input)?;
    let project = ProjectRepo::update(&state.pool, id, &input, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project.into_response(Utc::now().date_naive())))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
