//! Handlers for the `/project-roles` lookup (seeded, read-only).

use axum::extract::State;
use axum::Json;
use gearbase_db::models::project_role::ProjectRole;
use gearbase_db::repositories::ProjectRoleRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/project-roles
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<ProjectRole>>> {
    let roles = ProjectRoleRepo::list(&state.pool).await?;
    Ok(Json(roles))
}
