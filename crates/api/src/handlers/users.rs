//! Read-only handlers for the `/users` resource.
//!
//! User administration happens outside the API (seeding); these endpoints
//! exist so the dashboard can populate assignment pickers.

use axum::extract::{Path, State};
use axum::Json;
use gearbase_core::error::CoreError;
use gearbase_core::types::DbId;
use gearbase_db::models::user::UserResponse;
use gearbase_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::access::RequireManager;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::get_response(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}
