//! Handlers for the `/kit-templates` resource.
//!
//! Create and update write the template and its item lines in one
//! transaction; a failing line rolls back the whole write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gearbase_core::error::CoreError;
use gearbase_core::types::DbId;
use gearbase_db::models::kit_template::{KitTemplate, KitTemplateInput, KitTemplateWithItems};
use gearbase_db::repositories::KitTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::access::RequireManager;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn validate(input: &KitTemplateInput) -> AppResult<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Template name must not be empty".into(),
        )));
    }
    if input.items.iter().any(|line| line.quantity <= 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Item quantities must be positive".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/kit-templates
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<KitTemplate>>> {
    let templates = KitTemplateRepo::list(&state.pool).await?;
    Ok(Json(templates))
}

/// GET /api/v1/kit-templates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<KitTemplateWithItems>> {
    let template = KitTemplateRepo::get_with_items(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "KitTemplate",
            id,
        }))?;
    Ok(Json(template))
}

/// POST /api/v1/kit-templates
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Json(input): Json<KitTemplateInput>,
) -> AppResult<(StatusCode, Json<KitTemplateWithItems>)> {
    validate(&input)?;
    let template = KitTemplateRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// PUT /api/v1/kit-templates/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<KitTemplateInput>,
) -> AppResult<Json<KitTemplateWithItems>> {
    validate(&input)?;
    let template = KitTemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "KitTemplate",
            id,
        }))?;
    Ok(Json(template))
}

/// DELETE /api/v1/kit-templates/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = KitTemplateRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "KitTemplate",
            id,
        }))
    }
}
