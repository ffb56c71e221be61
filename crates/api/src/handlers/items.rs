//! Handlers for the `/items` resource (gear inventory).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gearbase_core::error::CoreError;
use gearbase_core::types::DbId;
use gearbase_db::models::item::{CreateItem, Item, ItemWithNames, UpdateItem};
use gearbase_db::repositories::ItemRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::access::RequireManager;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /items`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemsQuery {
    pub category_id: Option<DbId>,
}

/// GET /api/v1/items
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListItemsQuery>,
) -> AppResult<Json<Vec<ItemWithNames>>> {
    let items = ItemRepo::list(&state.pool, query.category_id).await?;
    Ok(Json(items))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// POST /api/v1/items
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Item name must not be empty".into(),
        )));
    }
    if input.quantity.is_some_and(|q| q < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must not be negative".into(),
        )));
    }
    let item = ItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/items/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<Item>> {
    if input.quantity.is_some_and(|q| q < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must not be negative".into(),
        )));
    }
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}
