//! Handlers for the inventory lookup resources.
//!
//! `/categories`, `/conditions`, and `/locations` share one CRUD shape; the
//! macro stamps out a handler module per resource over the matching repo.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gearbase_core::error::CoreError;
use gearbase_core::types::DbId;
use gearbase_db::models::lookup::{CreateLookupEntry, LookupEntry, UpdateLookupEntry};
use gearbase_db::repositories::{CategoryRepo, ConditionRepo, LocationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::access::RequireManager;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

macro_rules! lookup_handlers {
    ($module:ident, $repo:ident, $entity:literal) => {
        pub mod $module {
            use super::*;

            pub async fn list(
                State(state): State<AppState>,
                _user: AuthUser,
            ) -> AppResult<Json<Vec<LookupEntry>>> {
                let entries = $repo::list(&state.pool).await?;
                Ok(Json(entries))
            }

            pub async fn get_by_id(
                State(state): State<AppState>,
                _user: AuthUser,
                Path(id): Path<DbId>,
            ) -> AppResult<Json<LookupEntry>> {
                let entry = $repo::find_by_id(&state.pool, id)
                    .await?
                    .ok_or(AppError::Core(CoreError::NotFound {
                        entity: $entity,
                        id,
                    }))?;
                Ok(Json(entry))
            }

            pub async fn create(
                State(state): State<AppState>,
                RequireManager(_user): RequireManager,
                Json(input): Json<CreateLookupEntry>,
            ) -> AppResult<(StatusCode, Json<LookupEntry>)> {
                if input.name.trim().is_empty() {
                    return Err(AppError::Core(CoreError::Validation(
                        "Name must not be empty".into(),
                    )));
                }
                let entry = $repo::create(&state.pool, &input).await?;
                Ok((StatusCode::CREATED, Json(entry)))
            }

            pub async fn update(
                State(state): State<AppState>,
                RequireManager(_user): RequireManager,
                Path(id): Path<DbId>,
                Json(input): Json<UpdateLookupEntry>,
            ) -> AppResult<Json<LookupEntry>> {
                let entry = $repo::update(&state.pool, id, &input)
                    .await?
                    .ok_or(AppError::Core(CoreError::NotFound {
                        entity: $entity,
                        id,
                    }))?;
                Ok(Json(entry))
            }

            pub async fn delete(
                State(state): State<AppState>,
                RequireManager(_user): RequireManager,
                Path(id): Path<DbId>,
            ) -> AppResult<StatusCode> {
                let deleted = $repo::delete(&state.pool, id).await?;
                if deleted {
                    Ok(StatusCode::NO_CONTENT)
                } else {
                    Err(AppError::Core(CoreError::NotFound {
                        entity: $entity,
                        id,
                    }))
                }
            }
        }
    };
}

lookup_handlers!(categories, CategoryRepo, "Category");
lookup_handlers!(conditions, ConditionRepo, "Condition");
lookup_handlers!(locations, LocationRepo, "Location");
