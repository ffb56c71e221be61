//! Handlers for `/clients/{client_id}/contacts`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gearbase_core::error::CoreError;
use gearbase_core::types::DbId;
use gearbase_db::models::contact::{Contact, CreateContact, UpdateContact};
use gearbase_db::repositories::{ClientRepo, ContactRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::access::RequireManager;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// 404 unless the parent client exists.
async fn ensure_client(state: &AppState, client_id: DbId) -> AppResult<()> {
    ClientRepo::find_by_id(&state.pool, client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: client_id,
        }))?;
    Ok(())
}

/// GET /api/v1/clients/{client_id}/contacts
pub async fn list_for_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<Vec<Contact>>> {
    ensure_client(&state, client_id).await?;
    let contacts = ContactRepo::list_for_client(&state.pool, client_id).await?;
    Ok(Json(contacts))
}

/// GET /api/v1/clients/{client_id}/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((client_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::find_by_id(&state.pool, client_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(contact))
}

/// POST /api/v1/clients/{client_id}/contacts
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(client_id): Path<DbId>,
    Json(input): Json<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    ensure_client(&state, client_id).await?;
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Contact name must not be empty".into(),
        )));
    }
    let contact = ContactRepo::create(&state.pool, client_id, &input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/v1/clients/{client_id}/contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path((client_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateContact>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::update(&state.pool, client_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(contact))
}

/// DELETE /api/v1/clients/{client_id}/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path((client_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ContactRepo::delete(&state.pool, client_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))
    }
}
