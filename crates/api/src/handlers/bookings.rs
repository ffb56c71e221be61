//! Handlers for the `/bookings` resource (item reservations).
//!
//! Booking ranges for the same item may overlap; only the range itself is
//! validated. Quantity accounting against stock stays advisory in the UI.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gearbase_core::error::CoreError;
use gearbase_core::overlap::DateRange;
use gearbase_core::types::DbId;
use gearbase_db::models::booking::{Booking, BookingWithNames, CreateBooking, UpdateBooking};
use gearbase_db::repositories::BookingRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::access::RequireManager;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookingsQuery {
    pub project_id: Option<DbId>,
}

/// GET /api/v1/bookings
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListBookingsQuery>,
) -> AppResult<Json<Vec<BookingWithNames>>> {
    let bookings = BookingRepo::list(&state.pool, query.project_id).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}

/// POST /api/v1/bookings
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    DateRange::new(input.start_date, input.end_date).map_err(AppError::Core)?;
    if input.quantity.is_some_and(|q| q <= 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must be positive".into(),
        )));
    }
    let booking = BookingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// PUT /api/v1/bookings/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    if let (Some(start), Some(end)) = (input.start_date, input.end_date) {
        DateRange::new(start, end).map_err(AppError::Core)?;
    }
    if input.quantity.is_some_and(|q| q <= 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Quantity must be positive".into(),
        )));
    }
    let booking = BookingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(booking))
}

/// DELETE /api/v1/bookings/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BookingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
    }
}
