//! Route definitions for the `/clients` resource.
//!
//! Also nests contact routes under `/clients/{client_id}/contacts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{clients, contacts};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{client_id}/contacts              -> list_for_client
/// POST   /{client_id}/contacts              -> create
/// GET    /{client_id}/contacts/{id}         -> get_by_id
/// PUT    /{client_id}/contacts/{id}         -> update
/// DELETE /{client_id}/contacts/{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    let contact_routes = Router::new()
        .route("/", get(contacts::list_for_client).post(contacts::create))
        .route(
            "/{id}",
            get(contacts::get_by_id)
                .put(contacts::update)
                .delete(contacts::delete),
        );

    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/{id}",
            get(clients::get_by_id)
                .put(clients::update)
                .delete(clients::delete),
        )
        .nest("/{client_id}/contacts", contact_routes)
}
