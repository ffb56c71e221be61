//! Route definitions for the `/kit-templates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::kit_templates;
use crate::state::AppState;

/// Routes mounted at `/kit-templates`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kit_templates::list).post(kit_templates::create))
        .route(
            "/{id}",
            get(kit_templates::get_by_id)
                .put(kit_templates::update)
                .delete(kit_templates::delete),
        )
}
