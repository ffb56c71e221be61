//! Route definitions for the `/projects` resource.
//!
//! Also nests team assignment routes under `/projects/{project_id}/team`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{projects, team};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list (scoped by role)
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update (full replace)
/// DELETE /{id}                              -> delete
///
/// GET    /{project_id}/team                 -> list
/// POST   /{project_id}/team                 -> create
/// PUT    /{project_id}/team/{id}            -> update
/// DELETE /{project_id}/team/{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    let team_routes = Router::new()
        .route("/", get(team::list).post(team::create))
        .route("/{id}", put(team::update).delete(team::delete));

    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .nest("/{project_id}/team", team_routes)
}
