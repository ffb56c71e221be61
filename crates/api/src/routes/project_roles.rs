//! Route definitions for the `/project-roles` lookup (crew role catalog).

use axum::routing::get;
use axum::Router;

use crate::handlers::project_roles;
use crate::state::AppState;

/// Routes mounted at `/project-roles`.
///
/// ```text
/// GET /   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(project_roles::list))
}
