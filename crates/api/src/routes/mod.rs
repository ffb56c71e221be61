pub mod auth;
pub mod bookings;
pub mod clients;
pub mod health;
pub mod items;
pub mod kit_templates;
pub mod lookups;
pub mod project_roles;
pub mod projects;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
/// /auth/refresh                            refresh (public)
/// /auth/logout                             logout (requires auth)
///
/// /users                                   list (manager)
/// /users/{id}                              get (manager)
///
/// /categories                              list, create
/// /categories/{id}                         get, update, delete
/// /conditions                              list, create
/// /conditions/{id}                         get, update, delete
/// /locations                               list, create
/// /locations/{id}                          get, update, delete
///
/// /items                                   list (?categoryId=N), create
/// /items/{id}                              get, update, delete
///
/// /clients                                 list, create
/// /clients/{id}                            get, update, delete
/// /clients/{client_id}/contacts            list, create
/// /clients/{client_id}/contacts/{id}       get, update, delete
///
/// /projects                                list (scoped by role), create
/// /projects/{id}                           get, update (full replace), delete
/// /projects/{project_id}/team              list, create
/// /projects/{project_id}/team/{id}         update, delete
///
/// /project-roles                           list
///
/// /kit-templates                           list, create
/// /kit-templates/{id}                      get, update, delete
///
/// /bookings                                list (?projectId=N), create
/// /bookings/{id}                           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Read-only user directory for team assignment pickers.
        .nest("/users", users::router())
        // Inventory lookup tables.
        .nest("/categories", lookups::categories_router())
        .nest("/conditions", lookups::conditions_router())
        .nest("/locations", lookups::locations_router())
        // Inventory items.
        .nest("/items", items::router())
        // Clients (also nests contacts).
        .nest("/clients", clients::router())
        // Projects (also nests team assignments).
        .nest("/projects", projects::router())
        // Crew role catalog.
        .nest("/project-roles", project_roles::router())
        // Reusable equipment kits.
        .nest("/kit-templates", kit_templates::router())
        // Item reservations.
        .nest("/bookings", bookings::router())
}
