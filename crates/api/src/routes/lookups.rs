//! Route definitions for the inventory lookup resources: `/categories`,
//! `/conditions`, and `/locations`. All three share the same CRUD shape.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups::{categories, conditions, locations};
use crate::state::AppState;

macro_rules! lookup_router {
    ($name:ident, $module:ident) => {
        /// ```text
        /// GET    /        -> list
        /// POST   /        -> create
        /// GET    /{id}    -> get_by_id
        /// PUT    /{id}    -> update
        /// DELETE /{id}    -> delete
        /// ```
        pub fn $name() -> Router<AppState> {
            Router::new()
                .route("/", get($module::list).post($module::create))
                .route(
                    "/{id}",
                    get($module::get_by_id)
                        .put($module::update)
                        .delete($module::delete),
                )
        }
    };
}

lookup_router!(categories_router, categories);
lookup_router!(conditions_router, conditions);
lookup_router!(locations_router, locations);
