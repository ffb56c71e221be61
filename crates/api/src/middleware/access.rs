//! Role extractors and the project-access scope.
//!
//! `admin` and `manager` see every project; `staff` only see projects they
//! hold a team assignment on. The scope is resolved per request from the JWT
//! role claim; membership itself is checked against the database at use time.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gearbase_core::error::CoreError;
use gearbase_core::roles::{ROLE_ADMIN, ROLE_MANAGER};
use gearbase_core::types::DbId;
use sqlx::PgPool;

use super::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Requires `manager` or `admin` role. Rejects with 403 Forbidden otherwise.
///
/// All inventory, client, project, and scheduling writes go through this.
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN && user.role != ROLE_MANAGER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Manager or Admin role required".into(),
            )));
        }
        Ok(RequireManager(user))
    }
}

/// The caller's project visibility, derived from their role claim.
#[derive(Debug, Clone)]
pub enum AccessScope {
    /// Sees every project.
    All(AuthUser),
    /// Sees only projects they hold a team assignment on.
    Assigned(AuthUser),
}

impl AccessScope {
    /// Check that the caller may view the given project; 403 otherwise.
    ///
    /// Global scopes pass without a query; assigned scopes check membership.
    pub async fn ensure_can_view(&self, pool: &PgPool, project_id: DbId) -> AppResult<()> {
        let AccessScope::Assigned(user) = self else {
            return Ok(());
        };
        let assigned: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM project_team_members WHERE project_id = $1 AND user_id = $2 LIMIT 1",
        )
        .bind(project_id)
        .bind(user.user_id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Database)?;

        if assigned.is_none() {
            return Err(AppError::Core(CoreError::Forbidden(
                "You are not assigned to this project".into(),
            )));
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AccessScope {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role == ROLE_ADMIN || user.role == ROLE_MANAGER {
            Ok(AccessScope::All(user))
        } else {
            Ok(AccessScope::Assigned(user))
        }
    }
}
