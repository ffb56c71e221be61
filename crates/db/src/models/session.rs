//! Refresh-token session model.

use gearbase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table. Never serialized to clients.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
