use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Join record expressing "user_handle likes scream_id". At most one live
/// record exists per pair, enforced by a unique index on
/// `(scream_id, user_handle)`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: Uuid,
    pub scream_id: Uuid,
    pub user_handle: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(scream_id: Uuid, user_handle: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            scream_id,
            user_handle,
            created_at: Utc::now(),
        }
    }

    /// Returns true if this record expresses `user_handle` liking `scream_id`.
    pub fn is_pair(&self, scream_id: Uuid, user_handle: &str) -> bool {
        self.scream_id == scream_id && self.user_handle == user_handle
    }
}
