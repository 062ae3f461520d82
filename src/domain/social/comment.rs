use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A comment on a scream. Immutable once created; `scream_id` is a
/// back-reference, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize, TS, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Comment {
    pub id: Uuid,
    pub scream_id: Uuid,
    pub body: String,
    pub user_handle: String,
    pub user_image: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(scream_id: Uuid, body: String, user_handle: String, user_image: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            scream_id,
            body,
            user_handle,
            user_image,
            created_at: Utc::now(),
        }
    }
}
