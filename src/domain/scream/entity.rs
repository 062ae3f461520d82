use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Core domain entity representing a scream (a short public post).
///
/// `like_count` and `comment_count` are denormalized from the `likes` and
/// `comments` tables for cheap reads. They are only ever mutated relative to
/// the stored value, inside the same transaction as the record write they
/// mirror, so they stay equal to the number of live records referencing this
/// scream.
///
/// # Invariants
/// - `user_handle` and `created_at` are immutable after creation
/// - `like_count` equals the number of live Like records for this scream
/// - `comment_count` equals the number of Comment records for this scream
/// - both counters are non-negative
#[derive(Debug, Clone, Serialize, Deserialize, TS, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Scream {
    /// Store-assigned unique identifier
    #[serde(rename = "screamId")]
    pub id: Uuid,

    /// Post text, non-empty after trimming
    pub body: String,

    /// Creator identity, verified upstream and trusted as-is
    pub user_handle: String,

    /// Snapshot of the creator's avatar URL at creation time
    pub user_image: String,

    /// Number of live likes (denormalized)
    pub like_count: i32,

    /// Number of comments (denormalized)
    pub comment_count: i32,

    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

impl Scream {
    /// Builds a fresh scream with zeroed counters and a v7 id.
    pub fn new(body: String, user_handle: String, user_image: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            body,
            user_handle,
            user_image,
            like_count: 0,
            comment_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Returns true if `handle` may delete this scream.
    pub fn is_owned_by(&self, handle: &str) -> bool {
        self.user_handle == handle
    }
}
