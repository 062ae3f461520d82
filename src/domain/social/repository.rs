use super::comment::Comment;
use crate::domain::scream::{entity::Scream, errors::DomainError};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage operations for comments and like toggles.
///
/// Every mutating operation is a single atomic unit: the record write and the
/// matching counter update on the parent scream either both apply or neither
/// does. Implementations must also serialize the check-then-act on a
/// `(scream_id, user_handle)` like pair so two concurrent likes from the same
/// user cannot both pass the existence check.
#[async_trait]
pub trait SocialRepository: Send + Sync {
    /// Inserts the comment and increments the scream's `comment_count` by
    /// exactly one. Fails with `NotFound` if the scream is gone.
    async fn add_comment(&self, comment: &Comment) -> Result<Comment, DomainError>;

    /// Comments for a scream, newest first.
    async fn find_comments(&self, scream_id: Uuid) -> Result<Vec<Comment>, DomainError>;

    /// NOT_LIKED -> LIKED transition. Fails with `AlreadyLiked` if a like for
    /// the pair already exists, `NotFound` if the scream is gone. Returns the
    /// post-state scream.
    async fn like(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError>;

    /// LIKED -> NOT_LIKED transition. Fails with `NotLiked` if no like exists
    /// for the pair, `NotFound` if the scream is gone. Returns the post-state
    /// scream; `like_count` is floored at zero.
    async fn unlike(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError>;
}
