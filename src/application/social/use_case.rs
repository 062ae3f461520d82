use crate::domain::{
    scream::{entity::Scream, errors::DomainError, value_objects::CommentBody},
    social::{comment::Comment, repository::SocialRepository},
};
use std::sync::Arc;
use uuid::Uuid;

/// Comment and like-toggle operations. The repository guarantees that each
/// record write and its counter update land atomically; this layer owns input
/// validation and leaves the state-machine checks to the store.
pub struct SocialUseCase {
    repository: Arc<dyn SocialRepository>,
}

impl SocialUseCase {
    pub fn new(repository: Arc<dyn SocialRepository>) -> Self {
        Self { repository }
    }

    pub async fn add_comment(
        &self,
        scream_id: Uuid,
        body: String,
        author_handle: &str,
        author_image: &str,
    ) -> Result<Comment, DomainError> {
        let body = CommentBody::new(body)
            .map_err(|_| DomainError::ValidationError("Comment must not be empty".into()))?;

        let comment = Comment::new(
            scream_id,
            body.value,
            author_handle.to_string(),
            author_image.to_string(),
        );
        let created = self.repository.add_comment(&comment).await?;
        tracing::info!(scream_id = %scream_id, user_handle = %author_handle, "comment added");
        Ok(created)
    }

    pub async fn like(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError> {
        let scream = self.repository.like(scream_id, user_handle).await?;
        tracing::info!(scream_id = %scream_id, user_handle = %user_handle, like_count = scream.like_count, "scream liked");
        Ok(scream)
    }

    pub async fn unlike(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError> {
        let scream = self.repository.unlike(scream_id, user_handle).await?;
        tracing::info!(scream_id = %scream_id, user_handle = %user_handle, like_count = scream.like_count, "scream unliked");
        Ok(scream)
    }
}
