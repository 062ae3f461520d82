use super::dto::ScreamDetail;
use crate::domain::{
    scream::{
        entity::Scream, errors::DomainError, repository::ScreamRepository,
        value_objects::ScreamBody,
    },
    shared::pagination::PaginationRequest,
    social::repository::SocialRepository,
};
use std::sync::Arc;
use uuid::Uuid;

/// Post operations: list, create, fetch-with-comments, delete.
pub struct ScreamsUseCase {
    screams: Arc<dyn ScreamRepository>,
    social: Arc<dyn SocialRepository>,
}

impl ScreamsUseCase {
    pub fn new(screams: Arc<dyn ScreamRepository>, social: Arc<dyn SocialRepository>) -> Self {
        Self { screams, social }
    }

    pub async fn list(&self, page: PaginationRequest) -> Result<Vec<Scream>, DomainError> {
        let page = page.clamped();
        self.screams.find_all(page.limit, page.offset).await
    }

    pub async fn create(
        &self,
        body: String,
        author_handle: &str,
        author_image: &str,
    ) -> Result<Scream, DomainError> {
        // Validation happens before any store call.
        let body = ScreamBody::new(body)
            .map_err(|_| DomainError::ValidationError("Body must not be empty".into()))?;

        let scream = Scream::new(
            body.value,
            author_handle.to_string(),
            author_image.to_string(),
        );
        let created = self.screams.insert(&scream).await?;
        tracing::info!(scream_id = %created.id, user_handle = %created.user_handle, "scream created");
        Ok(created)
    }

    pub async fn get(&self, id: Uuid) -> Result<ScreamDetail, DomainError> {
        let scream = self
            .screams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Scream not found".into()))?;
        let comments = self.social.find_comments(id).await?;
        Ok(ScreamDetail { scream, comments })
    }

    /// Only the scream's author may delete it. Deletion cascades to the
    /// scream's comments and likes so no orphaned records remain.
    pub async fn delete(&self, id: Uuid, requester: &str) -> Result<(), DomainError> {
        let scream = self
            .screams
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Scream not found".into()))?;

        if !scream.is_owned_by(requester) {
            return Err(DomainError::Forbidden("Not the scream owner".into()));
        }

        self.screams.delete_cascade(id).await?;
        tracing::info!(scream_id = %id, user_handle = %requester, "scream deleted");
        Ok(())
    }
}
