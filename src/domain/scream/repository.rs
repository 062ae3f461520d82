use super::entity::Scream;
use super::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ScreamRepository: Send + Sync {
    async fn insert(&self, scream: &Scream) -> Result<Scream, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Scream>, DomainError>;
    /// Newest first.
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Scream>, DomainError>;
    /// Deletes the scream together with its comments and likes in one
    /// transaction, so no orphaned records survive.
    async fn delete_cascade(&self, id: Uuid) -> Result<(), DomainError>;
}
