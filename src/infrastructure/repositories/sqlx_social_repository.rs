use crate::domain::{
    scream::{entity::Scream, errors::DomainError},
    social::{comment::Comment, like::Like, repository::SocialRepository},
};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct SqlxSocialRepository {
    pool: PgPool,
}

impl SqlxSocialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Locks the scream row for the rest of the transaction. Serializes counter
/// updates on the same scream and turns operations racing a delete into a
/// clean `NotFound`.
async fn lock_scream(
    tx: &mut Transaction<'_, Postgres>,
    scream_id: Uuid,
) -> Result<(), DomainError> {
    let found = sqlx::query_scalar::<_, Uuid>("SELECT id FROM screams WHERE id = $1 FOR UPDATE")
        .bind(scream_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
    if found.is_none() {
        return Err(DomainError::NotFound("Scream not found".into()));
    }
    Ok(())
}

async fn fetch_scream(
    tx: &mut Transaction<'_, Postgres>,
    scream_id: Uuid,
) -> Result<Scream, DomainError> {
    sqlx::query_as::<_, Scream>(
        "SELECT id, body, user_handle, user_image, like_count, comment_count, created_at
         FROM screams WHERE id = $1",
    )
    .bind(scream_id)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| DomainError::InfrastructureError(e.to_string()))
}

#[async_trait]
impl SocialRepository for SqlxSocialRepository {
    async fn add_comment(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        lock_scream(&mut tx, comment.scream_id).await?;

        sqlx::query(
            "INSERT INTO comments (id, scream_id, body, user_handle, user_image, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(comment.id)
        .bind(comment.scream_id)
        .bind(&comment.body)
        .bind(&comment.user_handle)
        .bind(&comment.user_image)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        // Relative increment against the stored value; two concurrent adds
        // both land.
        sqlx::query("UPDATE screams SET comment_count = comment_count + 1 WHERE id = $1")
            .bind(comment.scream_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(comment.clone())
    }

    async fn find_comments(&self, scream_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, Comment>(
            "SELECT id, scream_id, body, user_handle, user_image, created_at
             FROM comments WHERE scream_id = $1 ORDER BY created_at DESC",
        )
        .bind(scream_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(rows)
    }

    async fn like(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        lock_scream(&mut tx, scream_id).await?;

        // The unique index on (scream_id, user_handle) is the existence
        // check; ON CONFLICT makes a lost race report AlreadyLiked instead
        // of inserting a duplicate.
        let like = Like::new(scream_id, user_handle.to_string());
        let inserted = sqlx::query(
            "INSERT INTO likes (id, scream_id, user_handle, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (scream_id, user_handle) DO NOTHING",
        )
        .bind(like.id)
        .bind(like.scream_id)
        .bind(&like.user_handle)
        .bind(like.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        if inserted.rows_affected() == 0 {
            return Err(DomainError::AlreadyLiked);
        }

        sqlx::query("UPDATE screams SET like_count = like_count + 1 WHERE id = $1")
            .bind(scream_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        let scream = fetch_scream(&mut tx, scream_id).await?;
        tx.commit()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(scream)
    }

    async fn unlike(&self, scream_id: Uuid, user_handle: &str) -> Result<Scream, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        lock_scream(&mut tx, scream_id).await?;

        let deleted = sqlx::query("DELETE FROM likes WHERE scream_id = $1 AND user_handle = $2")
            .bind(scream_id)
            .bind(user_handle)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        if deleted.rows_affected() == 0 {
            return Err(DomainError::NotLiked);
        }

        // Floored at zero so a reconciliation anomaly can never drive the
        // counter negative.
        sqlx::query("UPDATE screams SET like_count = GREATEST(0, like_count - 1) WHERE id = $1")
            .bind(scream_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        let scream = fetch_scream(&mut tx, scream_id).await?;
        tx.commit()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(scream)
    }
}
