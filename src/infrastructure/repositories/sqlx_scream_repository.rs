use crate::domain::scream::{entity::Scream, errors::DomainError, repository::ScreamRepository};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

const SCREAM_COLUMNS: &str =
    "id, body, user_handle, user_image, like_count, comment_count, created_at";

pub struct SqlxScreamRepository {
    pool: PgPool,
}

impl SqlxScreamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScreamRepository for SqlxScreamRepository {
    async fn insert(&self, scream: &Scream) -> Result<Scream, DomainError> {
        sqlx::query(
            "INSERT INTO screams (id, body, user_handle, user_image, like_count, comment_count, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(scream.id)
        .bind(&scream.body)
        .bind(&scream.user_handle)
        .bind(&scream.user_image)
        .bind(scream.like_count)
        .bind(scream.comment_count)
        .bind(scream.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(scream.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Scream>, DomainError> {
        let row = sqlx::query_as::<_, Scream>(&format!(
            "SELECT {SCREAM_COLUMNS} FROM screams WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row)
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Scream>, DomainError> {
        let rows = sqlx::query_as::<_, Scream>(&format!(
            "SELECT {SCREAM_COLUMNS} FROM screams ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(rows)
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        // Comments and likes carry ON DELETE CASCADE, but deleting them
        // explicitly keeps the policy visible and works the same if the
        // schema ever loses the constraint.
        sqlx::query("DELETE FROM comments WHERE scream_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        sqlx::query("DELETE FROM likes WHERE scream_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        let result = sqlx::query("DELETE FROM screams WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Scream not found".into()));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(())
    }
}
