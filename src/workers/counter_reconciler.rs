use sqlx::{PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

/// Periodically recomputes denormalized `like_count`/`comment_count` from the
/// likes and comments tables. The interaction protocols keep the counters
/// correct transactionally; this worker is the idempotent repair path for
/// drift introduced outside of them (manual edits, restored backups).
pub struct CounterReconciler {
    db: PgPool,
    interval_seconds: u64,
    batch_size: i64,
}

impl CounterReconciler {
    pub fn new(db: PgPool, interval_seconds: u64, batch_size: i64) -> Self {
        Self {
            db,
            interval_seconds: interval_seconds.max(10),
            batch_size: batch_size.max(1),
        }
    }

    pub async fn start(&self) {
        loop {
            match self.reconcile_batch().await {
                Ok(repaired) if !repaired.is_empty() => {
                    tracing::warn!(
                        repaired = repaired.len(),
                        "counter drift repaired from source records"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("counter reconciliation failed: {}", e);
                }
            }

            tokio::time::sleep(Duration::from_secs(self.interval_seconds)).await;
        }
    }

    /// Repairs at most `batch_size` drifted screams, returning their ids.
    /// Safe to run concurrently with live traffic: the recount and the write
    /// happen in one statement against current data.
    ///
    /// Candidates are selected by the drift condition itself, oldest first,
    /// so a repaired scream drops out of the candidate set and successive
    /// passes always reach the remaining drifted rows, however old.
    pub async fn reconcile_batch(&self) -> Result<Vec<Uuid>, sqlx::Error> {
        let rows = sqlx::query(
            "WITH drifted AS (
                SELECT s.id, a.comments, a.likes
                FROM screams s
                CROSS JOIN LATERAL (
                    SELECT (SELECT COUNT(*) FROM comments c WHERE c.scream_id = s.id) AS comments,
                           (SELECT COUNT(*) FROM likes l WHERE l.scream_id = s.id) AS likes
                ) a
                WHERE s.comment_count <> a.comments OR s.like_count <> a.likes
                ORDER BY s.created_at ASC
                LIMIT $1
            )
            UPDATE screams s
            SET comment_count = d.comments,
                like_count = d.likes
            FROM drifted d
            WHERE s.id = d.id
            RETURNING s.id",
        )
        .bind(self.batch_size)
        .fetch_all(&self.db)
        .await?;

        rows.iter().map(|row| row.try_get::<Uuid, _>("id")).collect()
    }
}
