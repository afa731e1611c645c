use crate::error::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;

/// Cached mutation results keyed by caller-supplied idempotency keys.
///
/// A key moves through two states: claimed (no result yet) and completed.
/// Only the caller whose `claim` succeeds may run the mutation; everyone
/// else waits for `find_by_key` to return the completed result.
#[derive(Clone)]
pub struct IdempotencyRepository {
    pool: SqlitePool,
}

impl IdempotencyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Completed result for a key. A claimed key with no result yet reads as `None`.
    pub async fn find_by_key(&self, idempotency_key: &str) -> DbErrorResult<Option<String>> {
        let result = sqlx::query_scalar(
            r#"
              SELECT result_json
              FROM mg_idempotency_keys
              WHERE idempotency_key = ? AND result_json IS NOT NULL
              "#,
        )
        .bind(idempotency_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Take ownership of a key. Returns `false` when another request holds it,
    /// unless that claim never completed and is older than `stale_after_seconds`.
    pub async fn claim(
        &self,
        idempotency_key: &str,
        operation: &str,
        stale_after_seconds: i64,
    ) -> DbErrorResult<bool> {
        let now = Utc::now().timestamp();
        let stale_cutoff = now - stale_after_seconds;

        let result = sqlx::query(
            r#"
              INSERT INTO mg_idempotency_keys (idempotency_key, operation, result_json, created_at)
              VALUES (?, ?, NULL, ?)
              ON CONFLICT(idempotency_key) DO UPDATE
                SET operation = excluded.operation, created_at = excluded.created_at
                WHERE mg_idempotency_keys.result_json IS NULL
                  AND mg_idempotency_keys.created_at < ?
              "#,
        )
        .bind(idempotency_key)
        .bind(operation)
        .bind(now)
        .bind(stale_cutoff)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Record the result for a claimed key. A completed key keeps its first result.
    pub async fn complete(&self, idempotency_key: &str, result_json: &str) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              UPDATE mg_idempotency_keys
              SET result_json = ?
              WHERE idempotency_key = ? AND result_json IS NULL
              "#,
        )
        .bind(result_json)
        .bind(idempotency_key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Give up a claim so a retry can take the key. Completed keys are left alone.
    pub async fn release(&self, idempotency_key: &str) -> DbErrorResult<()> {
        sqlx::query(
            "DELETE FROM mg_idempotency_keys WHERE idempotency_key = ? AND result_json IS NULL",
        )
        .bind(idempotency_key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn cleanup_old_entries(&self, max_age_seconds: i64) -> DbErrorResult<u64> {
        let cutoff = Utc::now().timestamp() - max_age_seconds;

        let result = sqlx::query("DELETE FROM mg_idempotency_keys WHERE created_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
