use crate::{GatewayError, Result as GatewayErrorResult};

use mg_db::IdempotencyRepository;

use std::time::{Duration, Instant};

/// A claim that never completes is taken over after this long.
pub const CLAIM_STALE_SECS: i64 = 30;
/// How long a retry waits for the request holding its key to finish.
pub const CLAIM_WAIT: Duration = Duration::from_secs(10);
const CLAIM_POLL: Duration = Duration::from_millis(20);

/// Outcome of taking an idempotency key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyClaim {
    /// This request owns the key and must run the mutation.
    Claimed,
    /// An earlier request with this key finished; its cached result.
    Replay(String),
}

/// Check if a create has already been processed under this key.
/// Returns Some(cached_result) if replay, None if new request.
pub async fn check_idempotency(
    repo: &IdempotencyRepository,
    idempotency_key: &str,
) -> GatewayErrorResult<Option<String>> {
    repo.find_by_key(idempotency_key)
        .await
        .map_err(|e| GatewayError::internal(format!("Failed to check idempotency: {e}")))
}

/// Replay a finished result or claim the key. While another request holds
/// the key this waits for it, up to `CLAIM_WAIT`.
pub async fn claim_idempotency(
    repo: &IdempotencyRepository,
    idempotency_key: &str,
    operation: &str,
) -> GatewayErrorResult<KeyClaim> {
    let started = Instant::now();

    loop {
        if let Some(cached) = check_idempotency(repo, idempotency_key).await? {
            return Ok(KeyClaim::Replay(cached));
        }

        let claimed = repo
            .claim(idempotency_key, operation, CLAIM_STALE_SECS)
            .await
            .map_err(|e| GatewayError::internal(format!("Failed to claim idempotency key: {e}")))?;
        if claimed {
            return Ok(KeyClaim::Claimed);
        }

        if started.elapsed() >= CLAIM_WAIT {
            return Err(GatewayError::internal(
                "A request with this idempotency key is still in progress",
            ));
        }

        tokio::time::sleep(CLAIM_POLL).await;
    }
}

/// Store the result of a successful operation for idempotency.
pub async fn store_idempotency(
    repo: &IdempotencyRepository,
    idempotency_key: &str,
    result_json: &str,
) -> GatewayErrorResult<()> {
    repo.complete(idempotency_key, result_json)
        .await
        .map_err(|e| GatewayError::internal(format!("Failed to store idempotency: {e}")))
}

/// Free a key whose mutation failed so a retry can run it.
pub async fn release_idempotency(
    repo: &IdempotencyRepository,
    idempotency_key: &str,
) -> GatewayErrorResult<()> {
    repo.release(idempotency_key)
        .await
        .map_err(|e| GatewayError::internal(format!("Failed to release idempotency key: {e}")))
}
