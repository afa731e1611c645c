use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDEMPOTENCY_ENABLED,
    DEFAULT_IDEMPOTENCY_RETENTION_SECS,
};

use serde::Deserialize;

pub const MIN_RETENTION_SECS: i64 = 60;
pub const MAX_RETENTION_SECS: i64 = 30 * 24 * 60 * 60;

/// Replay protection for `create_project` requests carrying an idempotency key.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdempotencyConfig {
    pub enabled: bool,
    /// Cached results older than this are purged
    pub retention_secs: i64,
}

impl Default for IdempotencyConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_IDEMPOTENCY_ENABLED,
            retention_secs: DEFAULT_IDEMPOTENCY_RETENTION_SECS,
        }
    }
}

impl IdempotencyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.retention_secs < MIN_RETENTION_SECS || self.retention_secs > MAX_RETENTION_SECS {
            return Err(ConfigError::config(format!(
                "idempotency.retention_secs must be {}-{}, got {}",
                MIN_RETENTION_SECS, MAX_RETENTION_SECS, self.retention_secs
            )));
        }

        Ok(())
    }
}
