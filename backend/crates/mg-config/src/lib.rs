mod config;
mod database_config;
mod error;
mod idempotency_config;
mod log_level;
mod logging_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use idempotency_config::IdempotencyConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "MG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".mg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "projects.db";
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_IDEMPOTENCY_ENABLED: bool = true;
const DEFAULT_IDEMPOTENCY_RETENTION_SECS: i64 = 24 * 60 * 60;
