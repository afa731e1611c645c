use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_MAX_DB_CONNECTIONS};

use serde::Deserialize;

pub const MIN_DB_CONNECTIONS: u32 = 1;
pub const MAX_DB_CONNECTIONS: u32 = 64;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config dir
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_MAX_DB_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let db_path = std::path::Path::new(&self.path);
        if self.path.is_empty() || db_path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be a non-empty relative path without '..'",
            ));
        }

        if self.max_connections < MIN_DB_CONNECTIONS || self.max_connections > MAX_DB_CONNECTIONS {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_CONNECTIONS, MAX_DB_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
