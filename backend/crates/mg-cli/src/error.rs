use mg_gateway::{GatewayError, INTERNAL_ERROR, STORE_ERROR};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Error code for configuration problems; never produced by the gateway itself
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] mg_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] mg_db::DbError),

    #[error("{0}")]
    Gateway(#[from] GatewayError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => CONFIG_ERROR,
            Self::Database(_) => STORE_ERROR,
            Self::Gateway(e) => e.error_code(),
            Self::Logger { .. } | Self::Output { .. } => INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
