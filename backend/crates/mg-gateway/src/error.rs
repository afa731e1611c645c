use crate::{DECODE_ERROR, INTERNAL_ERROR, STORE_ERROR, VALIDATION_ERROR};

use mg_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Decode failed: {message}")]
    DecodeError {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message}")]
    ValidationError {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

/// Error shape handed back to the embedding executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl GatewayError {
    #[track_caller]
    pub fn decode(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::DecodeError {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DecodeError { .. } => DECODE_ERROR,
            Self::ValidationError { .. } => VALIDATION_ERROR,
            Self::Store { .. } => STORE_ERROR,
            Self::Internal { .. } => INTERNAL_ERROR,
        }
    }

    /// Input field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::DecodeError { field, .. } | Self::ValidationError { field, .. } => {
                field.as_deref()
            }
            Self::Store { .. } | Self::Internal { .. } => None,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            field: self.field().map(str::to_string),
        }
    }
}

impl From<DbError> for GatewayError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
