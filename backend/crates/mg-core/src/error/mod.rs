use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid mutation operation: {value} {location}")]
    InvalidOperation {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid tenant id: {value} {location}")]
    InvalidTenantId {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
