//! Standard error codes for mutation responses.

/// Operation name or argument shape could not be decoded
pub const DECODE_ERROR: &str = "DECODE_ERROR";

/// Input validation failed
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Persistence layer failed
pub const STORE_ERROR: &str = "STORE_ERROR";

/// Internal gateway error
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
