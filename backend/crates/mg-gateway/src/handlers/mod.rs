pub mod context;
pub mod dispatcher;
pub mod error_codes;
pub mod idempotency;
pub mod project;
