pub mod idempotency_repository;
pub mod project_repository;
