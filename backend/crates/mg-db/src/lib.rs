pub mod connection;
pub mod error;
pub mod memory_project_store;
pub mod project_store;
pub mod repositories;

pub use connection::pool::{create_memory_pool, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use memory_project_store::MemoryProjectStore;
pub use project_store::ProjectStore;
pub use repositories::idempotency_repository::IdempotencyRepository;
pub use repositories::project_repository::ProjectRepository;
