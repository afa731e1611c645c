#![allow(dead_code)]

use mg_config::ValidationConfig;
use mg_core::TenantId;
use mg_db::{IdempotencyRepository, MemoryProjectStore, ProjectRepository};
use mg_gateway::{MutationDispatcher, RequestContext};

use std::sync::Arc;

use serde_json::{Value, json};
use uuid::Uuid;

/// Dispatcher over a fresh in-memory store
pub fn memory_dispatcher() -> MutationDispatcher<MemoryProjectStore> {
    MutationDispatcher::new(
        Arc::new(MemoryProjectStore::new()),
        &ValidationConfig::default(),
    )
}

/// Dispatcher over a fresh in-memory SQLite database, with replay protection
pub async fn sqlite_dispatcher() -> MutationDispatcher<ProjectRepository> {
    let pool = mg_db::create_memory_pool()
        .await
        .expect("Failed to create test pool");

    MutationDispatcher::new(
        Arc::new(ProjectRepository::new(pool.clone())),
        &ValidationConfig::default(),
    )
    .with_idempotency(IdempotencyRepository::new(pool))
}

pub fn test_tenant() -> TenantId {
    TenantId::new(Uuid::new_v4())
}

pub fn ctx() -> RequestContext {
    RequestContext::default()
}

pub fn create_input(tenant_id: TenantId, name: &str) -> Value {
    json!({ "tenant_id": tenant_id.to_string(), "name": name })
}
