use mg_core::{Project, TenantId};

use uuid::Uuid;

/// A fresh random tenant
pub fn test_tenant() -> TenantId {
    TenantId::new(Uuid::new_v4())
}

/// Creates a test Project owned by `tenant_id`
pub fn create_test_project(tenant_id: TenantId) -> Project {
    Project::new(
        tenant_id,
        "Test Project".to_string(),
        Some("Test project description".to_string()),
    )
}
