//! The entity store contract the mutation dispatcher writes through.
//!
//! Not-found is an ordinary outcome: `delete` reports `false` and
//! `rename`/`redescribe` report `None`. `Err` is reserved for persistence
//! failures.

use crate::Result as DbErrorResult;

use mg_core::{Project, TenantId};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a new project and return its freshly assigned id.
    async fn create(
        &self,
        tenant_id: TenantId,
        name: String,
        description: Option<String>,
    ) -> DbErrorResult<Uuid>;

    /// Remove a project. Returns whether a project was removed.
    async fn delete(&self, project_id: Uuid) -> DbErrorResult<bool>;

    /// Replace the name. Returns the id, or `None` if no such project.
    async fn rename(&self, project_id: Uuid, name: String) -> DbErrorResult<Option<Uuid>>;

    /// Replace or clear (`None`) the description. Returns the id, or `None`
    /// if no such project.
    async fn redescribe(
        &self,
        project_id: Uuid,
        description: Option<String>,
    ) -> DbErrorResult<Option<Uuid>>;

    async fn find_by_id(&self, project_id: Uuid) -> DbErrorResult<Option<Project>>;

    /// All projects of a tenant, ordered by name.
    async fn find_by_tenant(&self, tenant_id: TenantId) -> DbErrorResult<Vec<Project>>;
}
