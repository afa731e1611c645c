//! Process-local project store for embedders without SQLite and for tests.

use crate::{ProjectStore, Result as DbErrorResult};

use mg_core::{Project, TenantId};

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Writers hold the map's write lock for the whole read-modify-write, so
/// conflicting writes to one project are serialised.
#[derive(Clone, Default)]
pub struct MemoryProjectStore {
    projects: Arc<RwLock<HashMap<Uuid, Project>>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create(
        &self,
        tenant_id: TenantId,
        name: String,
        description: Option<String>,
    ) -> DbErrorResult<Uuid> {
        let project = Project::new(tenant_id, name, description);
        let id = project.id;

        self.projects.write().await.insert(id, project);

        Ok(id)
    }

    async fn delete(&self, project_id: Uuid) -> DbErrorResult<bool> {
        Ok(self.projects.write().await.remove(&project_id).is_some())
    }

    async fn rename(&self, project_id: Uuid, name: String) -> DbErrorResult<Option<Uuid>> {
        let mut projects = self.projects.write().await;

        Ok(projects.get_mut(&project_id).map(|project| {
            project.rename(name);
            project.id
        }))
    }

    async fn redescribe(
        &self,
        project_id: Uuid,
        description: Option<String>,
    ) -> DbErrorResult<Option<Uuid>> {
        let mut projects = self.projects.write().await;

        Ok(projects.get_mut(&project_id).map(|project| {
            project.redescribe(description);
            project.id
        }))
    }

    async fn find_by_id(&self, project_id: Uuid) -> DbErrorResult<Option<Project>> {
        Ok(self.projects.read().await.get(&project_id).cloned())
    }

    async fn find_by_tenant(&self, tenant_id: TenantId) -> DbErrorResult<Vec<Project>> {
        let projects = self.projects.read().await;

        let mut owned: Vec<Project> = projects
            .values()
            .filter(|project| project.is_owned_by(tenant_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));

        Ok(owned)
    }
}
