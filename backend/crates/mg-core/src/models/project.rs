//! Project entity - the tenant-owned resource the mutation gateway manages.

use crate::TenantId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project belongs to exactly one tenant for its whole lifetime.
/// Only `name` and `description` change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub description: Option<String>,
    /// Bumped on every rename or redescribe
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with a freshly generated id
    pub fn new(tenant_id: TenantId, name: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            name,
            description,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, tenant_id: TenantId) -> bool {
        self.tenant_id == tenant_id
    }

    /// Apply a rename, bumping version and timestamp
    pub fn rename(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    /// Replace or clear the description, bumping version and timestamp
    pub fn redescribe(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}
