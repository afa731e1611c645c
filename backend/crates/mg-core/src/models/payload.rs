//! Response payload shapes returned by the mutations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `project_id_payload { id: UUID }` - `id` is null when the mutation did not
/// resolve to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectIdPayload {
    pub id: Option<Uuid>,
}

impl ProjectIdPayload {
    pub fn found(id: Uuid) -> Self {
        Self { id: Some(id) }
    }

    pub fn absent() -> Self {
        Self { id: None }
    }
}

impl From<Option<Uuid>> for ProjectIdPayload {
    fn from(id: Option<Uuid>) -> Self {
        Self { id }
    }
}

/// `success_payload { success: Boolean }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuccessPayload {
    pub success: bool,
}

impl From<bool> for SuccessPayload {
    fn from(success: bool) -> Self {
        Self { success }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MutationPayload {
    ProjectId(ProjectIdPayload),
    Success(SuccessPayload),
}

impl MutationPayload {
    pub fn project_id(&self) -> Option<Uuid> {
        match self {
            Self::ProjectId(payload) => payload.id,
            Self::Success(_) => None,
        }
    }

    pub fn success(&self) -> Option<bool> {
        match self {
            Self::Success(payload) => Some(payload.success),
            Self::ProjectId(_) => None,
        }
    }
}

impl From<ProjectIdPayload> for MutationPayload {
    fn from(payload: ProjectIdPayload) -> Self {
        Self::ProjectId(payload)
    }
}

impl From<SuccessPayload> for MutationPayload {
    fn from(payload: SuccessPayload) -> Self {
        Self::Success(payload)
    }
}
