//! Typed mutation commands, one variant per schema mutation.

use crate::{MutationOperation, TenantId};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input of `create_project(tenant_id: UUID!, name: String!, description: String)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectInput {
    pub tenant_id: TenantId,
    pub name: String,
    pub description: Option<String>,
}

/// Input of `delete_project(project_id: UUID!)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProjectInput {
    pub project_id: Uuid,
}

/// Input of `set_project_name(project_id: UUID!, name: String!)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetProjectNameInput {
    pub project_id: Uuid,
    pub name: String,
}

/// Input of `set_project_description(project_id: UUID!, description: String)`.
/// A `None` description clears the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetProjectDescriptionInput {
    pub project_id: Uuid,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateProject(CreateProjectInput),
    DeleteProject(DeleteProjectInput),
    SetProjectName(SetProjectNameInput),
    SetProjectDescription(SetProjectDescriptionInput),
}

impl Command {
    pub fn operation(&self) -> MutationOperation {
        match self {
            Self::CreateProject(_) => MutationOperation::CreateProject,
            Self::DeleteProject(_) => MutationOperation::DeleteProject,
            Self::SetProjectName(_) => MutationOperation::SetProjectName,
            Self::SetProjectDescription(_) => MutationOperation::SetProjectDescription,
        }
    }

    /// Project targeted by the command; `None` for creates
    pub fn project_id(&self) -> Option<Uuid> {
        match self {
            Self::CreateProject(_) => None,
            Self::DeleteProject(input) => Some(input.project_id),
            Self::SetProjectName(input) => Some(input.project_id),
            Self::SetProjectDescription(input) => Some(input.project_id),
        }
    }
}
