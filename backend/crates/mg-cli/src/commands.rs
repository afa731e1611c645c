use mg_core::MutationOperation;
use mg_gateway::MutationRequest;

use clap::Subcommand;
use serde_json::{Map, Value};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a project owned by a tenant
    CreateProject {
        /// Owning tenant (UUID)
        #[arg(long)]
        tenant_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a project
    DeleteProject {
        /// Project ID (UUID)
        project_id: String,
    },

    /// Rename a project
    SetProjectName {
        /// Project ID (UUID)
        project_id: String,
        #[arg(long)]
        name: String,
    },

    /// Replace a project's description; omit --description to clear it
    SetProjectDescription {
        /// Project ID (UUID)
        project_id: String,
        #[arg(long)]
        description: Option<String>,
    },

    /// Get a project by ID
    GetProject {
        /// Project ID (UUID)
        project_id: String,
    },

    /// List a tenant's projects ordered by name
    ListProjects {
        /// Tenant ID (UUID)
        #[arg(long)]
        tenant_id: String,
    },

    /// Run a raw mutation: operation name plus a JSON object of arguments
    Execute {
        #[arg(long)]
        operation: String,
        #[arg(long)]
        input: String,
    },
}

impl Commands {
    /// The mutation this command stands for. `None` for reads and for
    /// `execute`, whose input is still unparsed text.
    pub fn to_mutation(&self) -> Option<MutationRequest> {
        let (operation, fields): (MutationOperation, Vec<(&str, Option<&str>)>) = match self {
            Self::CreateProject {
                tenant_id,
                name,
                description,
            } => (
                MutationOperation::CreateProject,
                vec![
                    ("tenant_id", Some(tenant_id.as_str())),
                    ("name", Some(name.as_str())),
                    ("description", description.as_deref()),
                ],
            ),
            Self::DeleteProject { project_id } => (
                MutationOperation::DeleteProject,
                vec![("project_id", Some(project_id.as_str()))],
            ),
            Self::SetProjectName { project_id, name } => (
                MutationOperation::SetProjectName,
                vec![
                    ("project_id", Some(project_id.as_str())),
                    ("name", Some(name.as_str())),
                ],
            ),
            Self::SetProjectDescription {
                project_id,
                description,
            } => (
                MutationOperation::SetProjectDescription,
                vec![
                    ("project_id", Some(project_id.as_str())),
                    ("description", description.as_deref()),
                ],
            ),
            Self::GetProject { .. } | Self::ListProjects { .. } | Self::Execute { .. } => {
                return None;
            }
        };

        let input: Map<String, Value> = fields
            .into_iter()
            .map(|(key, value)| {
                let value = value.map_or(Value::Null, |v| Value::String(v.to_string()));
                (key.to_string(), value)
            })
            .collect();

        Some(MutationRequest::new(operation.as_str(), Value::Object(input)))
    }
}
