use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The mutation fields exposed on the schema's `Mutation` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOperation {
    CreateProject,
    DeleteProject,
    SetProjectName,
    SetProjectDescription,
}

impl MutationOperation {
    /// Schema field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateProject => "create_project",
            Self::DeleteProject => "delete_project",
            Self::SetProjectName => "set_project_name",
            Self::SetProjectDescription => "set_project_description",
        }
    }
}

impl FromStr for MutationOperation {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "create_project" => Ok(Self::CreateProject),
            "delete_project" => Ok(Self::DeleteProject),
            "set_project_name" => Ok(Self::SetProjectName),
            "set_project_description" => Ok(Self::SetProjectDescription),
            _ => Err(CoreError::InvalidOperation {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for MutationOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
