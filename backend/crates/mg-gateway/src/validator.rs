use crate::{GatewayError, Result as GatewayErrorResult};

use mg_config::ValidationConfig;
use mg_core::{Command, TenantId};

use uuid::Uuid;

/// Semantic checks applied to a decoded command before it reaches the store.
#[derive(Debug, Clone)]
pub struct CommandValidator {
    max_name_length: usize,
    max_description_length: usize,
}

impl CommandValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            max_name_length: config.max_name_length,
            max_description_length: config.max_description_length,
        }
    }

    #[track_caller]
    pub fn validate(&self, command: &Command) -> GatewayErrorResult<()> {
        match command {
            Command::CreateProject(input) => {
                Self::validate_tenant_id(input.tenant_id)?;
                self.validate_name(&input.name)?;
                self.validate_description(input.description.as_deref())
            }
            Command::DeleteProject(input) => Self::validate_project_id(input.project_id),
            Command::SetProjectName(input) => {
                Self::validate_project_id(input.project_id)?;
                self.validate_name(&input.name)
            }
            Command::SetProjectDescription(input) => {
                Self::validate_project_id(input.project_id)?;
                self.validate_description(input.description.as_deref())
            }
        }
    }

    #[track_caller]
    fn validate_tenant_id(tenant_id: TenantId) -> GatewayErrorResult<()> {
        if tenant_id.is_nil() {
            return Err(GatewayError::validation(
                "tenant_id must not be the nil UUID",
                "tenant_id",
            ));
        }
        Ok(())
    }

    #[track_caller]
    fn validate_project_id(project_id: Uuid) -> GatewayErrorResult<()> {
        if project_id.is_nil() {
            return Err(GatewayError::validation(
                "project_id must not be the nil UUID",
                "project_id",
            ));
        }
        Ok(())
    }

    /// Lengths are counted in characters after trimming.
    #[track_caller]
    fn validate_name(&self, name: &str) -> GatewayErrorResult<()> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(GatewayError::validation("name cannot be empty", "name"));
        }

        if trimmed.chars().count() > self.max_name_length {
            return Err(GatewayError::validation(
                format!("name must not exceed {} characters", self.max_name_length),
                "name",
            ));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(GatewayError::validation(
                "name must not contain control characters",
                "name",
            ));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_description(&self, description: Option<&str>) -> GatewayErrorResult<()> {
        let Some(description) = description else {
            return Ok(());
        };

        if description.trim().chars().count() > self.max_description_length {
            return Err(GatewayError::validation(
                format!(
                    "description must not exceed {} characters",
                    self.max_description_length
                ),
                "description",
            ));
        }

        Ok(())
    }
}

impl Default for CommandValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

/// Sanitize string input (trim whitespace)
pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}

/// Trimmed description; blank collapses to `None`.
pub fn sanitize_description(description: Option<&str>) -> Option<String> {
    description
        .map(sanitize_string)
        .filter(|description| !description.is_empty())
}
