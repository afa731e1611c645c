//! Turns an operation name plus its JSON arguments into a typed `Command`.
//!
//! The executor in front of the gateway has already type-checked arguments
//! against the schema, so decoding only enforces required-ness, JSON types
//! and UUID syntax. Unknown fields are ignored.

use crate::{GatewayError, Result as GatewayErrorResult};

use mg_core::{
    Command, CreateProjectInput, DeleteProjectInput, MutationOperation,
    SetProjectDescriptionInput, SetProjectNameInput, TenantId,
};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Canonical hyphenated UUID length (8-4-4-4-12)
const UUID_LENGTH: usize = 36;

/// `{ "operation": "...", "input": { ... } }` envelope for callers holding JSON text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRequest {
    pub operation: String,
    #[serde(default)]
    pub input: Value,
}

impl MutationRequest {
    pub fn new(operation: impl Into<String>, input: Value) -> Self {
        Self {
            operation: operation.into(),
            input,
        }
    }
}

pub struct RequestDecoder;

impl RequestDecoder {
    #[track_caller]
    pub fn decode(operation: &str, input: &Value) -> GatewayErrorResult<Command> {
        let operation = MutationOperation::from_str(operation).map_err(|_| {
            GatewayError::decode(format!("unknown operation '{}'", operation), None)
        })?;

        let args = Self::object(input)?;

        let command = match operation {
            MutationOperation::CreateProject => Command::CreateProject(CreateProjectInput {
                tenant_id: Self::required_tenant_id(args, "tenant_id")?,
                name: Self::required_string(args, "name")?,
                description: Self::optional_string(args, "description")?,
            }),
            MutationOperation::DeleteProject => Command::DeleteProject(DeleteProjectInput {
                project_id: Self::required_uuid(args, "project_id")?,
            }),
            MutationOperation::SetProjectName => Command::SetProjectName(SetProjectNameInput {
                project_id: Self::required_uuid(args, "project_id")?,
                name: Self::required_string(args, "name")?,
            }),
            MutationOperation::SetProjectDescription => {
                Command::SetProjectDescription(SetProjectDescriptionInput {
                    project_id: Self::required_uuid(args, "project_id")?,
                    description: Self::optional_string(args, "description")?,
                })
            }
        };

        Ok(command)
    }

    #[track_caller]
    pub fn decode_request(request: &MutationRequest) -> GatewayErrorResult<Command> {
        Self::decode(&request.operation, &request.input)
    }

    #[track_caller]
    fn object(input: &Value) -> GatewayErrorResult<&Map<String, Value>> {
        input
            .as_object()
            .ok_or_else(|| GatewayError::decode("input must be a JSON object", None))
    }

    /// Absent and explicit `null` are the same thing to a nullable argument.
    fn present<'a>(args: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
        args.get(field).filter(|value| !value.is_null())
    }

    #[track_caller]
    fn required_string(args: &Map<String, Value>, field: &str) -> GatewayErrorResult<String> {
        match Self::present(args, field) {
            None => Err(GatewayError::decode(
                format!("missing required field '{}'", field),
                Some(field),
            )),
            Some(Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(GatewayError::decode(
                format!("field '{}' must be a string", field),
                Some(field),
            )),
        }
    }

    #[track_caller]
    fn optional_string(
        args: &Map<String, Value>,
        field: &str,
    ) -> GatewayErrorResult<Option<String>> {
        match Self::present(args, field) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(GatewayError::decode(
                format!("field '{}' must be a string or null", field),
                Some(field),
            )),
        }
    }

    #[track_caller]
    fn required_uuid(args: &Map<String, Value>, field: &str) -> GatewayErrorResult<Uuid> {
        let raw = Self::required_string(args, field)?;
        Self::parse_uuid(&raw, field)
    }

    #[track_caller]
    fn required_tenant_id(args: &Map<String, Value>, field: &str) -> GatewayErrorResult<TenantId> {
        let raw = Self::required_string(args, field)?;
        Self::parse_tenant_id(&raw, field)
    }

    /// Parse an id in hyphenated form only; the simple, braced and URN
    /// forms `Uuid::parse_str` also accepts are rejected.
    #[track_caller]
    pub fn parse_uuid(raw: &str, field: &str) -> GatewayErrorResult<Uuid> {
        if raw.len() != UUID_LENGTH {
            return Err(GatewayError::decode(
                format!("field '{}' is not a valid UUID: '{}'", field, raw),
                Some(field),
            ));
        }

        Uuid::parse_str(raw).map_err(|e| {
            GatewayError::decode(
                format!("field '{}' is not a valid UUID: {}", field, e),
                Some(field),
            )
        })
    }

    #[track_caller]
    pub fn parse_tenant_id(raw: &str, field: &str) -> GatewayErrorResult<TenantId> {
        TenantId::from_str(raw).map_err(|_| {
            GatewayError::decode(
                format!("field '{}' is not a valid UUID: '{}'", field, raw),
                Some(field),
            )
        })
    }
}
