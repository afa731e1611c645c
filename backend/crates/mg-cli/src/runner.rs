//! Executes one parsed command against a dispatcher and renders the result
//! as JSON.

use crate::{Commands, Result as CliErrorResult};

use mg_db::ProjectStore;
use mg_gateway::{GatewayError, MutationDispatcher, RequestContext, RequestDecoder};

use log::debug;
use serde_json::Value;

pub struct Runner<S: ProjectStore> {
    dispatcher: MutationDispatcher<S>,
}

impl<S: ProjectStore> Runner<S> {
    pub fn new(dispatcher: MutationDispatcher<S>) -> Self {
        Self { dispatcher }
    }

    pub async fn run(&self, command: Commands, ctx: RequestContext) -> CliErrorResult<Value> {
        if let Some(request) = command.to_mutation() {
            let payload = self.dispatcher.execute_request(&request, ctx).await?;
            return Ok(serde_json::to_value(payload)?);
        }

        match command {
            Commands::Execute { operation, input } => {
                let input: Value = serde_json::from_str(&input).map_err(|e| {
                    GatewayError::decode(format!("input is not valid JSON: {}", e), None)
                })?;
                let payload = self.dispatcher.execute(&operation, &input, ctx).await?;
                Ok(serde_json::to_value(payload)?)
            }
            Commands::GetProject { project_id } => self.get_project(&project_id, &ctx).await,
            Commands::ListProjects { tenant_id } => self.list_projects(&tenant_id, &ctx).await,
            Commands::CreateProject { .. }
            | Commands::DeleteProject { .. }
            | Commands::SetProjectName { .. }
            | Commands::SetProjectDescription { .. } => {
                Err(GatewayError::internal("mutation command was not routed").into())
            }
        }
    }

    /// A project outside the tenant scope reads as `null`, same as a missing one.
    async fn get_project(&self, project_id: &str, ctx: &RequestContext) -> CliErrorResult<Value> {
        let project_id = RequestDecoder::parse_uuid(project_id, "project_id")?;

        let project = self
            .dispatcher
            .store()
            .find_by_id(project_id)
            .await?
            .filter(|project| ctx.permits(project.tenant_id));

        debug!("{} get_project found={}", ctx.log_prefix(), project.is_some());

        Ok(serde_json::to_value(project)?)
    }

    async fn list_projects(&self, tenant_id: &str, ctx: &RequestContext) -> CliErrorResult<Value> {
        let tenant_id = RequestDecoder::parse_tenant_id(tenant_id, "tenant_id")?;

        if !ctx.permits(tenant_id) {
            return Err(GatewayError::validation(
                "tenant_id is outside the request's tenant scope",
                "tenant_id",
            )
            .into());
        }

        let projects = self.dispatcher.store().find_by_tenant(tenant_id).await?;

        debug!("{} list_projects count={}", ctx.log_prefix(), projects.len());

        Ok(serde_json::to_value(projects)?)
    }
}

/// Build the request context from the global CLI flags.
pub fn request_context(
    tenant_scope: Option<&str>,
    idempotency_key: Option<&str>,
) -> CliErrorResult<RequestContext> {
    let mut ctx = RequestContext::default();

    if let Some(scope) = tenant_scope {
        let tenant_id = RequestDecoder::parse_tenant_id(scope, "tenant_scope")?;
        ctx = ctx.with_tenant_scope(tenant_id);
    }

    if let Some(key) = idempotency_key {
        ctx = ctx.with_idempotency_key(key);
    }

    Ok(ctx)
}
