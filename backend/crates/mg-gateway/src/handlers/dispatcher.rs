use crate::{
    CommandValidator, HandlerContext, Metrics, MutationRequest, RequestContext, RequestDecoder,
    Result as GatewayErrorResult, STORE_ERROR, create_request_span, handle_create, handle_delete,
    handle_set_description, handle_set_name, log_handler_entry, log_handler_exit,
};

use mg_config::ValidationConfig;
use mg_core::{Command, MutationOperation, MutationPayload};
use mg_db::{IdempotencyRepository, ProjectStore};

use std::str::FromStr;
use std::sync::Arc;

use log::{error, info};
use serde_json::Value;
use tracing::Instrument;

/// Routes mutation requests through decode, validation and the store.
/// Holds no per-request state; every call is independent.
pub struct MutationDispatcher<S: ProjectStore> {
    store: Arc<S>,
    validator: CommandValidator,
    idempotency: Option<IdempotencyRepository>,
    metrics: Metrics,
}

impl<S: ProjectStore> MutationDispatcher<S> {
    pub fn new(store: Arc<S>, validation: &ValidationConfig) -> Self {
        Self {
            store,
            validator: CommandValidator::new(validation),
            idempotency: None,
            metrics: Metrics::new(),
        }
    }

    /// Enable replay protection for `create_project`
    pub fn with_idempotency(mut self, repo: IdempotencyRepository) -> Self {
        self.idempotency = Some(repo);
        self
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Drop cached create results older than `max_age_seconds`.
    /// Returns the number of entries removed.
    pub async fn purge_idempotency(&self, max_age_seconds: i64) -> GatewayErrorResult<u64> {
        let Some(repo) = &self.idempotency else {
            return Ok(0);
        };

        let removed = repo.cleanup_old_entries(max_age_seconds).await?;
        if removed > 0 {
            info!("Purged {} expired idempotency entries", removed);
        }

        Ok(removed)
    }

    /// Full pipeline: decode, validate, dispatch.
    pub async fn execute(
        &self,
        operation: &str,
        input: &Value,
        ctx: RequestContext,
    ) -> GatewayErrorResult<MutationPayload> {
        let span = create_request_span(&ctx.correlation_id, &ctx.tenant_label(), operation);

        async {
            log_handler_entry!(ctx, operation);
            let label = operation_label(operation);
            self.metrics.mutation_received(label);

            let result = match RequestDecoder::decode(operation, input) {
                Ok(command) => self.run(command, &ctx).await,
                Err(e) => Err(e),
            };

            self.record(label, &result, &ctx);
            result
        }
        .instrument(span)
        .await
    }

    pub async fn execute_request(
        &self,
        request: &MutationRequest,
        ctx: RequestContext,
    ) -> GatewayErrorResult<MutationPayload> {
        self.execute(&request.operation, &request.input, ctx).await
    }

    /// Validate an already-decoded command and route it to its handler.
    pub async fn dispatch(
        &self,
        command: Command,
        ctx: RequestContext,
    ) -> GatewayErrorResult<MutationPayload> {
        let operation = command.operation().as_str();
        let span = create_request_span(&ctx.correlation_id, &ctx.tenant_label(), operation);

        async {
            log_handler_entry!(ctx, operation);
            self.metrics.mutation_received(operation);

            let result = self.run(command, &ctx).await;

            self.record(operation, &result, &ctx);
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        command: Command,
        ctx: &RequestContext,
    ) -> GatewayErrorResult<MutationPayload> {
        self.validator.validate(&command)?;

        let handler_ctx = HandlerContext::new(
            self.store.clone(),
            self.idempotency.clone(),
            self.metrics.clone(),
            ctx.clone(),
        );

        match command {
            Command::CreateProject(input) => handle_create(input, &handler_ctx).await,
            Command::DeleteProject(input) => handle_delete(input, &handler_ctx).await,
            Command::SetProjectName(input) => handle_set_name(input, &handler_ctx).await,
            Command::SetProjectDescription(input) => {
                handle_set_description(input, &handler_ctx).await
            }
        }
    }

    fn record(
        &self,
        operation: &str,
        result: &GatewayErrorResult<MutationPayload>,
        ctx: &RequestContext,
    ) {
        self.metrics.mutation_latency(ctx.started_at.elapsed());

        match result {
            Ok(payload) if payload.project_id().is_none() && payload.success() != Some(true) => {
                self.metrics.mutation_absent(operation)
            }
            Ok(_) => self.metrics.mutation_succeeded(operation),
            Err(e) => {
                self.metrics.error_occurred(e.error_code());
                if e.error_code() == STORE_ERROR {
                    error!("{} {} hit the store: {}", ctx.log_prefix(), operation, e);
                }
            }
        }

        log_handler_exit!(ctx, operation, result);
    }
}

/// Metric label for a raw operation name; unknown names share one bucket.
fn operation_label(operation: &str) -> &'static str {
    MutationOperation::from_str(operation)
        .map(|operation| operation.as_str())
        .unwrap_or("unknown")
}
