use crate::{Metrics, RequestContext};

use mg_db::{IdempotencyRepository, ProjectStore};

use std::sync::Arc;

/// Context passed to all handlers containing request metadata and resources.
pub struct HandlerContext<S: ProjectStore> {
    /// Entity store the mutation runs against
    pub store: Arc<S>,
    /// Replay cache for idempotent creates; `None` disables replay protection
    pub idempotency: Option<IdempotencyRepository>,
    /// Counters shared with the dispatcher that built this context
    pub metrics: Metrics,
    /// Request context for tracing and tenant scoping
    pub request_ctx: RequestContext,
}

impl<S: ProjectStore> HandlerContext<S> {
    pub fn new(
        store: Arc<S>,
        idempotency: Option<IdempotencyRepository>,
        metrics: Metrics,
        request_ctx: RequestContext,
    ) -> Self {
        Self {
            store,
            idempotency,
            metrics,
            request_ctx,
        }
    }

    /// Get log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        self.request_ctx.log_prefix()
    }
}

impl<S: ProjectStore> Clone for HandlerContext<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            idempotency: self.idempotency.clone(),
            metrics: self.metrics.clone(),
            request_ctx: self.request_ctx.clone(),
        }
    }
}

impl<S: ProjectStore> std::fmt::Debug for HandlerContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("correlation_id", &self.request_ctx.correlation_id)
            .field("tenant_scope", &self.request_ctx.tenant_scope)
            .field("idempotency", &self.idempotency.is_some())
            .finish()
    }
}
