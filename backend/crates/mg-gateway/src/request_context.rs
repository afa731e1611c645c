use mg_core::TenantId;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Request context for correlation and tracing
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique correlation ID for this request chain
    pub correlation_id: String,
    /// Sequence number within this process
    pub request_seq: u64,
    /// Tenant the authorization layer bound this request to, if any
    pub tenant_scope: Option<TenantId>,
    /// Caller-supplied replay key for `create_project`
    pub idempotency_key: Option<String>,
    /// Start time for latency tracking
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(request_id: &str) -> Self {
        let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        // Use request_id as correlation_id if provided, otherwise generate
        let correlation_id = if request_id.is_empty() {
            format!("req-{}-{}", request_seq, Uuid::new_v4().as_simple())
        } else {
            request_id.to_string()
        };

        Self {
            correlation_id,
            request_seq,
            tenant_scope: None,
            idempotency_key: None,
            started_at: Instant::now(),
        }
    }

    pub fn with_tenant_scope(mut self, tenant_id: TenantId) -> Self {
        self.tenant_scope = Some(tenant_id);
        self
    }

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Unscoped requests may touch any tenant.
    pub fn permits(&self, tenant_id: TenantId) -> bool {
        self.tenant_scope.is_none_or(|scope| scope == tenant_id)
    }

    /// Get elapsed time since request started
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Tenant scope rendered for logs and spans
    pub fn tenant_label(&self) -> String {
        self.tenant_scope
            .map(|tenant_id| tenant_id.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        format!(
            "[req={} tenant={}]",
            short(&self.correlation_id),
            short(&self.tenant_label())
        )
    }
}

/// First eight characters, safe for non-ASCII request ids
fn short(value: &str) -> String {
    value.chars().take(8).collect()
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new("")
    }
}
