pub mod decoder;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod request_context;
pub mod request_logging;
pub mod validator;

pub use decoder::{MutationRequest, RequestDecoder};
pub use error::{ErrorResponse, GatewayError, Result};
pub use handlers::context::HandlerContext;
pub use handlers::dispatcher::MutationDispatcher;
pub use handlers::error_codes::{DECODE_ERROR, INTERNAL_ERROR, STORE_ERROR, VALIDATION_ERROR};
pub use handlers::idempotency::{
    CLAIM_STALE_SECS, CLAIM_WAIT, KeyClaim, check_idempotency, claim_idempotency,
    release_idempotency, store_idempotency,
};
pub use handlers::project::{handle_create, handle_delete, handle_set_description, handle_set_name};
pub use metrics::Metrics;
pub use request_context::RequestContext;
pub use request_logging::RequestLogger;
pub use validator::{CommandValidator, sanitize_description, sanitize_string};


use tracing::info_span;

/// Create a tracing span for a mutation request.
/// All log entries within the handler will include these fields.
pub fn create_request_span(
    correlation_id: &str,
    tenant_scope: &str,
    operation: &str,
) -> tracing::Span {
    info_span!(
        "mutation_request",
        correlation_id = %correlation_id,
        tenant_scope = %tenant_scope,
        operation = %operation,
    )
}
