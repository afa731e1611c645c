use metrics::{counter, histogram};

/// Metrics collector for mutation requests
#[derive(Debug, Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "mg_gateway",
        }
    }

    /// Record a mutation entering the pipeline
    pub fn mutation_received(&self, operation: &str) {
        counter!(format!("{}.mutations.received", self.prefix)).increment(1);
        counter!(format!("{}.mutations.received.{}", self.prefix, operation)).increment(1);
    }

    pub fn mutation_succeeded(&self, operation: &str) {
        counter!(format!("{}.mutations.succeeded.{}", self.prefix, operation)).increment(1);
    }

    /// Mutation resolved to no project (not found or outside tenant scope)
    pub fn mutation_absent(&self, operation: &str) {
        counter!(format!("{}.mutations.absent.{}", self.prefix, operation)).increment(1);
    }

    /// Record error occurrence, keyed by error code
    pub fn error_occurred(&self, error_code: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!(
            "{}.errors.{}",
            self.prefix,
            error_code.to_lowercase()
        ))
        .increment(1);
    }

    /// Replayed create served from the idempotency cache
    pub fn idempotent_replay(&self) {
        counter!(format!("{}.mutations.replayed", self.prefix)).increment(1);
    }

    /// Record mutation processing latency
    pub fn mutation_latency(&self, duration: std::time::Duration) {
        histogram!(format!("{}.mutations.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
