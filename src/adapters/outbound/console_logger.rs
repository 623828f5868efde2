use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards domain messages to the process-wide `tracing` subscriber.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn info(&self, msg: &str) { tracing::info!(target: "wallpath::domain", "{}", msg); }
    fn warn(&self, msg: &str) { tracing::warn!(target: "wallpath::domain", "{}", msg); }
    fn error(&self, msg: &str) { tracing::error!(target: "wallpath::domain", "{}", msg); }
}

/// Console logger backed by whatever `tracing` subscriber the binary installed.
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(TracingBridge {})
}
