//! What a sender does when the webhook answers with a non-OK status.

use std::fmt;
use std::sync::Arc;

use tracing::Level;

/// Destination for delivery-failure warnings
///
/// Implemented for any `Fn(Level, &str)` closure, so tests and embedding
/// applications can capture warnings without a subscriber.
pub trait LogSink: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}

/// Forwards records to the `tracing` macros under the `notifiers` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "notifiers", "{}", message),
            Level::WARN => tracing::warn!(target: "notifiers", "{}", message),
            Level::INFO => tracing::info!(target: "notifiers", "{}", message),
            Level::DEBUG => tracing::debug!(target: "notifiers", "{}", message),
            Level::TRACE => tracing::trace!(target: "notifiers", "{}", message),
        }
    }
}

/// Failure reporting chosen by the caller at construction
#[derive(Clone)]
pub enum FailurePolicy {
    /// Emit one `WARN` record through the sink and report success
    Log(Arc<dyn LogSink>),
    /// Return `NotifyError::Delivery` to the caller
    Raise,
}

impl FailurePolicy {
    /// Log through `sink`
    pub fn log_to(sink: impl LogSink + 'static) -> Self {
        FailurePolicy::Log(Arc::new(sink))
    }

    /// Log through the global `tracing` subscriber
    pub fn tracing() -> Self {
        Self::log_to(TracingSink)
    }

    pub fn is_raise(&self) -> bool {
        matches!(self, FailurePolicy::Raise)
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::tracing()
    }
}

impl fmt::Debug for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Log(_) => f.write_str("Log(..)"),
            FailurePolicy::Raise => f.write_str("Raise"),
        }
    }
}
