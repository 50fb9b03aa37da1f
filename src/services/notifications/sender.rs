//! Core message sender trait and types.
//!
//! This module provides the abstraction every chat provider implements, so
//! callers can hold a `Box<dyn MessageSender>` without caring which platform
//! the message ends up on.

use crate::error::NotifyResult;
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;

/// Outcome of a `send` that did not return an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    /// Provider identifier, as returned by [`MessageSender::name`]
    pub provider: &'static str,
    /// HTTP status code returned by the webhook
    pub status_code: u16,
    /// `false` when a non-OK status was reported to the log sink instead of
    /// being returned as an error
    pub delivered: bool,
    /// Time taken for the request in milliseconds
    pub duration_ms: u64,
}

/// Trait for chat message senders (Slack, Google Chat, ...)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// Senders hold only immutable state, so one instance can be shared across
/// tasks and used for any number of sends.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct EchoSender {
///     endpoint: WebhookEndpoint,
/// }
///
/// #[async_trait]
/// impl MessageSender for EchoSender {
///     async fn send(&self, message: &str) -> NotifyResult<Delivery> {
///         self.endpoint.post(&json!({ "echo": message }), message).await
///     }
///
///     fn name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn endpoint(&self) -> &Url {
///         self.endpoint.url()
///     }
/// }
/// ```
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends `message` with exactly one HTTP request
    ///
    /// # Returns
    /// - `Ok(Delivery { delivered: true, .. })` when the provider accepted it
    /// - `Ok(Delivery { delivered: false, .. })` when the provider rejected it
    ///   and the sender was configured with a log sink
    /// - `Err(NotifyError::Delivery)` when the provider rejected it and the
    ///   sender was configured to raise
    /// - `Err(NotifyError::Network)` when no response was received
    async fn send(&self, message: &str) -> NotifyResult<Delivery>;

    /// Returns the provider name for logging/debugging (e.g. "slack")
    fn name(&self) -> &'static str;

    /// The webhook URL this sender posts to, fixed at construction
    fn endpoint(&self) -> &Url;
}
