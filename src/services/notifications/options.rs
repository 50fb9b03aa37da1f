//! Construction options shared by every sender.

use std::time::Duration;

use reqwest::Url;

use super::policy::{FailurePolicy, LogSink};
use crate::config::HttpSettings;
use crate::error::{NotifyError, NotifyResult};
use crate::external::build_http_client;

/// Options applied when a sender is built
///
/// # Example
/// ```ignore
/// let options = SenderOptions::default()
///     .with_timeout(Duration::from_secs(5))
///     .without_logger();
/// let sender = SlackSender::from_key_file("~/.slack", "alerts", options)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SenderOptions {
    pub(crate) client: Option<reqwest::Client>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) base_url: Option<Url>,
    pub(crate) policy: FailurePolicy,
}

impl SenderOptions {
    /// Options whose client honours the given HTTP settings
    pub fn from_settings(settings: &HttpSettings) -> NotifyResult<Self> {
        Ok(Self::default().with_client(build_http_client(settings)?))
    }

    /// Use a specific HTTP client instead of the shared one
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Per-request timeout, overriding the client's own
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve channel paths against `base_url` instead of the provider default
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Report non-OK responses to `sink` instead of failing
    pub fn with_logger(self, sink: impl LogSink + 'static) -> Self {
        self.with_policy(FailurePolicy::log_to(sink))
    }

    /// Fail with `NotifyError::Delivery` on non-OK responses
    pub fn without_logger(self) -> Self {
        self.with_policy(FailurePolicy::Raise)
    }

    pub fn policy(&self) -> &FailurePolicy {
        &self.policy
    }

    pub(crate) fn validate(&self) -> NotifyResult<()> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(NotifyError::validation(
                "timeout",
                "Timeout must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SenderOptions::default();
        assert!(options.client.is_none());
        assert!(options.timeout.is_none());
        assert!(options.base_url.is_none());
        assert!(!options.policy().is_raise());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_without_logger() {
        let options = SenderOptions::default().without_logger();
        assert!(options.policy().is_raise());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let options = SenderOptions::default().with_timeout(Duration::ZERO);
        assert!(matches!(
            options.validate(),
            Err(NotifyError::Validation { .. })
        ));
    }

    #[test]
    fn test_from_settings() {
        let options = SenderOptions::from_settings(&HttpSettings::default()).unwrap();
        assert!(options.client.is_some());
    }
}
