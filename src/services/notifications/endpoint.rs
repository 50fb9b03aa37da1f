//! Webhook endpoint shared by all providers.
//!
//! Providers differ only in their base URL, content type, OK status and JSON
//! envelope; resolving the destination, posting and applying the failure
//! policy happen here.

use std::path::Path;
use std::time::{Duration, Instant};

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{Level, debug, instrument};

use super::options::SenderOptions;
use super::policy::FailurePolicy;
use super::sender::Delivery;
use crate::config::{ChannelRegistry, ConfigError};
use crate::error::{NotifyError, NotifyResult};
use crate::external::HTTP_CLIENT;

/// Static description of a chat provider's webhook API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSpec {
    /// Identifier used in logs (e.g. "slack")
    pub id: &'static str,
    /// Name used in failure messages (e.g. "Slack")
    pub display_name: &'static str,
    /// Base URL channel paths are resolved against
    pub base_url: &'static str,
    /// `Content-Type` header of every request
    pub content_type: &'static str,
    /// The only status treated as success
    pub ok_status: u16,
}

/// Resolved, immutable webhook destination plus delivery settings
#[derive(Debug, Clone)]
pub struct WebhookEndpoint {
    spec: ProviderSpec,
    url: Url,
    client: reqwest::Client,
    timeout: Option<Duration>,
    policy: FailurePolicy,
}

impl WebhookEndpoint {
    /// Build an endpoint for an already resolved URL
    pub fn new(spec: ProviderSpec, url: Url, options: SenderOptions) -> NotifyResult<Self> {
        options.validate()?;
        check_scheme(&url)?;

        Ok(Self {
            spec,
            url,
            client: options.client.unwrap_or_else(|| HTTP_CLIENT.clone()),
            timeout: options.timeout,
            policy: options.policy,
        })
    }

    /// Build an endpoint from a credentials file and channel name
    ///
    /// The channel's value is resolved against the provider base URL (or
    /// `options.base_url`) following RFC 3986: relative paths extend the base,
    /// absolute URLs replace it.
    pub fn from_key_file(
        spec: ProviderSpec,
        key_file: impl AsRef<Path>,
        channel: &str,
        options: SenderOptions,
    ) -> NotifyResult<Self> {
        let registry = ChannelRegistry::load(key_file)?;
        let fragment = registry.resolve(channel)?;

        let base = match &options.base_url {
            Some(base) => base.clone(),
            None => parse_url(spec.base_url)?,
        };
        let url = resolve_url(&base, fragment)?;

        debug!(
            provider = spec.id,
            channel,
            host = url.host_str().unwrap_or_default(),
            "Resolved webhook endpoint"
        );

        Self::new(spec, url, options)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// POST `payload` once and interpret the status
    ///
    /// `message` is only used in the failure report.
    #[instrument(
        name = "webhook.post",
        skip_all,
        fields(provider = self.spec.id, host = self.url.host_str().unwrap_or_default())
    )]
    pub async fn post<T>(&self, payload: &T, message: &str) -> NotifyResult<Delivery>
    where
        T: Serialize + ?Sized + Sync,
    {
        let start = Instant::now();
        let body = serde_json::to_vec(payload).map_err(|e| NotifyError::Internal {
            source: anyhow::Error::new(e).context("Failed to encode webhook payload"),
        })?;

        debug!(bytes = body.len(), "Sending webhook message");

        let mut request = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, self.spec.content_type)
            .body(body);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|source| NotifyError::Network {
            provider: self.spec.display_name,
            source,
        })?;

        let status_code = response.status().as_u16();
        let duration_ms = start.elapsed().as_millis() as u64;

        if status_code == self.spec.ok_status {
            debug!(status_code, duration_ms, "Webhook message delivered");
            return Ok(Delivery {
                provider: self.spec.id,
                status_code,
                delivered: true,
                duration_ms,
            });
        }

        let response_text = response.text().await.unwrap_or_default();
        debug!(status_code, duration_ms, response = %response_text, "Webhook rejected message");

        let error = NotifyError::Delivery {
            provider: self.spec.display_name,
            status: status_code,
            message: message.to_string(),
        };

        match &self.policy {
            FailurePolicy::Log(sink) => {
                sink.log(Level::WARN, &error.to_string());
                Ok(Delivery {
                    provider: self.spec.id,
                    status_code,
                    delivered: false,
                    duration_ms,
                })
            }
            FailurePolicy::Raise => Err(error),
        }
    }
}

/// Join a channel value onto a base URL
pub fn resolve_url(base: &Url, fragment: &str) -> Result<Url, ConfigError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(ConfigError::InvalidUrl {
            value: fragment.to_string(),
            reason: "webhook path is empty".to_string(),
        });
    }

    let url = base.join(fragment).map_err(|e| ConfigError::InvalidUrl {
        value: fragment.to_string(),
        reason: e.to_string(),
    })?;
    check_scheme(&url)?;

    Ok(url)
}

fn parse_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn check_scheme(url: &Url) -> Result<(), ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl {
            value: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
