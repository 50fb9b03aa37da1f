//! Send command handler
//!
//! Builds one sender from the merged settings and posts a single message.

use std::path::PathBuf;

use tracing::info;

use crate::config::settings::Settings;
use crate::error::{NotifyError, NotifyResult};
use crate::services::notifications::{Delivery, ProviderKind, SenderOptions};

/// Handler for the send command
pub struct SendCommandHandler {
    config: Settings,
}

impl SendCommandHandler {
    /// Create a new send command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Send `message` once
    ///
    /// With `no_log` set, a rejected message is returned as
    /// `NotifyError::Delivery`; otherwise it is logged as a warning.
    pub async fn execute(&self, message: &str, no_log: bool) -> NotifyResult<Delivery> {
        let (provider, key_file, channel) = self.target()?;

        let mut options = SenderOptions::from_settings(&self.config.http)?;
        if no_log {
            options = options.without_logger();
        }

        let sender = provider.build_sender(&key_file, &channel, options)?;
        let delivery = sender.send(message).await?;

        if delivery.delivered {
            info!(
                provider = delivery.provider,
                channel = %channel,
                duration_ms = delivery.duration_ms,
                "Message delivered"
            );
        }

        Ok(delivery)
    }

    /// Provider, credentials file and channel from the merged settings
    fn target(&self) -> NotifyResult<(ProviderKind, PathBuf, String)> {
        let notify = &self.config.notify;

        let provider = notify
            .provider
            .as_deref()
            .ok_or_else(|| missing("provider", "--provider"))?
            .parse::<ProviderKind>()?;
        let key_file = notify
            .key_file
            .clone()
            .ok_or_else(|| missing("key_file", "--key-file"))?;
        let channel = notify
            .channel
            .clone()
            .ok_or_else(|| missing("channel", "--channel"))?;

        Ok((provider, key_file, channel))
    }
}

fn missing(field: &str, flag: &str) -> NotifyError {
    NotifyError::validation(
        field,
        format!("No {} given; pass {} or set notify.{} in the settings file", field, flag, field),
    )
}
