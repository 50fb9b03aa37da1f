//! Runtime selection of a provider by name.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::google_chat_provider::GoogleChatSender;
use super::options::SenderOptions;
use super::sender::MessageSender;
use super::slack_provider::SlackSender;
use crate::error::{NotifyError, NotifyResult};

/// Supported chat providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    Slack,
    GoogleChat,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Slack, ProviderKind::GoogleChat];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Slack => "slack",
            ProviderKind::GoogleChat => "google-chat",
        }
    }

    /// Build a boxed sender for `channel` in `key_file`
    pub fn build_sender(
        self,
        key_file: impl AsRef<Path>,
        channel: &str,
        options: SenderOptions,
    ) -> NotifyResult<Box<dyn MessageSender>> {
        Ok(match self {
            ProviderKind::Slack => Box::new(SlackSender::from_key_file(key_file, channel, options)?),
            ProviderKind::GoogleChat => {
                Box::new(GoogleChatSender::from_key_file(key_file, channel, options)?)
            }
        })
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slack" => Ok(ProviderKind::Slack),
            "google-chat" | "google_chat" | "googlechat" | "gchat" => Ok(ProviderKind::GoogleChat),
            other => Err(NotifyError::validation(
                "provider",
                format!(
                    "Unknown provider '{}'. Valid providers are: slack, google-chat",
                    other
                ),
            )),
        }
    }
}
