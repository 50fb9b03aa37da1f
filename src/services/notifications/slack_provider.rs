//! Slack incoming-webhook sender.
//!
//! Posts `{"text": "<message>"}` to `https://hooks.slack.com/services/<path>`.
//! Slack answers 200 with body `ok` on success.

use std::path::Path;

use super::endpoint::{ProviderSpec, WebhookEndpoint};
use super::options::SenderOptions;
use super::sender::{Delivery, MessageSender};
use crate::error::NotifyResult;
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;

/// Slack webhook API description
pub const SLACK: ProviderSpec = ProviderSpec {
    id: "slack",
    display_name: "Slack",
    base_url: "https://hooks.slack.com/services/",
    content_type: "application/json",
    ok_status: 200,
};

/// Sends messages to a Slack channel through an incoming webhook
///
/// # Example
/// ```ignore
/// // ~/.slack_key:
/// // [channel]
/// // alerts = T00000000/B00000000/XXXXXXXXXXXXXXXXXXXXXXXX
/// let sender = SlackSender::from_key_file("~/.slack_key", "alerts", SenderOptions::default())?;
/// sender.send("Backup finished").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SlackSender {
    endpoint: WebhookEndpoint,
}

impl SlackSender {
    /// Creates a sender for `channel` as listed in `key_file`
    pub fn from_key_file(
        key_file: impl AsRef<Path>,
        channel: &str,
        options: SenderOptions,
    ) -> NotifyResult<Self> {
        Ok(Self {
            endpoint: WebhookEndpoint::from_key_file(SLACK, key_file, channel, options)?,
        })
    }

    /// Creates a sender for a complete webhook URL
    pub fn new(webhook_url: Url, options: SenderOptions) -> NotifyResult<Self> {
        Ok(Self {
            endpoint: WebhookEndpoint::new(SLACK, webhook_url, options)?,
        })
    }

    fn build_message(message: &str) -> SlackMessage<'_> {
        SlackMessage { text: message }
    }
}

#[async_trait]
impl MessageSender for SlackSender {
    async fn send(&self, message: &str) -> NotifyResult<Delivery> {
        self.endpoint
            .post(&Self::build_message(message), message)
            .await
    }

    fn name(&self) -> &'static str {
        SLACK.id
    }

    fn endpoint(&self) -> &Url {
        self.endpoint.url()
    }
}

/// Slack message payload.
#[derive(Debug, Serialize)]
struct SlackMessage<'a> {
    text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::NotifyError;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn key_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_build_message() {
        let body = serde_json::to_value(SlackSender::build_message("Backup finished")).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "Backup finished" }));
    }

    #[test]
    fn test_from_key_file_resolves_channel() {
        let file = key_file("[channel]\nalerts = T000/B000/XXXX\n");
        let sender =
            SlackSender::from_key_file(file.path(), "alerts", SenderOptions::default()).unwrap();

        assert_eq!(sender.name(), "slack");
        assert_eq!(
            sender.endpoint().as_str(),
            "https://hooks.slack.com/services/T000/B000/XXXX"
        );
    }

    #[test]
    fn test_missing_key_file() {
        let result = SlackSender::from_key_file(
            "/nonexistent/slack.key",
            "alerts",
            SenderOptions::default(),
        );
        assert!(matches!(
            result,
            Err(NotifyError::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_unknown_channel() {
        let file = key_file("[channel]\nalerts = T000/B000/XXXX\n");
        let result = SlackSender::from_key_file(file.path(), "random", SenderOptions::default());
        assert!(matches!(
            result,
            Err(NotifyError::Config(ConfigError::ChannelNotFound { .. }))
        ));
    }

    #[test]
    fn test_base_url_override() {
        let file = key_file("[channel]\nalerts = T000/B000/XXXX\n");
        let options = SenderOptions::default()
            .with_base_url(Url::parse("https://slack-proxy.internal/services/").unwrap());

        let sender = SlackSender::from_key_file(file.path(), "alerts", options).unwrap();
        assert_eq!(
            sender.endpoint().as_str(),
            "https://slack-proxy.internal/services/T000/B000/XXXX"
        );
    }

    proptest! {
        #[test]
        fn property_message_round_trips_through_json(message in any::<String>()) {
            let encoded = serde_json::to_vec(&SlackSender::build_message(&message)).unwrap();
            let decoded: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
            prop_assert_eq!(decoded["text"].as_str(), Some(message.as_str()));
            prop_assert_eq!(decoded.as_object().map(|o| o.len()), Some(1));
        }

        #[test]
        fn property_quotes_and_backslashes_are_escaped(parts in proptest::collection::vec("[a-z\"\\\\]{0,8}", 1..6)) {
            let message = parts.join("\n");
            let encoded = serde_json::to_string(&SlackSender::build_message(&message)).unwrap();
            let has_text_prefix = encoded.starts_with(r#"{"text":""#);
            prop_assert!(has_text_prefix, "unexpected prefix: {}", encoded);
            prop_assert!(!encoded.contains('\n'), "raw newline in: {}", encoded);
            let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
            prop_assert_eq!(decoded["text"].as_str(), Some(message.as_str()));
        }
    }
}
