//! Google Chat incoming-webhook sender.
//!
//! Google Chat webhook URLs look like
//! `https://chat.googleapis.com/v1/spaces/<SPACE>/messages?key=<KEY>&token=<TOKEN>`;
//! the credentials file stores everything after `spaces/`.

use std::path::Path;

use super::endpoint::{ProviderSpec, WebhookEndpoint};
use super::options::SenderOptions;
use super::sender::{Delivery, MessageSender};
use crate::error::NotifyResult;
use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;

/// Google Chat webhook API description
pub const GOOGLE_CHAT: ProviderSpec = ProviderSpec {
    id: "google_chat",
    display_name: "Google Chat",
    base_url: "https://chat.googleapis.com/v1/spaces/",
    content_type: "application/json; charset=UTF-8",
    ok_status: 200,
};

/// Sends messages to a Google Chat space through an incoming webhook
#[derive(Debug, Clone)]
pub struct GoogleChatSender {
    endpoint: WebhookEndpoint,
}

impl GoogleChatSender {
    /// Creates a sender for `channel` as listed in `key_file`
    pub fn from_key_file(
        key_file: impl AsRef<Path>,
        channel: &str,
        options: SenderOptions,
    ) -> NotifyResult<Self> {
        Ok(Self {
            endpoint: WebhookEndpoint::from_key_file(GOOGLE_CHAT, key_file, channel, options)?,
        })
    }

    /// Creates a sender for a complete webhook URL
    pub fn new(webhook_url: Url, options: SenderOptions) -> NotifyResult<Self> {
        Ok(Self {
            endpoint: WebhookEndpoint::new(GOOGLE_CHAT, webhook_url, options)?,
        })
    }

    fn build_message(message: &str) -> GoogleChatMessage<'_> {
        GoogleChatMessage { text: message }
    }
}

#[async_trait]
impl MessageSender for GoogleChatSender {
    async fn send(&self, message: &str) -> NotifyResult<Delivery> {
        self.endpoint
            .post(&Self::build_message(message), message)
            .await
    }

    fn name(&self) -> &'static str {
        GOOGLE_CHAT.id
    }

    fn endpoint(&self) -> &Url {
        self.endpoint.url()
    }
}

/// Google Chat simple text message.
#[derive(Debug, Serialize)]
struct GoogleChatMessage<'a> {
    text: &'a str,
}
