//! Chat notifications with pluggable providers.
//!
//! The core trait [`MessageSender`] lets callers send a text message without
//! knowing which platform receives it. Each provider resolves its webhook URL
//! from a credentials file once, at construction, and then performs exactly
//! one HTTP POST per `send`. What happens on a non-OK response is decided by
//! the caller through [`FailurePolicy`].

mod endpoint;
mod google_chat_provider;
mod options;
mod policy;
mod provider_kind;
mod sender;
mod slack_provider;


pub use endpoint::{ProviderSpec, WebhookEndpoint, resolve_url};
pub use google_chat_provider::{GOOGLE_CHAT, GoogleChatSender};
pub use options::SenderOptions;
pub use policy::{FailurePolicy, LogSink, TracingSink};
pub use provider_kind::ProviderKind;
pub use sender::{Delivery, MessageSender};
pub use slack_provider::{SLACK, SlackSender};
