//! notifiers
//!
//! Post status messages to Slack or Google Chat through incoming webhooks.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod services;

pub use error::{NotifyError, NotifyResult};
pub use services::notifications::{
    Delivery, FailurePolicy, GoogleChatSender, LogSink, MessageSender, ProviderKind,
    SenderOptions, SlackSender, TracingSink,
};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
