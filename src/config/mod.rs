//! Configuration management module for notifiers
//!
//! Two kinds of configuration are handled here:
//! - Webhook credentials: INI files with a `[channel]` table, read once when a
//!   sender is constructed ([`ChannelRegistry`])
//! - Application settings: HTTP timeouts, logging and `send` defaults, layered
//!   from built-in defaults, an optional TOML file and `NOTIFIERS_*`
//!   environment variables ([`ConfigLoader`])

pub mod credentials;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use credentials::{CHANNEL_SECTION, ChannelRegistry, expand_home};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpSettings, LoggerSettings, NotifySettings, Settings};
