//! Configuration error types

use thiserror::Error;

/// Errors raised while loading credentials files or application settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Credentials or settings file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Credentials file has no section with the expected name
    #[error("Section [{section}] not found in {path}")]
    MissingSection { path: String, section: String },

    /// Channel key absent from the `[channel]` section
    #[error("Channel '{channel}' not found in {path}")]
    ChannelNotFound { channel: String, path: String },

    /// Resolved webhook URL is not a valid URL
    #[error("Invalid webhook URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Validation error with field and message
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// The validation error message
        message: String,
    },

    /// Generic configuration error from config crate
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    /// Create a new channel not found error
    pub fn channel_not_found(channel: impl Into<String>, path: impl Into<String>) -> Self {
        ConfigError::ChannelNotFound {
            channel: channel.into(),
            path: path.into(),
        }
    }
}
