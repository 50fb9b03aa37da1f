//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{HttpSettings, LoggerSettings, NotifySettings, Settings};
use crate::services::notifications::ProviderKind;

/// Upper bound for any configured timeout, in seconds
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

impl HttpSettings {
    /// Validate HTTP configuration
    ///
    /// # Validation Rules
    /// - Timeouts must be between 1 and `MAX_TIMEOUT_SECONDS`
    /// - Connect timeout must not exceed the request timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(ConfigError::ValidationError {
                field: "http.timeout_seconds".to_string(),
                message: format!(
                    "Request timeout must be between 1 and {} seconds.",
                    MAX_TIMEOUT_SECONDS
                ),
            });
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout cannot exceed the request timeout.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - File format must be one of full, compact, json
    /// - File path must not be empty when file output is enabled
    /// - At least one output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clone().into_logger_config().map(|_| ())
    }
}

impl NotifySettings {
    /// Validate send defaults
    ///
    /// Only values that are present are checked; every field is optional.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(provider) = &self.provider {
            provider
                .parse::<ProviderKind>()
                .map_err(|e| ConfigError::ValidationError {
                    field: "notify.provider".to_string(),
                    message: e.to_string(),
                })?;
        }

        if let Some(channel) = &self.channel
            && channel.trim().is_empty()
        {
            return Err(ConfigError::validation(
                "notify.channel",
                "Channel cannot be empty.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.logger.validate()?;
        self.notify.validate()?;
        Ok(())
    }
}
