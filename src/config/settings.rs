//! Configuration settings structures for notifiers
//!
//! This module defines the application settings that can be loaded from a
//! TOML file and environment variables. Webhook credentials live in separate
//! INI files, see [`crate::config::credentials`].

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig, LoggerError, parse_level};

// ============================================================================
// Default value functions
// ============================================================================

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/notifiers.log".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// HTTP Configuration
// ============================================================================

/// Outbound HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TCP/TLS connect timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Bound the connect timeout by the request timeout
    ///
    /// A short request timeout then needs no matching connect timeout.
    pub fn clamp_connect_timeout(&mut self) {
        self.connect_timeout_seconds = self.connect_timeout_seconds.min(self.timeout_seconds);
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Console output settings for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    ///
    /// This is also the validation path for the `[logger]` section.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let level = parse_level(&self.level).map_err(|e| logger_error("logger.level", e))?;

        let config = LoggerConfig {
            console: self.console.into_console_config(),
            file: self.file.into_file_config()?,
            level,
        };
        config.validate().map_err(|e| logger_error("logger", e))?;

        Ok(config)
    }
}

impl ConsoleSettings {
    /// Convert ConsoleSettings to ConsoleConfig
    pub fn into_console_config(self) -> ConsoleConfig {
        ConsoleConfig {
            enabled: self.enabled,
            colored: self.colored,
        }
    }
}

impl FileSettings {
    /// Convert FileSettings to FileConfig
    pub fn into_file_config(self) -> Result<FileConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| logger_error("logger.file.format", e))?;

        Ok(FileConfig {
            enabled: self.enabled,
            path: PathBuf::from(self.path.trim()),
            append: self.append,
            format,
        })
    }
}

fn logger_error(field: &str, error: LoggerError) -> ConfigError {
    let message = match error {
        LoggerError::Config { message } => message,
        other => other.to_string(),
    };
    ConfigError::ValidationError {
        field: field.to_string(),
        message,
    }
}

// ============================================================================
// Notify defaults
// ============================================================================

/// Defaults used by the `send` command when flags are omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifySettings {
    /// Provider name: "slack" or "google-chat"
    #[serde(default)]
    pub provider: Option<String>,

    /// Credentials file holding the `[channel]` table
    #[serde(default)]
    pub key_file: Option<PathBuf>,

    /// Channel key within the credentials file
    #[serde(default)]
    pub channel: Option<String>,
}

// ============================================================================
// Root settings
// ============================================================================

/// Root application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Outbound HTTP configuration
    #[serde(default)]
    pub http: HttpSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,

    /// Send defaults
    #[serde(default)]
    pub notify: NotifySettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.http.timeout(), Duration::from_secs(30));
        assert_eq!(settings.http.connect_timeout(), Duration::from_secs(10));
        assert_eq!(settings.logger.level, "info");
        assert!(settings.logger.console.enabled);
        assert!(!settings.logger.file.enabled);
        assert!(settings.notify.provider.is_none());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings: Settings = toml_from_str(
            r#"
[http]
timeout_seconds = 5

[notify]
provider = "slack"
key_file = "~/.slack"
channel = "alerts"
"#,
        );

        assert_eq!(settings.http.timeout_seconds, 5);
        assert_eq!(settings.http.connect_timeout_seconds, 10);
        assert_eq!(settings.notify.provider.as_deref(), Some("slack"));
        assert_eq!(settings.notify.key_file, Some(PathBuf::from("~/.slack")));
        assert_eq!(settings.notify.channel.as_deref(), Some("alerts"));
        assert_eq!(settings.logger, LoggerSettings::default());
    }

    #[test]
    fn test_into_logger_config() {
        let mut logger = LoggerSettings::default();
        logger.file.enabled = true;
        logger.file.format = "json".to_string();

        let config = logger.into_logger_config().unwrap();
        assert!(config.file.enabled);
        assert_eq!(config.file.format, LogFormat::Json);
        assert_eq!(config.file.path, PathBuf::from("logs/notifiers.log"));
    }

    #[test]
    fn test_into_logger_config_rejects_bad_format() {
        let mut logger = LoggerSettings::default();
        logger.file.format = "xml".to_string();

        match logger.into_logger_config() {
            Err(ConfigError::ValidationError { field, .. }) => {
                assert_eq!(field, "logger.file.format")
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    fn toml_from_str(source: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("Failed to deserialize settings")
    }

    proptest! {
        #[test]
        fn property_http_durations_match_seconds(timeout in 1u64..3600, connect in 1u64..600) {
            let http = HttpSettings { timeout_seconds: timeout, connect_timeout_seconds: connect };
            prop_assert_eq!(http.timeout().as_secs(), timeout);
            prop_assert_eq!(http.connect_timeout().as_secs(), connect);
        }

        #[test]
        fn property_clamped_settings_validate(timeout in 1u64..=300, connect in 1u64..600) {
            let mut http = HttpSettings { timeout_seconds: timeout, connect_timeout_seconds: connect };
            http.clamp_connect_timeout();
            prop_assert_eq!(http.connect_timeout_seconds, connect.min(timeout));
            prop_assert!(http.validate().is_ok());
        }
    }
}
