//! Runtime logger configuration
//!
//! Values here are already parsed; string handling lives in
//! [`parse_level`] and [`LogFormat::from_str`] so settings validation and
//! logger setup agree on what is accepted.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use super::error::LoggerError;

/// Accepted level names, lowest severity first
pub const LOG_LEVELS: [(&str, Level); 5] = [
    ("trace", Level::TRACE),
    ("debug", Level::DEBUG),
    ("info", Level::INFO),
    ("warn", Level::WARN),
    ("error", Level::ERROR),
];

/// Parse a level name, ignoring case
pub fn parse_level(name: &str) -> Result<Level, LoggerError> {
    LOG_LEVELS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
        .map(|(_, level)| *level)
        .ok_or_else(|| {
            let names: Vec<&str> = LOG_LEVELS.iter().map(|(n, _)| *n).collect();
            LoggerError::config(format!(
                "Invalid log level '{}'. Valid levels are: {}",
                name,
                names.join(", ")
            ))
        })
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    /// Most verbose level that is emitted
    pub level: Level,
}

impl LoggerConfig {
    /// Check that the outputs can be set up
    pub fn validate(&self) -> Result<(), LoggerError> {
        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            return Err(LoggerError::config(
                "File path cannot be empty when file output is enabled",
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(LoggerError::config(
                "At least one output (console or file) must be enabled",
            ));
        }

        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
            level: Level::INFO,
        }
    }
}

/// Console (stderr) output
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// ANSI colors; only honoured when stderr is a terminal
    pub colored: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// Log file output
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub enabled: bool,
    pub path: PathBuf,
    /// Keep existing contents instead of truncating on start
    pub append: bool,
    pub format: LogFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/notifiers.log"),
            append: true,
            format: LogFormat::Full,
        }
    }
}

/// Line format of the log file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl LogFormat {
    pub const ALL: [LogFormat; 3] = [LogFormat::Full, LogFormat::Compact, LogFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LoggerError::config(format!(
                    "Invalid log format '{}'. Valid formats are: full, compact, json",
                    s
                ))
            })
    }
}
