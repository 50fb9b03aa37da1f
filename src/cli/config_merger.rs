//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use std::path::PathBuf;

/// Applies CLI overrides on top of loaded settings
///
/// CLI arguments have the highest priority, followed by environment
/// variables, the settings file and built-in defaults.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration from `config_path`, or from
    /// `NOTIFIERS_CONFIG_FILE` when no path is given
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_config_path(config_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let loader = match config_path {
            Some(path) => ConfigLoader::with_file(path),
            None => ConfigLoader::new(),
        };

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(level) = cli.log_level_override() {
            config.logger.level = level.to_string();
        }

        self.apply_command_overrides(&mut config, &cli.command);

        config.validate()?;

        Ok(config)
    }

    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Send {
                provider,
                key_file,
                channel,
                timeout,
                ..
            } => {
                if let Some(provider) = provider {
                    config.notify.provider = Some(provider.to_string());
                }
                if let Some(key_file) = key_file {
                    config.notify.key_file = Some(key_file.clone());
                }
                if let Some(channel) = channel {
                    config.notify.channel = Some(channel.clone());
                }
                if let Some(timeout) = timeout {
                    config.http.timeout_seconds = *timeout;
                    config.http.clamp_connect_timeout();
                }
            }
            Commands::Channels { key_file } => {
                if let Some(key_file) = key_file {
                    config.notify.key_file = Some(key_file.clone());
                }
            }
        }
    }
}
