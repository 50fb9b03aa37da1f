//! Configuration loader for notifiers
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! settings from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for specific configuration file
pub const CONFIG_FILE_ENV: &str = "NOTIFIERS_CONFIG_FILE";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "NOTIFIERS";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources, lowest priority first:
/// 1. Built-in defaults
/// 2. The TOML settings file, when one is given
/// 3. `NOTIFIERS_*` environment variables
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Settings file path
    config_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that reads `NOTIFIERS_CONFIG_FILE` for the settings file
    pub fn new() -> Self {
        Self {
            config_file: std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    /// Create a loader for an explicit settings file
    ///
    /// An explicit file takes precedence over `NOTIFIERS_CONFIG_FILE`.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
        }
    }

    /// The settings file this loader will read, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the settings file is set but does not exist
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let mut settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.http.clamp_connect_timeout();
        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref config_file) = self.config_file {
            if !config_file.is_file() {
                return Err(ConfigError::file_not_found(
                    config_file.display().to_string(),
                ));
            }
            builder = builder.add_source(File::from(config_file.as_path()).format(FileFormat::Toml));
        }

        // NOTIFIERS_HTTP__TIMEOUT_SECONDS -> http.timeout_seconds
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Mutex, PoisonError};
    use tempfile::TempDir;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// RAII guard restoring environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    fn write_settings(contents: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("notifiers.toml");
        fs::write(&path, contents).expect("Failed to write settings");
        (temp_dir, path)
    }

    #[test]
    fn test_load_defaults_without_file() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let mut env = EnvGuard::new();
        env.remove(CONFIG_FILE_ENV);
        env.remove("NOTIFIERS_HTTP__TIMEOUT_SECONDS");

        let loader = ConfigLoader::new();
        assert!(loader.config_file().is_none());

        let settings = loader.load().expect("Should load defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_config_file_from_env() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let mut env = EnvGuard::new();
        env.set(CONFIG_FILE_ENV, "/etc/notifiers.toml");

        let loader = ConfigLoader::new();
        assert_eq!(loader.config_file(), Some(Path::new("/etc/notifiers.toml")));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let mut env = EnvGuard::new();
        env.remove("NOTIFIERS_HTTP__TIMEOUT_SECONDS");

        let (_dir, path) = write_settings(
            r#"
[http]
timeout_seconds = 12

[logger]
level = "debug"

[notify]
provider = "google-chat"
channel = "ops"
"#,
        );

        let settings = ConfigLoader::with_file(&path).load().expect("Should load");
        assert_eq!(settings.http.timeout_seconds, 12);
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.notify.provider.as_deref(), Some("google-chat"));
        assert_eq!(settings.notify.channel.as_deref(), Some("ops"));
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let mut env = EnvGuard::new();

        let (_dir, path) = write_settings("[http]\ntimeout_seconds = 12\n");
        env.set("NOTIFIERS_HTTP__TIMEOUT_SECONDS", "7");

        let settings = ConfigLoader::with_file(&path).load().expect("Should load");
        assert_eq!(settings.http.timeout_seconds, 7);
    }

    #[test]
    fn test_short_timeout_from_file() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let mut env = EnvGuard::new();
        env.remove("NOTIFIERS_HTTP__TIMEOUT_SECONDS");
        env.remove("NOTIFIERS_HTTP__CONNECT_TIMEOUT_SECONDS");

        let (_dir, path) = write_settings("[http]\ntimeout_seconds = 5\n");

        let settings = ConfigLoader::with_file(&path).load().expect("Should load");
        assert_eq!(settings.http.timeout_seconds, 5);
        assert_eq!(settings.http.connect_timeout_seconds, 5);
    }

    #[test]
    fn test_explicit_connect_timeout_is_bounded() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let mut env = EnvGuard::new();
        env.remove("NOTIFIERS_HTTP__TIMEOUT_SECONDS");
        env.remove("NOTIFIERS_HTTP__CONNECT_TIMEOUT_SECONDS");

        let (_dir, path) =
            write_settings("[http]\ntimeout_seconds = 20\nconnect_timeout_seconds = 3\n");
        let settings = ConfigLoader::with_file(&path).load().expect("Should load");
        assert_eq!(settings.http.connect_timeout_seconds, 3);

        env.set("NOTIFIERS_HTTP__TIMEOUT_SECONDS", "2");
        let settings = ConfigLoader::with_file(&path).load().expect("Should load");
        assert_eq!(settings.http.timeout_seconds, 2);
        assert_eq!(settings.http.connect_timeout_seconds, 2);
    }

    #[test]
    fn test_missing_file() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);

        let result = ConfigLoader::with_file("/no/such/notifiers.toml").load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _guard = TEST_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let mut env = EnvGuard::new();
        env.remove("NOTIFIERS_HTTP__TIMEOUT_SECONDS");

        let (_dir, path) = write_settings("[http]\ntimeout_seconds = 0\n");

        let result = ConfigLoader::with_file(&path).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
