//! Webhook credentials files
//!
//! A credentials file is an INI document whose `[channel]` section maps
//! channel names to webhook path fragments (or complete webhook URLs):
//!
//! ```ini
//! [channel]
//! alerts = T00000000/B00000000/XXXXXXXXXXXXXXXXXXXXXXXX
//! builds = https://hooks.example.com/services/builds
//! ```
//!
//! Channel names are folded to lowercase when the file is read, so lookups
//! are case-insensitive. `%` has no special meaning in values. Surrounding
//! double quotes are stripped and backslash escapes such as `\t` are
//! expanded by the INI parser before a value reaches the registry.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat, Value};

use crate::config::error::ConfigError;

/// Name of the section holding the channel table
pub const CHANNEL_SECTION: &str = "channel";

/// Channel name → webhook path table loaded from a credentials file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRegistry {
    source: PathBuf,
    channels: BTreeMap<String, String>,
}

impl ChannelRegistry {
    /// Load the registry from an INI credentials file
    ///
    /// A leading `~` in `path` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FileNotFound`] if the file does not exist
    /// - [`ConfigError::MissingSection`] if there is no `[channel]` section
    /// - [`ConfigError::Other`] if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = expand_home(path.as_ref());

        if !path.is_file() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        let config = Config::builder()
            .add_source(File::from(path.as_path()).format(FileFormat::Ini))
            .build()?;

        Self::from_config(config, path)
    }

    /// Parse a registry from INI text
    ///
    /// `source` is only used in error messages.
    pub fn parse(contents: &str, source: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Ini))
            .build()?;

        Self::from_config(config, source.into())
    }

    fn from_config(config: Config, source: PathBuf) -> Result<Self, ConfigError> {
        let sections: HashMap<String, Value> = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", source.display(), e)))?;

        let table = sections
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(CHANNEL_SECTION))
            .map(|(_, value)| value)
            .ok_or_else(|| ConfigError::MissingSection {
                path: source.display().to_string(),
                section: CHANNEL_SECTION.to_string(),
            })?
            .into_table()?;

        let mut channels = BTreeMap::new();
        for (name, value) in table {
            let value = value.into_string()?;
            channels.insert(name.to_lowercase(), value.trim().to_string());
        }

        Ok(Self { source, channels })
    }

    /// Webhook path for `channel`, if present
    pub fn get(&self, channel: &str) -> Option<&str> {
        self.channels
            .get(&channel.to_lowercase())
            .map(String::as_str)
    }

    /// Webhook path for `channel`, or [`ConfigError::ChannelNotFound`]
    pub fn resolve(&self, channel: &str) -> Result<&str, ConfigError> {
        self.get(channel).ok_or_else(|| {
            ConfigError::channel_not_found(channel, self.source.display().to_string())
        })
    }

    /// Channel names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Path the registry was read from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Expand a leading `~` to the current user's home directory
///
/// Paths without a leading `~` (and `~user` forms) are returned unchanged, as
/// is everything when no home directory can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_key_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write key file");
        file
    }

    #[test]
    fn test_load_channels() {
        let file = write_key_file(
            "[channel]\nalerts = T000/B000/XXXX\nbuilds = https://hooks.example.com/b\n",
        );

        let registry = ChannelRegistry::load(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("alerts"), Some("T000/B000/XXXX"));
        assert_eq!(registry.get("builds"), Some("https://hooks.example.com/b"));
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["alerts", "builds"]);
        assert_eq!(registry.source(), file.path());
    }

    #[test]
    fn test_missing_file() {
        let result = ChannelRegistry::load("/definitely/not/here/slack.key");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_directory_is_not_a_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ChannelRegistry::load(dir.path());
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_missing_section() {
        let file = write_key_file("[other]\nalerts = abc\n");
        let result = ChannelRegistry::load(file.path());
        assert!(matches!(result, Err(ConfigError::MissingSection { .. })));
    }

    #[test]
    fn test_unknown_channel() {
        let registry = ChannelRegistry::parse("[channel]\nalerts = abc\n", "inline").unwrap();
        match registry.resolve("random") {
            Err(ConfigError::ChannelNotFound { channel, path }) => {
                assert_eq!(channel, "random");
                assert_eq!(path, "inline");
            }
            other => panic!("Expected ChannelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = ChannelRegistry::parse("[channel]\nAlerts = abc\n", "inline").unwrap();
        assert_eq!(registry.resolve("alerts").unwrap(), "abc");
        assert_eq!(registry.resolve("ALERTS").unwrap(), "abc");
    }

    #[test]
    fn test_percent_is_not_interpolated() {
        let registry = ChannelRegistry::parse(
            "[channel]\nspace = AAAA/messages?key=k%3D&token=t%(x)s\n",
            "inline",
        )
        .unwrap();
        assert_eq!(
            registry.get("space"),
            Some("AAAA/messages?key=k%3D&token=t%(x)s")
        );
    }

    #[test]
    fn test_quotes_and_escapes_are_unwrapped() {
        let registry = ChannelRegistry::parse(
            "[channel]\nquoted = \"T0/B0/X\"\nescaped = a\\tb\n",
            "inline",
        )
        .unwrap();
        assert_eq!(registry.get("quoted"), Some("T0/B0/X"));
        assert_eq!(registry.get("escaped"), Some("a\tb"));
    }

    #[test]
    fn test_expand_home() {
        let plain = Path::new("/etc/slack.key");
        assert_eq!(expand_home(plain), PathBuf::from("/etc/slack.key"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/.slack")), home.join(".slack"));
            assert_eq!(expand_home(Path::new("~")), home);
        }
    }
}
