//! Channels command handler
//!
//! Lists the channel names defined in a credentials file.

use crate::config::ChannelRegistry;
use crate::config::settings::Settings;
use crate::error::{NotifyError, NotifyResult};

/// Handler for the channels command
pub struct ChannelsCommandHandler {
    config: Settings,
}

impl ChannelsCommandHandler {
    /// Create a new channels command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Load the credentials file and return its channel names, sorted
    pub fn execute(&self) -> NotifyResult<Vec<String>> {
        let key_file = self.config.notify.key_file.as_ref().ok_or_else(|| {
            NotifyError::validation(
                "key_file",
                "No key_file given; pass --key-file or set notify.key_file in the settings file",
            )
        })?;

        let registry = ChannelRegistry::load(key_file)?;
        Ok(registry.names().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lists_sorted_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[channel]\nzeta = z\nAlpha = a\nmid = m").unwrap();

        let mut settings = Settings::default();
        settings.notify.key_file = Some(file.path().to_path_buf());

        let names = ChannelsCommandHandler::new(settings).execute().unwrap();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_requires_key_file() {
        let result = ChannelsCommandHandler::new(Settings::default()).execute();
        assert!(matches!(result, Err(NotifyError::Validation { .. })));
    }
}
