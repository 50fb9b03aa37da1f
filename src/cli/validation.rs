//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

use crate::config::validation::MAX_TIMEOUT_SECONDS;
use crate::error::NotifyError;
use crate::services::notifications::ProviderKind;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_existing_file(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("File does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read file '{}': {}", path_str, e)),
    }
}

/// Validate request timeout is within 1..=MAX_TIMEOUT_SECONDS
pub fn validate_timeout(timeout_str: &str) -> Result<u64, String> {
    let timeout: u64 = timeout_str.parse().map_err(|_| {
        format!(
            "Timeout must be a whole number of seconds, got: '{}'",
            timeout_str
        )
    })?;

    if timeout == 0 || timeout > MAX_TIMEOUT_SECONDS {
        return Err(format!(
            "Timeout must be between 1 and {} seconds",
            MAX_TIMEOUT_SECONDS
        ));
    }

    Ok(timeout)
}

/// Validate provider name
pub fn validate_provider(provider_str: &str) -> Result<ProviderKind, String> {
    provider_str.parse::<ProviderKind>().map_err(|e| match e {
        NotifyError::Validation { reason, .. } => reason,
        other => other.to_string(),
    })
}
