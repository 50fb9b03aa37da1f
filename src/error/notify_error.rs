use crate::config::ConfigError;
use thiserror::Error;

/// Crate-wide error type returned by sender construction and `send`.
///
/// Construction problems arrive as [`NotifyError::Config`]; everything a
/// single `send` can go wrong with is either a non-OK HTTP status
/// ([`NotifyError::Delivery`]) or a transport failure ([`NotifyError::Network`]).
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Credentials or settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The provider answered with a status other than its OK code
    #[error("Sending to {provider} failed (HTTP {status}). Message: {message}")]
    Delivery {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// The request never produced a response (connection refused, timeout, TLS)
    #[error("Network error while sending to {provider}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl NotifyError {
    /// Shorthand for a [`NotifyError::Validation`]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        NotifyError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status carried by a delivery failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            NotifyError::Delivery { status, .. } => Some(*status),
            NotifyError::Network { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request timed out before a response arrived
    pub fn is_timeout(&self) -> bool {
        matches!(self, NotifyError::Network { source, .. } if source.is_timeout())
    }
}

impl From<anyhow::Error> for NotifyError {
    fn from(error: anyhow::Error) -> Self {
        NotifyError::Internal { source: error }
    }
}

/// Type alias for Result with NotifyError to simplify function signatures
pub type NotifyResult<T> = Result<T, NotifyError>;
