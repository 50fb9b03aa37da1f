use std::sync::LazyLock;

use crate::config::HttpSettings;
use crate::error::{NotifyError, NotifyResult};

/// User-Agent sent with every webhook request
pub const USER_AGENT: &str = concat!("notifiers/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client built from default [`HttpSettings`]
///
/// Senders clone it unless [`crate::services::notifications::SenderOptions`]
/// supplies a client of their own; clones share one connection pool.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_http_client(&HttpSettings::default()).unwrap_or_else(|_| reqwest::Client::new())
});

/// Build an HTTP client for webhook delivery
///
/// # Features
/// - **Timeouts**: request and connect timeouts from `settings`
/// - **Connection pooling**: idle connections are kept for 90s
/// - **Compression**: gzip, deflate, brotli and zstd responses
/// - **Redirects**: never followed; a webhook that redirects is misconfigured
pub fn build_http_client(settings: &HttpSettings) -> NotifyResult<reqwest::Client> {
    reqwest::Client::builder()
        // Timeouts
        .timeout(settings.timeout())
        .connect_timeout(settings.connect_timeout())
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        // Enable compression (gzip, deflate, brotli, zstd)
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .zstd(true)
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| NotifyError::Internal {
            source: anyhow::Error::new(e).context("Failed to build HTTP client"),
        })
}
