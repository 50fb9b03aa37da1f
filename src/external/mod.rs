//! Outbound HTTP plumbing shared by all webhook senders

pub mod client;

pub use client::{HTTP_CLIENT, build_http_client};
