//! Service layer.
//!
//! Services wrap outbound integrations behind small traits so callers
//! and the CLI depend on behavior rather than providers.

pub mod notifications;
