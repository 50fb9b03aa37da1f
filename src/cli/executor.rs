//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{ChannelsCommandHandler, SendCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{NotifyError, NotifyResult};

/// Execute a CLI command with the given settings
///
/// Results go to stdout; diagnostics go through `tracing`.
///
/// # Errors
/// Returns errors from command handlers. A rejected message is only an
/// error when `--no-log` was given.
pub async fn execute_command(cli: &Cli, settings: Settings) -> NotifyResult<()> {
    match &cli.command {
        Commands::Send {
            message, no_log, ..
        } => {
            let delivery = SendCommandHandler::new(settings)
                .execute(message, *no_log)
                .await?;
            let line = serde_json::to_string(&delivery)
                .map_err(|e| NotifyError::from(anyhow::Error::new(e)))?;
            println!("{}", line);
            Ok(())
        }
        Commands::Channels { .. } => {
            for name in ChannelsCommandHandler::new(settings).execute()? {
                println!("{}", name);
            }
            Ok(())
        }
    }
}
