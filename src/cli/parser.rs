//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::build;
use crate::services::notifications::ProviderKind;

/// Send status messages to Slack or Google Chat through webhooks
#[derive(Parser, Debug)]
#[command(name = "notifiers")]
#[command(about = "Send status messages to Slack or Google Chat through webhooks")]
#[command(long_about = "
notifiers posts a text message to a chat channel through the channel's
incoming webhook. Webhook paths are read from an INI credentials file whose
[channel] section maps channel names to webhook paths:

    [channel]
    alerts = T00000000/B00000000/XXXXXXXXXXXXXXXXXXXXXXXX

EXAMPLES:
    # Post to the 'alerts' channel of a Slack workspace
    notifiers send --provider slack --key-file ~/.slack_key --channel alerts \"Backup finished\"

    # Post to a Google Chat space and fail on a rejected message
    notifiers send -P google-chat -k ~/.gchat_key -c ops --no-log \"Deploy done\"

    # Use provider, key file and channel from a settings file
    notifiers --config /etc/notifiers.toml send \"Disk almost full\"

    # List channels defined in a credentials file
    notifiers channels --key-file ~/.slack_key
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path
    ///
    /// TOML file with [http], [logger] and [notify] sections.
    /// Defaults to $NOTIFIERS_CONFIG_FILE when not given.
    #[arg(long, value_name = "FILE", value_parser = super::validation::validate_existing_file)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Raises the log level to debug. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers the log level to error. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message
    ///
    /// Builds a sender for the selected provider and channel, posts the
    /// message once and exits non-zero on any error.
    Send {
        /// Chat provider: slack or google-chat
        ///
        /// Falls back to notify.provider from the settings file.
        #[arg(short = 'P', long, value_name = "PROVIDER", value_parser = super::validation::validate_provider)]
        provider: Option<ProviderKind>,

        /// Credentials file with a [channel] section
        ///
        /// Falls back to notify.key_file from the settings file.
        #[arg(short, long, value_name = "FILE")]
        key_file: Option<PathBuf>,

        /// Channel name within the credentials file
        ///
        /// Falls back to notify.channel from the settings file.
        #[arg(short, long, value_name = "NAME")]
        channel: Option<String>,

        /// Request timeout in seconds (1-300)
        #[arg(short, long, value_name = "SECONDS", value_parser = super::validation::validate_timeout)]
        timeout: Option<u64>,

        /// Fail instead of logging a warning when the webhook rejects the message
        #[arg(long)]
        no_log: bool,

        /// Message text
        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// List channel names in a credentials file
    ///
    /// Only names are printed; webhook paths are secrets.
    Channels {
        /// Credentials file with a [channel] section
        ///
        /// Falls back to notify.key_file from the settings file.
        #[arg(short, long, value_name = "FILE")]
        key_file: Option<PathBuf>,
    },
}

impl Cli {
    /// Log level implied by --verbose/--quiet, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
