//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output (stderr) with color control
//! - File output with multiple formats (Full, Compact, JSON)

pub mod config;
pub mod error;
pub(crate) mod writer;


// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter::LevelFilter, fmt, layer::SubscriberExt,
    util::SubscriberInitExt,
};
use writer::LogFileWriter;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the global subscriber with the given configuration
///
/// `RUST_LOG` is not consulted; everything at `config.level` or more severe
/// is emitted.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .parse_lossy("");

    tracing_subscriber::registry()
        .with(build_layers(&config)?)
        .with(filter)
        .try_init()
        .map_err(|e| LoggerError::init(e.to_string()))
}

/// Build output layers, file first
///
/// The file layer must come BEFORE the console layer, otherwise ANSI codes
/// from span field formatting leak into the file.
/// See: https://github.com/tokio-rs/tracing/issues/1817
fn build_layers(config: &LoggerConfig) -> Result<Vec<BoxedLayer>, LoggerError> {
    let mut layers = Vec::new();

    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }

    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    Ok(layers)
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stderr().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .boxed()
}

fn file_layer(config: &FileConfig) -> Result<BoxedLayer, LoggerError> {
    let writer = LogFileWriter::new(config)?;
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    Ok(match config.format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    })
}
