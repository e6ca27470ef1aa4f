//! Log setup for the binary: stdout plus a daily-rolled file.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the caller.

use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::CardError;

/// File name prefix of log files.
pub const LOG_PREFIX: &str = "card_generator";

/// Keeps the file writer flushing; drop it only at exit.
#[allow(dead_code)]
pub struct LoggerGuard(WorkerGuard);

/// Map a configured level to a filter directive, falling back to `info`.
pub fn normalize_level(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Install stdout and file layers. `RUST_LOG` refines the default level.
pub fn init_logging(log_dir: impl AsRef<Path>, level: &str) -> Result<LoggerGuard, CardError> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;

    let directive = normalize_level(level)
        .parse()
        .map_err(|e| CardError::Config(format!("Invalid log level: {}", e)))?;
    let builder = EnvFilter::builder().with_default_directive(directive);
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();
    let console_filter = builder.clone().parse_lossy(&rust_log);
    let file_filter = builder.parse_lossy(&rust_log);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| CardError::Config(format!("Failed to create log file: {}", e)))?;
    let (non_blocking, guard) = NonBlocking::new(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(file_filter);
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| CardError::Config(format!("Logger already installed: {}", e)))?;

    if normalize_level(level) != level.to_ascii_lowercase() {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", level);
    }

    Ok(LoggerGuard(guard))
}
