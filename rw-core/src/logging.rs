//! Structured logging setup using the `tracing` ecosystem.
//!
//! The client itself only emits `tracing` events; applications that do not
//! install their own subscriber can use these helpers.

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{RwError, RwResult};

/// Initialize the global tracing subscriber from a logging configuration.
///
/// Always logs to stderr. When `config.directory` is set, also writes a
/// daily-rotated `relaywarden.log` there, as JSON if `config.json_output`.
///
/// Returns a guard that must be held for file output to be flushed.
pub fn init_logging(config: &LoggingConfig) -> RwResult<LogGuard> {
    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    if config.directory.is_empty() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()
            .map_err(|e| RwError::Config(format!("failed to install subscriber: {e}")))?;
        return Ok(LogGuard { _guard: None });
    }

    std::fs::create_dir_all(&config.directory)?;
    let file_appender = rolling::daily(&config.directory, "relaywarden.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = if config.json_output {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    };
    installed.map_err(|e| RwError::Config(format!("failed to install subscriber: {e}")))?;

    tracing::info!(
        "logging initialized at level={}, dir={}",
        config.level,
        config.directory
    );

    Ok(LogGuard {
        _guard: Some(guard),
    })
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize a minimal console-only logger for tests or scripts.
///
/// Subsequent calls are no-ops.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer().with_target(true).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logging_does_not_panic() {
        init_console_logging("debug");
        init_console_logging("not a level [");
    }
}
