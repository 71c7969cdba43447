pub mod config;
pub mod error;

pub use config::{Config, TemperatureUnit, UiConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError, WeatherError};

use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize tracing/logging to stderr.
///
/// Used by the one-shot command line mode where the terminal is not
/// owned by the widget.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Skyglass core initialized");
    Ok(())
}

/// Initialize tracing/logging to `<dir>/skyglass.log`.
///
/// The interactive widget draws on the alternate screen, so anything
/// written to stdout/stderr would corrupt the frame. The returned guard
/// must be kept alive until shutdown so buffered lines get flushed.
pub fn init_file_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, "skyglass.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!("Skyglass core initialized (logging to {})", dir.display());
    Ok(guard)
}

/// Sink logging for the interactive widget when file logging is disabled.
pub fn init_silent() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("off"))
        .try_init();
}
