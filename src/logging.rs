//! File logging.
//!
//! The terminal belongs to the UI, so events go to a file in the log
//! directory through a non-blocking writer.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;

use crate::error::ConfigError;

pub const LOG_FILE_NAME: &str = "genericdev-hub.log";

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub level: LevelFilter,
}

/// Per-user data directory, e.g. `~/.local/share/genericdev-hub/logs`
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("genericdev-hub").join("logs"))
}

/// Parse one of trace, debug, info, warn, error (any case)
pub fn parse_log_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(raw.to_string())),
    }
}

/// Path of the log file inside `dir`
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

/// Install the global subscriber. Keep the returned guard alive until
/// exit; dropping it flushes buffered lines.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.dir)?;

    let file_appender = tracing_appender::rolling::never(&config.dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.level)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}
