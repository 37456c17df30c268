//! Structured logging to a file.
//!
//! The dashboard owns the terminal, so log events go to
//! `<data dir>/qdash/qdash.log` (or `$QDASH_LOG_DIR/qdash.log`) as JSON lines.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{Error, Result};

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "QDASH_LOG_DIR";

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "qdash.log";

/// Directory log files are written to.
pub fn default_log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("qdash")
}

/// Build the filter for a directive such as `info` or `qdash=debug`.
pub fn build_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| Error::Config(format!("Invalid log filter '{}': {}", directive, e)))
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered events on drop; keep it alive for the
/// life of the process.
pub fn init_logging(directive: &str, log_dir: &Path) -> Result<WorkerGuard> {
    let filter = build_filter(directive)?;
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|e| Error::Other(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
