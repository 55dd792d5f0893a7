//! File logging
//!
//! The terminal belongs to the dashboard, so diagnostics go to a log file.
//! `ADLENS_LOG` takes an `EnvFilter` directive string; otherwise the level
//! passed in (flag or config) applies, defaulting to WARN.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "ADLENS_LOG";

/// Log file name inside the default log directory
pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLevel(String),
    #[error("Logger already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Default log location: the user cache directory, else the temp directory
#[must_use]
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("adlens")
        .join(LOG_FILE)
}

/// Parse a level name such as `info` or `DEBUG`
///
/// # Errors
///
/// Returns `LogError::InvalidLevel` if the name is not a tracing level.
pub fn parse_level(name: &str) -> Result<Level, LogError> {
    name.trim()
        .parse::<Level>()
        .map_err(|_| LogError::InvalidLevel(name.to_string()))
}

/// Install the global subscriber writing to `path` (or the default location)
///
/// # Errors
///
/// Returns `LogError` if the log file cannot be opened or a global
/// subscriber is already set.
pub fn init(path: Option<PathBuf>, level: Option<Level>) -> Result<PathBuf, LogError> {
    let log_path = path.unwrap_or_else(default_log_path);
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|source| LogError::Open {
            path: log_path.clone(),
            source,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|source| LogError::Open {
            path: log_path.clone(),
            source,
        })?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.unwrap_or(Level::WARN)).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(file_layer).try_init()?;

    tracing::debug!(path = %log_path.display(), "logging initialized");
    Ok(log_path)
}
