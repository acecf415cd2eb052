//! Tracing setup.
//!
//! The TUI owns stdout/stderr while it runs, so interactive sessions log to a
//! file, or nowhere when `logging.enabled = false`. Headless runs (`--once`)
//! log to stderr. An unwritable log file leaves logging off rather than
//! stopping the app.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Disabled,
}

impl LogTarget {
    /// Interactive target: the configured file, the default cache location,
    /// or nothing when logging is turned off.
    pub fn from_config(config: &LoggingConfig) -> Self {
        if !config.enabled {
            return LogTarget::Disabled;
        }
        match &config.file {
            Some(path) => LogTarget::File(expand_tilde(Path::new(path))),
            None => LogTarget::File(default_log_path()),
        }
    }
}

/// `~/.cache/catfact/catfact.log` or the platform equivalent.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("catfact")
        .join("catfact.log")
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn init_tracing(config: &LoggingConfig, target: LogTarget) -> anyhow::Result<()> {
    let file = match &target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => None,
        LogTarget::File(path) => match open_log_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("catfact: logging disabled, cannot open {}: {e}", path.display());
                return Ok(());
            }
        },
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    let result = match file {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
