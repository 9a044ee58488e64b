//! File-backed tracing. The terminal belongs to the UI, so log output never
//! goes to stdout or stderr while the gallery is mounted.

use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log file: `<cache dir>/folio/folio.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("folio").join("folio.log")
}

/// Log file for `config`, falling back to [`default_log_path`].
pub fn log_path(config: &LoggingConfig) -> PathBuf {
    config.file.clone().unwrap_or_else(default_log_path)
}

/// Install the global subscriber. `RUST_LOG` overrides `config.level`.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<PathBuf> {
    let path = log_path(config);
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}

fn open_log_file(path: &Path) -> anyhow::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))
}
