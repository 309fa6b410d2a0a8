use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "quickpick=info";

pub fn default_log_path() -> Option<PathBuf> {
    crate::app::config::config_dir().map(|dir| dir.join("quickpick.log"))
}

/// Builds the filter: `RUST_LOG` first, then the configured directive, then
/// [`DEFAULT_FILTER`].
pub fn env_filter(configured: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER))
        .with_context(|| format!("Invalid log filter {configured:?}"))
}

/// Appends log lines to `path`; the terminal itself belongs to the UI.
pub fn init(path: &Path, configured: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(configured)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install the log subscriber: {err}"))
}
