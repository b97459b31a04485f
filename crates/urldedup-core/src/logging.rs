//! Tracing setup. Logs go to a file under the XDG state dir so stdout stays
//! reserved for URL output; stderr is the fallback.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILE_FILTER: &str = "info,urldedup=debug";
const DEFAULT_STDERR_FILTER: &str = "warn";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `~/.local/state/urldedup/urldedup.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldedup")?;
    Ok(xdg_dirs.get_state_home().join("urldedup.log"))
}

/// Installs a subscriber appending to [`log_file_path`].
///
/// Errors when the file cannot be opened or a subscriber is already set;
/// callers then use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(DEFAULT_FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    tracing::info!("urldedup logging initialized at {}", path.display());
    Ok(())
}

/// Stderr-only logging, `warn` by default so piped output stays clean.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(DEFAULT_STDERR_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
