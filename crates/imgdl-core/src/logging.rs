//! `tracing` setup for the `imgdl` binary.
//!
//! Events go to an append-only log file in the XDG state dir so they never
//! interleave with the per-image lines printed on stdout.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "imgdl.log";

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info,imgdl=debug,imgdl_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/imgdl/imgdl.log`, or the `XDG_STATE_HOME` equivalent.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgdl")?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating it and its parent directory as needed.
pub(crate) fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Route `tracing` events to the log file.
///
/// Returns Err if the file cannot be opened or a subscriber is already set;
/// callers then use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))?;

    tracing::info!("imgdl logging to {}", path.display());
    Ok(())
}

/// Route `tracing` events to stderr. A no-op if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
