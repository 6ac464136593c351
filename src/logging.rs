//! File logging.
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `<data_dir>/stride/stride.log`. The filter comes from `STRIDE_LOG`
//! (e.g. `STRIDE_LOG=stride=debug`), defaulting to `stride=info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{classify_io_error, StrideResult, SystemError};

pub const LOG_ENV: &str = "STRIDE_LOG";
pub const DEFAULT_FILTER: &str = "stride=info";

/// `<data_dir>/stride/stride.log`
pub fn default_log_path() -> StrideResult<PathBuf> {
    let dir = dirs::data_dir().ok_or(SystemError::NoDataDirectory)?;
    Ok(dir.join("stride").join("stride.log"))
}

/// Filter from `STRIDE_LOG`, or the default when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber appending to `path`.
///
/// Does nothing if a subscriber is already installed.
pub fn init_at(path: &Path) -> StrideResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| classify_io_error(e, Some(parent.to_path_buf()), "create log directory"))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "open log file"))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!("stride {} starting", crate::cli::VERSION);
    }
    Ok(())
}

/// Install the global subscriber at the default log path.
pub fn init() -> StrideResult<()> {
    init_at(&default_log_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stride.log");
        init_at(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
