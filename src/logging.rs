//! Debug log sink.
//!
//! The terminal belongs to the TUI, so logs only ever go to a file, and
//! only when a path is configured. `RUST_LOG` overrides the level.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{Error, Result};

/// Create (or truncate) the log file, creating parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
    let to_error = |e: std::io::Error| Error::Log {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(to_error)
}

/// Install the global subscriber writing to `path`.
///
/// Without a path nothing is installed and events are discarded. The
/// returned guard must live until exit so buffered lines are flushed.
pub fn init(path: Option<&Path>, verbose: bool) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let file = open_log_file(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("debug.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        fs::write(&path, "stale").unwrap();
        open_log_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_path_is_a_log_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file.
        let err = open_log_file(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Log { .. }));
    }

    #[test]
    fn no_path_installs_nothing() {
        assert!(init(None, true).unwrap().is_none());
    }
}
