//! Error types for quest-table.
//!
//! Only `Terminal` is fatal: without a drawable surface there is no
//! output path. Everything else is reported and the session goes on.

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// An index into questions or rows fell outside the current bounds.
    #[error("{what} index {index} out of range (len {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// The terminal could not be set up, drawn to, or restored.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The session report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The debug log sink could not be opened.
    #[error("cannot open debug log {path}: {message}")]
    Log { path: PathBuf, message: String },
}

impl Error {
    pub fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Error::OutOfRange { what, index, len }
    }

    /// True for errors that must end the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal(_))
    }
}

/// Downgrade a non-fatal error to a warning on stderr.
///
/// Fatal errors pass through unchanged.
pub fn warn_non_fatal<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if !e.is_fatal() => {
            warn!(error = %e, "continuing after error");
            eprintln!("Warning: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
