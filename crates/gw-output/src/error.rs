//! Error types for gw-output.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when writing or reading a report artifact.
///
/// A failed write never affects the simulation result it was given; callers
/// still hold the `SimulationRun` and can print it.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write report {}: {source}", path.display())]
    Write {
        path:   PathBuf,
        source: io::Error,
    },

    #[error("failed to read report {}: {source}", path.display())]
    Read {
        path:   PathBuf,
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed report: {0}")]
    Malformed(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

impl OutputError {
    /// A CSV error while writing `path`.  I/O failures become [`Write`][Self::Write].
    pub(crate) fn from_csv_write(path: &Path, err: csv::Error) -> Self {
        let io_kind = match err.kind() {
            csv::ErrorKind::Io(e) => Some(e.kind()),
            _ => None,
        };
        match io_kind {
            Some(kind) => OutputError::Write {
                path:   path.to_owned(),
                source: io::Error::new(kind, err),
            },
            None => OutputError::Csv(err),
        }
    }

    /// A JSON error while writing `path`.  I/O failures become [`Write`][Self::Write].
    pub(crate) fn from_json_write(path: &Path, err: serde_json::Error) -> Self {
        if err.is_io() {
            OutputError::Write { path: path.to_owned(), source: err.into() }
        } else {
            OutputError::Json(err)
        }
    }
}
