//! Core error type.
//!
//! Downstream crates define their own error enums and wrap `CoreError` as one
//! variant via `From`, so tier and configuration failures propagate with `?`.

use thiserror::Error;

/// The error type for `gw-core` and a common base for the other `gw-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A distance tier name outside `{near, mid, far}`, or a tier missing from
    /// the configured table.
    #[error("unknown distance tier {0:?}")]
    UnknownTier(String),

    /// The configuration value is malformed (zero throughput, bad window, …).
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gw-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
