//! Error types for memview.
//!
//! The taxonomy is small because the table engine itself never fails:
//!
//! - [`AppError`] - top-level error returned from the shell
//!   - [`FetchError`] - the one-shot load of the member list failed
//!   - `std::io::Error` - terminal failures
//!
//! A fetch failure is **non-fatal**: it is logged and the table stays
//! empty. Terminal errors are fatal and end the program.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Loading the member list failed.
    ///
    /// Only surfaces here when a caller chooses to treat the load as fatal;
    /// the TUI logs it and keeps running with an empty table.
    #[error("Failed to load members: {0}")]
    Fetch(#[from] FetchError),

    /// Terminal or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors from loading the member list.
///
/// Covers both the remote source and the local file source. Each variant
/// carries enough context (URL, path, status) to make the log line useful.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request could not be sent or the body could not be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use memview::model::error::FetchError;
    ///
    /// let err = FetchError::Http {
    ///     url: "https://example.invalid/members.json".to_string(),
    ///     reason: "dns error".to_string(),
    /// };
    /// assert!(err.to_string().contains("example.invalid"));
    /// ```
    #[error("Request to {url} failed: {reason}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The payload was not a JSON array of members.
    #[error("Invalid member payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The local member file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Reading the local member file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The background fetch ended without reporting an outcome.
    #[error("Fetch worker exited without a result")]
    WorkerGone,
}
