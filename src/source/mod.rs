//! Member list sources.
//!
//! The table is filled exactly once from one of:
//! - a remote JSON endpoint, fetched on a background thread
//! - a local JSON file, read at construction
//!
//! Both deliver the same payload shape: a JSON array of members.

use crate::model::{FetchError, Member};
use std::path::PathBuf;
use std::time::Duration;

pub mod file;
pub mod remote;

pub use file::FileSource;
pub use remote::RemoteSource;

/// Result of a completed load.
pub type FetchResult = Result<Vec<Member>, FetchError>;

/// Unified one-shot source for the member list.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// HTTP GET against a URL.
    Remote(RemoteSource),
    /// Local JSON file.
    File(FileSource),
}

impl InputSource {
    /// Poll for the load outcome.
    ///
    /// Non-blocking. Returns `Some` exactly once, when the outcome is
    /// known, and `None` on every other call.
    pub fn poll(&mut self) -> Option<FetchResult> {
        match self {
            InputSource::Remote(r) => r.poll(),
            InputSource::File(f) => f.take(),
        }
    }

    /// Where the members come from, for the status line and logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Remote(r) => r.url().to_string(),
            InputSource::File(f) => f.path().display().to_string(),
        }
    }
}

/// Parse a member payload.
///
/// # Errors
///
/// Returns `FetchError::Decode` unless `body` is a JSON array of objects
/// with string `id`, `name`, `email` and `role` fields.
pub fn parse_members(body: &str) -> FetchResult {
    Ok(serde_json::from_str(body)?)
}

/// Pick the source for this run.
///
/// A local file wins over the URL. Never fails: a broken source reports
/// its error through [`InputSource::poll`] so the UI can start either way.
pub fn detect_input_source(url: String, file: Option<PathBuf>, timeout: Duration) -> InputSource {
    match file {
        Some(path) => InputSource::File(FileSource::new(path)),
        None => InputSource::Remote(RemoteSource::spawn(url, timeout)),
    }
}
