//! Local file source.
//!
//! Reads the whole file at construction; useful offline and in tests.

use crate::model::FetchError;
use crate::source::{parse_members, FetchResult};
use std::path::{Path, PathBuf};

/// Member list read from a local JSON file.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    outcome: Option<FetchResult>,
}

impl FileSource {
    /// Read and parse `path` now. Failures are kept for [`FileSource::take`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let outcome = Some(read_members(&path));
        Self { path, outcome }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hand out the outcome. `Some` on the first call only.
    pub fn take(&mut self) -> Option<FetchResult> {
        self.outcome.take()
    }
}

fn read_members(path: &Path) -> FetchResult {
    if !path.exists() {
        return Err(FetchError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let body = std::fs::read_to_string(path)?;
    parse_members(&body)
}
