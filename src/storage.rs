// SPDX-License-Identifier: GPL-3.0-only

//! Storage utilities for capture files

use crate::constants::{CAPTURE_EXTENSION, FILE_NAME_TIMESTAMP_FORMAT, PLACEHOLDER_ATTEMPTS};
use crate::errors::CaptureError;
use chrono::{DateTime, TimeZone};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

/// Sharable reference to a local file
///
/// Handed to collaborators (camera, object store) instead of a raw path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef(Url);

impl FileRef {
    /// Reference an absolute path as a `file://` URI
    pub fn from_path(path: &Path) -> Result<Self, CaptureError> {
        Url::from_file_path(path)
            .map(FileRef)
            .map_err(|()| CaptureError::InvalidReference(path.to_path_buf()))
    }

    /// Local path the reference points to
    pub fn to_path(&self) -> Option<PathBuf> {
        self.0.to_file_path().ok()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Build the capture file name for a point in time, e.g. `COLLAGE_20240101_120000`
pub fn capture_file_name<Tz: TimeZone>(prefix: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}", prefix, at.format(FILE_NAME_TIMESTAMP_FORMAT))
}

/// Create an empty placeholder file for the camera to write into
///
/// The file lands in `dir` (created if missing) as `<file_name><random>.jpg`.
/// An existing file is never reused; on a name clash another random suffix
/// is tried.
pub fn create_placeholder(dir: &Path, file_name: &str) -> Result<PathBuf, CaptureError> {
    let creation_failed = |source: std::io::Error| CaptureError::PlaceholderCreation {
        dir: dir.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(creation_failed)?;

    let mut last_error = None;
    for _ in 0..PLACEHOLDER_ATTEMPTS {
        let suffix = uuid::Uuid::new_v4().as_u64_pair().0 % 10_000_000_000;
        let path = dir.join(format!("{}{}.{}", file_name, suffix, CAPTURE_EXTENSION));

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                info!(path = %path.display(), "Created capture placeholder");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Placeholder name taken, retrying");
                last_error = Some(e);
            }
            Err(e) => return Err(creation_failed(e)),
        }
    }

    Err(creation_failed(last_error.unwrap_or_else(|| {
        std::io::Error::new(ErrorKind::AlreadyExists, "no free placeholder name")
    })))
}
