// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the camera boundary

use crate::errors::CaptureError;
use crate::storage::{self, FileRef};
use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result classification reported by the external camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A picture was written to the requested output
    Success,
    /// The user backed out without taking a picture
    Cancelled,
    /// Anything else, with the raw result code when one exists
    Other(Option<i32>),
}

/// Everything the camera needs to write a new picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Generated name, e.g. `COLLAGE_20240101_120000`
    pub file_name: String,
    /// Absolute path of the placeholder file
    pub path: PathBuf,
    /// Sharable reference to `path`, passed as the camera's output target
    pub file_ref: FileRef,
}

impl CaptureRequest {
    /// Name the capture after `at` and create its placeholder file in `dir`
    pub fn prepare<Tz: TimeZone>(
        dir: &Path,
        prefix: &str,
        at: &DateTime<Tz>,
    ) -> Result<Self, CaptureError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let file_name = storage::capture_file_name(prefix, at);
        let path = storage::create_placeholder(dir, &file_name)?;
        let file_ref = match FileRef::from_path(&path) {
            Ok(file_ref) => file_ref,
            Err(e) => {
                // Nothing will ever write to it
                if let Err(remove_err) = std::fs::remove_file(&path) {
                    debug!(path = %path.display(), error = %remove_err, "Failed to remove unused placeholder");
                }
                return Err(e);
            }
        };

        Ok(Self {
            file_name,
            path,
            file_ref,
        })
    }

    /// Path as stored in the coordinator state and snapshot
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
