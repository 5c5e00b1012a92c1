// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::app::Backends;
use crate::app::snapshot::Snapshot;
use crate::backends::{CaptureOutcome, CaptureRequest, ObjectKey};
use crate::config::Config;
use crate::errors::{RenderError, TransferError};
use crate::storage::FileRef;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Upload state machine
///
/// Simple two-state design: either a transfer is running or not.
#[derive(Debug, Default)]
pub enum UploadState {
    /// No transfer running
    #[default]
    Idle,
    /// A transfer was started and has not reported back yet
    InFlight {
        /// Destination of the transfer
        key: ObjectKey,
        /// File name of the capture being uploaded
        file_name: String,
        /// When the transfer started
        started: Instant,
    },
}

impl UploadState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, UploadState::InFlight { .. })
    }

    /// Start tracking a transfer
    pub fn start(key: ObjectKey, file_name: String) -> Self {
        UploadState::InFlight {
            key,
            file_name,
            started: Instant::now(),
        }
    }

    /// Stop tracking the transfer, returning its key, file name and duration
    pub fn finish(&mut self) -> Option<(ObjectKey, String, Duration)> {
        match std::mem::take(self) {
            UploadState::Idle => None,
            UploadState::InFlight {
                key,
                file_name,
                started,
            } => Some((key, file_name, started.elapsed())),
        }
    }
}

/// Messages driving the coordinator
///
/// User interactions and collaborator callbacks alike. Every collaborator
/// operation answers with exactly one message.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== User =====
    /// Take a new picture
    CaptureRequested,
    /// Upload the last captured picture
    UploadRequested,
    /// The screen gained (`true`) or lost (`false`) focus
    FocusChanged(bool),
    /// The screen is going away
    Quit,

    // ===== Collaborators =====
    /// The external camera finished
    CaptureFinished(CaptureOutcome),
    /// The image surface finished loading `path`
    ImageLoaded {
        path: String,
        result: Result<(), RenderError>,
    },
    /// The object store finished the transfer
    UploadFinished(Result<(), TransferError>),
}

/// The lifecycle coordinator
pub struct AppModel {
    /// Application configuration
    pub config: Config,
    /// Collaborators
    pub(crate) backends: Backends,
    /// Path the camera was last asked to write to
    pub(crate) new_image_path: Option<String>,
    /// Path of the image on screen
    pub(crate) visible_image_path: Option<String>,
    /// File name of the last successful capture
    pub(crate) image_file_name: Option<String>,
    /// Reference to the last successful capture
    pub(crate) image_ref: Option<FileRef>,
    /// Capture handed to the camera and not answered yet
    pub(crate) awaiting_capture: Option<CaptureRequest>,
    /// Upload state machine
    pub(crate) upload: UploadState,
    /// Source of capture timestamps
    pub(crate) clock: fn() -> DateTime<Local>,
}

impl AppModel {
    /// Create the coordinator, restoring `snapshot` if the screen is being recreated
    pub fn new(config: Config, backends: Backends, snapshot: Option<Snapshot>) -> Self {
        let snapshot = snapshot.unwrap_or_default();
        Self {
            config,
            backends,
            new_image_path: snapshot.new_image_path,
            visible_image_path: snapshot.visible_image_path,
            image_file_name: None,
            image_ref: None,
            awaiting_capture: None,
            upload: UploadState::default(),
            clock: Local::now,
        }
    }

    /// Replace the clock used to name captures
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// State to persist before the screen is torn down
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            new_image_path: self.new_image_path.clone(),
            visible_image_path: self.visible_image_path.clone(),
        }
    }

    pub fn new_image_path(&self) -> Option<&str> {
        self.new_image_path.as_deref()
    }

    pub fn visible_image_path(&self) -> Option<&str> {
        self.visible_image_path.as_deref()
    }

    pub fn image_file_name(&self) -> Option<&str> {
        self.image_file_name.as_deref()
    }

    pub fn image_ref(&self) -> Option<&FileRef> {
        self.image_ref.as_ref()
    }

    pub fn is_capturing(&self) -> bool {
        self.awaiting_capture.is_some()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.is_in_flight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_state_finish_resets() {
        let mut state = UploadState::start(ObjectKey::new("images", "a"), "a".to_string());
        assert!(state.is_in_flight());

        let (key, file_name, _) = state.finish().unwrap();
        assert_eq!(key.as_str(), "images/a");
        assert_eq!(file_name, "a");
        assert!(!state.is_in_flight());
        assert!(state.finish().is_none());
    }
}
