// SPDX-License-Identifier: GPL-3.0-only

//! Capture handlers
//!
//! A capture creates the file the camera writes into, hands it to the
//! external camera and waits for its outcome. Only a successful outcome
//! changes what is shown and what can be uploaded.

use crate::app::state::{AppModel, Message};
use crate::app::task::Task;
use crate::app::ui::Notice;
use crate::backends::{CaptureOutcome, CaptureRequest};
use crate::errors::CaptureError;
use tracing::{debug, error, info, warn};

impl AppModel {
    /// Name the capture and create its placeholder file
    pub(crate) fn prepare_capture(&self) -> Result<CaptureRequest, CaptureError> {
        let dir = self
            .config
            .pictures_dir()
            .ok_or(CaptureError::NoPictureDirectory)?;
        CaptureRequest::prepare(&dir, &self.config.file_prefix, &(self.clock)())
    }

    pub(crate) fn handle_capture_requested(&mut self) -> Task<Message> {
        if let Some(request) = &self.awaiting_capture {
            warn!(
                path = %request.path.display(),
                "Camera is already open, ignoring capture request"
            );
            return Task::none();
        }

        let request = match self.prepare_capture() {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "Cannot start capture");
                self.backends.screen.show_notice(Notice::CaptureUnavailable);
                return Task::none();
            }
        };

        info!(
            file_name = %request.file_name,
            path = %request.path.display(),
            "Starting capture"
        );
        self.new_image_path = Some(request.path_string());
        let launch = self.backends.camera.launch(&request);
        self.awaiting_capture = Some(request);

        Task::perform(launch, Message::CaptureFinished)
    }

    pub(crate) fn handle_capture_finished(&mut self, outcome: CaptureOutcome) -> Task<Message> {
        let request = self.awaiting_capture.take();

        match outcome {
            CaptureOutcome::Success => {
                debug!(path = ?self.new_image_path, "Result ok, user took a picture");
                self.visible_image_path = self.new_image_path.clone();
                // A request restored from a snapshot has no reference left to upload
                if let Some(request) = request {
                    self.image_file_name = Some(request.file_name);
                    self.image_ref = Some(request.file_ref);
                }
            }
            CaptureOutcome::Cancelled => {
                debug!("Result cancelled, no picture taken");
            }
            CaptureOutcome::Other(code) => {
                warn!(?code, "Camera finished without a picture");
            }
        }

        // Control comes back to the screen once the camera is gone
        Task::done(Message::FocusChanged(true))
    }
}
