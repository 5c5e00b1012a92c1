// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, while specific handlers
//! are implemented in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::capture`: capture requests and camera results
//! - `handlers::display`: focus changes and image rendering
//! - `handlers::upload`: uploads and transfer results

use crate::app::state::{AppModel, Message};
use crate::app::task::Task;
use tracing::info;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ===== Capture =====
            Message::CaptureRequested => self.handle_capture_requested(),
            Message::CaptureFinished(outcome) => self.handle_capture_finished(outcome),

            // ===== Display =====
            Message::FocusChanged(has_focus) => self.handle_focus_changed(has_focus),
            Message::ImageLoaded { path, result } => self.handle_image_loaded(path, result),

            // ===== Upload =====
            Message::UploadRequested => self.handle_upload_requested(),
            Message::UploadFinished(result) => self.handle_upload_finished(result),

            Message::Quit => {
                info!(
                    capturing = self.is_capturing(),
                    uploading = self.is_uploading(),
                    "Quit requested"
                );
                Task::none()
            }
        }
    }
}
