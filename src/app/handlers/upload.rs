// SPDX-License-Identifier: GPL-3.0-only

//! Upload handlers
//!
//! At most one transfer runs at a time. The busy indicator is shown from the
//! moment a transfer starts until its result arrives.

use crate::app::state::{AppModel, Message, UploadState};
use crate::app::task::Task;
use crate::app::ui::Notice;
use crate::backends::ObjectKey;
use crate::errors::TransferError;
use tracing::{error, info, warn};

impl AppModel {
    pub(crate) fn handle_upload_requested(&mut self) -> Task<Message> {
        let (Some(file_ref), Some(file_name)) =
            (self.image_ref.clone(), self.image_file_name.clone())
        else {
            self.backends.screen.show_notice(Notice::NoImage);
            return Task::none();
        };

        if let UploadState::InFlight { key, .. } = &self.upload {
            warn!(key = %key, "Upload already running, rejecting request");
            self.backends.screen.show_notice(Notice::UploadInProgress);
            return Task::none();
        }

        let key = ObjectKey::new(&self.config.collection, &file_name);
        info!(key = %key, file = %file_ref, "Uploading image");

        self.backends.screen.set_busy(true);
        let transfer = self.backends.store.put_file(file_ref, key.clone());
        self.upload = UploadState::start(key, file_name);

        Task::perform(transfer, Message::UploadFinished)
    }

    pub(crate) fn handle_upload_finished(
        &mut self,
        result: Result<(), TransferError>,
    ) -> Task<Message> {
        let finished = self.upload.finish();
        self.backends.screen.set_busy(false);

        match result {
            Ok(()) => {
                if let Some((key, _, elapsed)) = &finished {
                    info!(key = %key, ?elapsed, "Image uploaded");
                }
                self.backends.screen.show_notice(Notice::Uploaded);
            }
            Err(e) => {
                let file_name = finished.as_ref().map(|(_, file_name, _)| file_name.as_str());
                error!(file_name = ?file_name, error = %e, "Error uploading image");
                self.backends.screen.show_notice(Notice::UploadFailed);
            }
        }

        Task::none()
    }
}
