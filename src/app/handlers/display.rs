// SPDX-License-Identifier: GPL-3.0-only

//! Display handlers

use crate::app::state::{AppModel, Message};
use crate::app::task::Task;
use crate::errors::RenderError;
use std::path::PathBuf;
use tracing::{debug, error};

impl AppModel {
    /// Redraw the visible image whenever the screen gains focus
    pub(crate) fn handle_focus_changed(&mut self, has_focus: bool) -> Task<Message> {
        debug!(has_focus, visible = ?self.visible_image_path, "Focus changed");
        if !has_focus {
            return Task::none();
        }

        let Some(path) = self.visible_image_path.clone() else {
            return Task::none();
        };
        let load = self.backends.surface.load(PathBuf::from(&path));
        Task::perform(load, move |result| Message::ImageLoaded { path, result })
    }

    pub(crate) fn handle_image_loaded(
        &mut self,
        path: String,
        result: Result<(), RenderError>,
    ) -> Task<Message> {
        match result {
            Ok(()) => debug!(path = %path, "Loaded image"),
            Err(e) => error!(path = %path, error = %e, "Error loading image"),
        }
        Task::none()
    }
}
