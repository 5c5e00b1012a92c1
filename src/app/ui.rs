// SPDX-License-Identifier: GPL-3.0-only

//! Screen feedback: transient notices and the busy indicator

use crate::constants::NoticeLength;

/// A transient message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Upload requested before any successful capture
    NoImage,
    /// Upload finished
    Uploaded,
    /// Upload failed
    UploadFailed,
    /// Upload requested while another one is running
    UploadInProgress,
    /// The capture file could not be prepared
    CaptureUnavailable,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::NoImage => "Take a picture first!",
            Notice::Uploaded => "Image uploaded!",
            Notice::UploadFailed => "Error uploading image",
            Notice::UploadInProgress => "Upload already in progress",
            Notice::CaptureUnavailable => "Unable to start the camera",
        }
    }

    pub fn length(&self) -> NoticeLength {
        match self {
            Notice::Uploaded | Notice::UploadInProgress => NoticeLength::Short,
            Notice::NoImage | Notice::UploadFailed | Notice::CaptureUnavailable => {
                NoticeLength::Long
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// The single screen the coordinator reports to
///
/// Called from the event loop only.
pub trait Screen: Send + Sync {
    fn show_notice(&self, notice: Notice);
    fn set_busy(&self, busy: bool);
}
