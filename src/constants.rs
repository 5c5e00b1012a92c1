// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Prefix of every generated capture file name
pub const FILE_NAME_PREFIX: &str = "COLLAGE_";

/// Timestamp layout appended to [`FILE_NAME_PREFIX`] (second resolution)
pub const FILE_NAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Extension of the placeholder file handed to the camera
pub const CAPTURE_EXTENSION: &str = "jpg";

/// How many random suffixes to try before giving up on a placeholder file
pub const PLACEHOLDER_ATTEMPTS: usize = 16;

/// Remote collection every capture is uploaded into
pub const IMAGE_COLLECTION: &str = "images";

/// Directory name used below the platform picture/config/data/state dirs
pub const APP_DIR_NAME: &str = "collage";

/// Snapshot key for the path of the capture the camera is writing to
pub const NEW_IMAGE_PATH_KEY: &str = "new image path key";

/// Snapshot key for the path of the image shown on screen
pub const VISIBLE_IMAGE_PATH_KEY: &str = "visible image path key";

/// Snapshot file name inside the state directory
pub const SNAPSHOT_FILE_NAME: &str = "snapshot.json";

/// Exit code of a camera command interrupted by the user (128 + SIGINT)
pub const CAMERA_INTERRUPTED_EXIT_CODE: i32 = 130;

/// Default size the preview is fitted and center-cropped to
pub const DEFAULT_PREVIEW_WIDTH: u32 = 1024;
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 768;

/// Fill colour of the placeholder drawn when an image cannot be rendered
pub const ERROR_PLACEHOLDER_RGBA: [u8; 4] = [176, 32, 32, 255];

/// Whether a notice is a brief confirmation or a message worth lingering on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLength {
    Short,
    Long,
}
