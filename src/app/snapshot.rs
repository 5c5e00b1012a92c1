// SPDX-License-Identifier: GPL-3.0-only

//! Saved state across teardown and recreation of the screen
//!
//! Only the two paths survive. The file name and reference of the last
//! capture do not, so uploading after a restore needs a fresh capture.

use crate::constants::{APP_DIR_NAME, SNAPSHOT_FILE_NAME};
use crate::errors::SnapshotError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Path the camera was last asked to write to
    #[serde(rename = "new image path key", default)]
    pub new_image_path: Option<String>,
    /// Path of the image on screen
    #[serde(rename = "visible image path key", default)]
    pub visible_image_path: Option<String>,
}

/// Reads and writes the snapshot as JSON
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<state_dir>/collage/snapshot.json`, falling back to the local data dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|dir| dir.join(APP_DIR_NAME).join(SNAPSHOT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; `None` if none was saved
    pub fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot to restore");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot = serde_json::from_str(&contents)?;
        info!(path = %self.path.display(), ?snapshot, "Restored snapshot");
        Ok(Some(snapshot))
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec(snapshot)?)?;
        debug!(path = %self.path.display(), ?snapshot, "Saved snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NEW_IMAGE_PATH_KEY, VISIBLE_IMAGE_PATH_KEY};

    #[test]
    fn test_serialized_under_fixed_keys() {
        let snapshot = Snapshot {
            new_image_path: Some("P1".to_string()),
            visible_image_path: None,
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value[NEW_IMAGE_PATH_KEY], "P1");
        assert!(value[VISIBLE_IMAGE_PATH_KEY].is_null());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("state").join(SNAPSHOT_FILE_NAME));

        for (new, visible) in [("P1", "D1"), ("", "")] {
            let snapshot = Snapshot {
                new_image_path: Some(new.to_string()),
                visible_image_path: Some(visible.to_string()),
            };
            store.save(&snapshot).unwrap();
            assert_eq!(store.load().unwrap(), Some(snapshot));
        }
    }

    #[test]
    fn test_missing_file_is_no_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("none.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{").unwrap();
        assert!(matches!(
            SnapshotStore::new(path).load(),
            Err(SnapshotError::Format(_))
        ));
    }
}
