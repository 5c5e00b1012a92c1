// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Stored as JSON in `<config_dir>/collage/config.json`. Every field has a
//! default, so a partial file (or no file at all) is valid.

use crate::constants::{
    APP_DIR_NAME, DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH, FILE_NAME_PREFIX,
    IMAGE_COLLECTION,
};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where uploads go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BucketConfig {
    /// A directory standing in for the bucket
    Local { root: PathBuf },
    /// An HTTP endpoint accepting `PUT <endpoint>/<key>`
    Http {
        endpoint: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },
}

impl Default for BucketConfig {
    fn default() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join("bucket");
        BucketConfig::Local { root }
    }
}

/// Preview surface settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Width the image is fitted and center-cropped to
    pub width: u32,
    /// Height the image is fitted and center-cropped to
    pub height: u32,
    /// Where the rendered preview is written
    pub output: PathBuf,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        let output = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR_NAME)
            .join("preview.png");
        Self {
            width: DEFAULT_PREVIEW_WIDTH,
            height: DEFAULT_PREVIEW_HEIGHT,
            output,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory captures are written to (`None` = `<picture_dir>/collage`)
    pub pictures_dir: Option<PathBuf>,
    /// Prefix of generated file names
    pub file_prefix: String,
    /// Remote collection uploads are stored under
    pub collection: String,
    /// Camera command; `{output}` is replaced with the target path, `{uri}` with its file URI
    pub camera_command: Vec<String>,
    /// Upload destination
    pub bucket: BucketConfig,
    /// Preview surface settings
    pub preview: PreviewSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pictures_dir: None,
            file_prefix: FILE_NAME_PREFIX.to_string(),
            collection: IMAGE_COLLECTION.to_string(),
            camera_command: vec![
                "fswebcam".to_string(),
                "--no-banner".to_string(),
                "{output}".to_string(),
            ],
            bucket: BucketConfig::default(),
            preview: PreviewSettings::default(),
        }
    }
}

impl Config {
    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("config.json"))
            .ok_or(ConfigError::NoConfigDirectory)
    }

    /// Load the configuration, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write the configuration as pretty JSON, creating the parent directory
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| write_err(e.into()))?;
        std::fs::write(path, json).map_err(write_err)
    }

    /// Directory captures are written to
    pub fn pictures_dir(&self) -> Option<PathBuf> {
        self.pictures_dir
            .clone()
            .or_else(|| dirs::picture_dir().map(|dir| dir.join(APP_DIR_NAME)))
    }
}
