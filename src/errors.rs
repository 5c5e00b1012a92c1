// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the collage application

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Capture could not be prepared or launched
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),
    /// Upload failed
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),
    /// Preview could not be rendered
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Snapshot persistence errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    /// Storage/filesystem errors
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Errors preparing a capture request
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The platform has no picture directory and none is configured
    #[error("no picture directory available")]
    NoPictureDirectory,
    /// The placeholder file for the camera could not be created
    #[error("failed to create image file in {}: {source}", dir.display())]
    PlaceholderCreation {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The placeholder path cannot be expressed as a file reference
    #[error("cannot reference {} as a file URI", .0.display())]
    InvalidReference(PathBuf),
}

/// Errors reported by an object store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
    /// The file reference does not point to a local file
    #[error("not a local file reference: {0}")]
    InvalidReference(String),
    /// Reading the source or writing the destination failed
    #[error("I/O failure: {0}")]
    Io(String),
    /// The remote end answered with a non-success status
    #[error("remote store answered {status}")]
    Status { status: u16 },
    /// The request could not be completed
    #[error("request failed: {0}")]
    Request(String),
}

impl From<std::io::Error> for TransferError {
    fn from(err: std::io::Error) -> Self {
        TransferError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for TransferError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransferError::Status {
                status: status.as_u16(),
            },
            None => TransferError::Request(err.to_string()),
        }
    }
}

/// Errors loading an image into the preview surface
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("failed to write preview: {0}")]
    Io(String),
    #[error("render task failed: {0}")]
    Task(String),
}

/// Configuration loading and saving errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available")]
    NoConfigDirectory,
    #[error("no state directory available")]
    NoStateDirectory,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Snapshot persistence errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is malformed: {0}")]
    Format(#[from] serde_json::Error),
}
