// SPDX-License-Identifier: GPL-3.0-only

//! Camera boundary
//!
//! The application never drives camera hardware itself. A capture is handed
//! to an external program together with the file it must write to, and the
//! program's result is reported back as a [`CaptureOutcome`].
//!
//! ```text
//! ┌─────────────────────┐
//! │     Coordinator     │
//! └──────────┬──────────┘
//!            │ CaptureRequest
//!            ▼
//! ┌─────────────────────┐
//! │ CaptureLauncher     │  ← Common interface
//! └──────────┬──────────┘
//!            │
//!            ▼
//!    ┌──────────────┐
//!    │ExternalCamera│  ← Runs the configured command
//!    └──────────────┘
//! ```

pub mod command;
pub mod types;

pub use command::ExternalCamera;
pub use types::*;

use futures::future::BoxFuture;

/// Hands a capture over to an external camera
pub trait CaptureLauncher: Send + Sync {
    /// Start the capture; the future resolves once, when the camera is done
    fn launch(&self, request: &CaptureRequest) -> BoxFuture<'static, CaptureOutcome>;
}
