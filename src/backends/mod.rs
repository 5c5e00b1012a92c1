// SPDX-License-Identifier: GPL-3.0-only

//! Collaborator backends
//!
//! The coordinator talks to three external systems through traits, so each
//! can be swapped for a test double:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Coordinator (app)             │
//! └──────┬───────────────┬───────────────┬──────┘
//!        │               │               │
//! ┌──────┴──────┐ ┌──────┴──────┐ ┌──────┴──────┐
//! │   Camera    │ │   Preview   │ │   Remote    │
//! │ (command)   │ │  (image)    │ │ (dir/HTTP)  │
//! └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`camera`]: hands captures to an external camera program
//! - [`preview`]: decodes and renders the displayed image
//! - [`remote`]: uploads captures to an object store

pub mod camera;
pub mod preview;
pub mod remote;

pub use camera::{CaptureLauncher, CaptureOutcome, CaptureRequest};
pub use preview::ImageSurface;
pub use remote::{ObjectKey, ObjectStore};
