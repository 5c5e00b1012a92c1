// SPDX-License-Identifier: GPL-3.0-only

//! Collage - capture a photo, preview it and upload it to a bucket
//!
//! The crate is a single-screen coordinator around three external systems:
//! a camera program, an image preview surface and an object store.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Coordinator state, messages, handlers and event loop
//! - [`backends`]: Camera, preview and object store collaborators
//! - [`config`]: User configuration handling
//! - [`storage`]: Capture file naming and placeholder creation
//! - [`errors`]: Error types
//!
//! # Example
//!
//! ```ignore
//! // This is an interactive application, typically run via:
//! // collage run
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod storage;

// Re-export commonly used types
pub use app::{AppModel, Backends, Message, Notice};
pub use config::Config;
