// SPDX-License-Identifier: GPL-3.0-only

//! Capture-preview-upload coordinator
//!
//! This module contains the coordinator state, message handling and the
//! event loop that drives it.
//!
//! # Architecture
//!
//! - `state`: Coordinator state types (AppModel, Message, UploadState)
//! - `update`: Message dispatch to the `handlers` modules
//! - `task`: Deferred collaborator work returned by `update`
//! - `snapshot`: State saved across teardown and recreation
//! - `ui`: Notices and the screen interface
//!
//! All state changes happen inside [`AppModel::update`], called by [`run`]
//! one message at a time. Collaborator work (camera, rendering, transfers)
//! runs concurrently as futures and reports back with a message.

mod handlers;
pub mod snapshot;
mod state;
pub mod task;
pub mod ui;
mod update;

pub use snapshot::{Snapshot, SnapshotStore};
pub use state::{AppModel, Message, UploadState};
pub use task::Task;
pub use ui::{Notice, Screen};

use crate::backends::camera::ExternalCamera;
use crate::backends::preview::PreviewRenderer;
use crate::backends::{CaptureLauncher, ImageSurface, ObjectStore, remote};
use crate::config::Config;
use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The collaborators the coordinator drives
#[derive(Clone)]
pub struct Backends {
    pub camera: Arc<dyn CaptureLauncher>,
    pub surface: Arc<dyn ImageSurface>,
    pub store: Arc<dyn ObjectStore>,
    pub screen: Arc<dyn Screen>,
}

impl Backends {
    /// Production collaborators for `config`, reporting to `screen`
    pub fn from_config(config: &Config, screen: Arc<dyn Screen>) -> Self {
        Self {
            camera: Arc::new(ExternalCamera::new(config.camera_command.clone())),
            surface: Arc::new(PreviewRenderer::new(&config.preview)),
            store: remote::from_config(&config.bucket),
            screen,
        }
    }
}

/// Drive `model` until [`Message::Quit`] arrives or `events` closes
///
/// Collaborator futures run concurrently; their messages are applied one at
/// a time. After quitting, operations already started are still awaited and
/// applied before the model is returned.
pub async fn run(mut model: AppModel, mut events: mpsc::UnboundedReceiver<Message>) -> AppModel {
    let mut in_flight: FuturesUnordered<BoxFuture<'static, Message>> = FuturesUnordered::new();
    let mut accepting = true;

    loop {
        let message = tokio::select! {
            Some(message) = in_flight.next(), if !in_flight.is_empty() => message,
            event = events.recv(), if accepting => event.unwrap_or(Message::Quit),
            else => break,
        };

        if matches!(message, Message::Quit) {
            if !accepting {
                continue;
            }
            accepting = false;
            info!(pending = in_flight.len(), "Shutting down");
        }

        debug!(?message, "Update");
        in_flight.extend(model.update(message).into_futures());
    }

    model
}
