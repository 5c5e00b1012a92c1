// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the event loop

mod common;

use collage::app::{self, Message, Notice};
use common::{FakeStore, FakeSurface, Harness, ScreenEvent, wait_for};
use std::sync::Arc;
use tokio::sync::{Notify, mpsc};

#[tokio::test]
async fn test_busy_indicator_spans_the_transfer() {
    let gate = Arc::new(Notify::new());
    let h = Harness::build(FakeSurface::default(), FakeStore::gated(gate.clone()), None);
    let (screen, surface, store) = (h.screen.clone(), h.surface.clone(), h.store.clone());

    let (sender, receiver) = mpsc::unbounded_channel();
    let running = tokio::spawn(app::run(h.model, receiver));

    sender.send(Message::CaptureRequested).unwrap();
    wait_for(|| !surface.loads().is_empty()).await;

    sender.send(Message::UploadRequested).unwrap();
    wait_for(|| screen.is_busy()).await;
    assert_eq!(store.puts().len(), 1);
    assert!(screen.notices().is_empty());

    gate.notify_one();
    wait_for(|| !screen.is_busy()).await;
    assert_eq!(screen.notices(), vec![Notice::Uploaded]);

    sender.send(Message::Quit).unwrap();
    let model = running.await.unwrap();
    assert!(!model.is_uploading());
}

#[tokio::test]
async fn test_quit_waits_for_running_upload() {
    let gate = Arc::new(Notify::new());
    let h = Harness::build(FakeSurface::default(), FakeStore::gated(gate.clone()), None);
    let (screen, surface) = (h.screen.clone(), h.surface.clone());

    let (sender, receiver) = mpsc::unbounded_channel();
    let running = tokio::spawn(app::run(h.model, receiver));

    sender.send(Message::CaptureRequested).unwrap();
    wait_for(|| !surface.loads().is_empty()).await;
    sender.send(Message::UploadRequested).unwrap();
    wait_for(|| screen.is_busy()).await;

    sender.send(Message::Quit).unwrap();
    // Requests after quitting are not applied
    sender.send(Message::UploadRequested).unwrap();
    gate.notify_one();

    let model = running.await.unwrap();
    assert!(!model.is_uploading());
    assert_eq!(
        screen.events(),
        vec![
            ScreenEvent::Busy(true),
            ScreenEvent::Busy(false),
            ScreenEvent::Notice(Notice::Uploaded),
        ]
    );
}

#[tokio::test]
async fn test_closed_channel_ends_the_loop() {
    let h = Harness::new();
    let (sender, receiver) = mpsc::unbounded_channel();
    sender.send(Message::FocusChanged(true)).unwrap();
    drop(sender);

    let model = app::run(h.model, receiver).await;
    assert_eq!(model.visible_image_path(), None);
}
