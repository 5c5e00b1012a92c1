// SPDX-License-Identifier: GPL-3.0-only

//! Recording test doubles for the coordinator's collaborators

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use collage::app::{AppModel, Backends, Message, Notice, Screen, Snapshot};
use collage::backends::{
    CaptureLauncher, CaptureOutcome, CaptureRequest, ImageSurface, ObjectKey, ObjectStore,
};
use collage::config::Config;
use collage::errors::{RenderError, TransferError};
use collage::storage::FileRef;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Notify;

pub fn new_year_noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Notice(Notice),
    Busy(bool),
}

#[derive(Default)]
pub struct RecordingScreen {
    events: Mutex<Vec<ScreenEvent>>,
}

impl RecordingScreen {
    pub fn events(&self) -> Vec<ScreenEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ScreenEvent::Notice(notice) => Some(notice),
                ScreenEvent::Busy(_) => None,
            })
            .collect()
    }

    /// Whether the busy indicator is currently shown
    pub fn is_busy(&self) -> bool {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                ScreenEvent::Busy(busy) => Some(busy),
                ScreenEvent::Notice(_) => None,
            })
            .unwrap_or(false)
    }
}

impl Screen for RecordingScreen {
    fn show_notice(&self, notice: Notice) {
        self.events.lock().unwrap().push(ScreenEvent::Notice(notice));
    }

    fn set_busy(&self, busy: bool) {
        self.events.lock().unwrap().push(ScreenEvent::Busy(busy));
    }
}

/// Camera that answers every capture with a fixed outcome
pub struct FakeCamera {
    pub outcome: Mutex<CaptureOutcome>,
    launches: Mutex<Vec<CaptureRequest>>,
}

impl FakeCamera {
    pub fn new(outcome: CaptureOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            launches: Mutex::new(Vec::new()),
        }
    }

    pub fn set_outcome(&self, outcome: CaptureOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn launches(&self) -> Vec<CaptureRequest> {
        self.launches.lock().unwrap().clone()
    }
}

impl CaptureLauncher for FakeCamera {
    fn launch(&self, request: &CaptureRequest) -> BoxFuture<'static, CaptureOutcome> {
        self.launches.lock().unwrap().push(request.clone());
        let outcome = *self.outcome.lock().unwrap();
        let path = request.path.clone();
        async move {
            if outcome == CaptureOutcome::Success {
                std::fs::write(&path, b"jpeg").unwrap();
            }
            outcome
        }
        .boxed()
    }
}

#[derive(Default)]
pub struct FakeSurface {
    pub fail: bool,
    pub loads: Mutex<Vec<PathBuf>>,
}

impl FakeSurface {
    pub fn loads(&self) -> Vec<PathBuf> {
        self.loads.lock().unwrap().clone()
    }
}

impl ImageSurface for FakeSurface {
    fn load(&self, path: PathBuf) -> BoxFuture<'static, Result<(), RenderError>> {
        self.loads.lock().unwrap().push(path);
        let result = if self.fail {
            Err(RenderError::Decode("not an image".to_string()))
        } else {
            Ok(())
        };
        futures::future::ready(result).boxed()
    }
}

/// Store that records transfers and optionally holds them until released
pub struct FakeStore {
    pub result: Mutex<Result<(), TransferError>>,
    pub gate: Option<Arc<Notify>>,
    puts: Mutex<Vec<(FileRef, ObjectKey)>>,
}

impl FakeStore {
    pub fn new(result: Result<(), TransferError>) -> Self {
        Self {
            result: Mutex::new(result),
            gate: None,
            puts: Mutex::new(Vec::new()),
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(Ok(()))
        }
    }

    pub fn set_result(&self, result: Result<(), TransferError>) {
        *self.result.lock().unwrap() = result;
    }

    pub fn puts(&self) -> Vec<(FileRef, ObjectKey)> {
        self.puts.lock().unwrap().clone()
    }
}

impl ObjectStore for FakeStore {
    fn put_file(&self, file: FileRef, key: ObjectKey) -> BoxFuture<'static, Result<(), TransferError>> {
        self.puts.lock().unwrap().push((file, key));
        let result = self.result.lock().unwrap().clone();
        let gate = self.gate.clone();
        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            result
        }
        .boxed()
    }
}

pub struct Harness {
    pub model: AppModel,
    pub screen: Arc<RecordingScreen>,
    pub camera: Arc<FakeCamera>,
    pub surface: Arc<FakeSurface>,
    pub store: Arc<FakeStore>,
    pub dir: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(FakeSurface::default(), FakeStore::new(Ok(())), None)
    }

    pub fn build(surface: FakeSurface, store: FakeStore, snapshot: Option<Snapshot>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            pictures_dir: Some(dir.path().join("Pictures")),
            ..Config::default()
        };

        let screen = Arc::new(RecordingScreen::default());
        let camera = Arc::new(FakeCamera::new(CaptureOutcome::Success));
        let surface = Arc::new(surface);
        let store = Arc::new(store);
        let backends = Backends {
            camera: camera.clone(),
            surface: surface.clone(),
            store: store.clone(),
            screen: screen.clone(),
        };
        let model = AppModel::new(config, backends, snapshot).with_clock(new_year_noon);

        Self {
            model,
            screen,
            camera,
            surface,
            store,
            dir,
        }
    }

    /// Apply `message` and every follow-up message until the model is idle
    pub async fn send(&mut self, message: Message) {
        let mut queue: VecDeque<_> = self.model.update(message).into_futures().into();
        while let Some(pending) = queue.pop_front() {
            let next = pending.await;
            queue.extend(self.model.update(next).into_futures());
        }
    }
}

/// Poll `condition` until it holds, failing after a few seconds
pub async fn wait_for(condition: impl Fn() -> bool) {
    for _ in 0..500 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached");
}
