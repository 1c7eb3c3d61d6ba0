// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared fakes and a harness for driving the coordinator in tests.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use mirage_core::asset::{AssetCatalog, AssetDescriptor};
use mirage_core::event::{ControlEvent, EventSink};
use mirage_core::math::Pose;
use mirage_core::platform::{Capability, CapabilityHost, Notifier};
use mirage_core::render::{RenderEngine, SurfaceHandle};
use mirage_core::tracking::TrackingEngine;
use mirage_session::{Coordinator, SessionConfig};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// --- tracking engine fake ---------------------------------------------------

/// Observable call counts for the fake tracking engine.
#[derive(Default)]
pub struct TrackerProbe {
    pub setup_calls: AtomicU32,
    pub start_calls: AtomicU32,
    pub pause_calls: AtomicU32,
    pub resume_calls: AtomicU32,
    pub cleanup_calls: AtomicU32,
    pub loaded_assets: Mutex<Vec<String>>,
}

impl TrackerProbe {
    pub fn setup_count(&self) -> u32 {
        self.setup_calls.load(Ordering::SeqCst)
    }

    pub fn load_count(&self) -> usize {
        self.loaded_assets.lock().unwrap().len()
    }
}

/// How the fake engine answers `start_detection`.
#[derive(Clone, Copy)]
pub enum StartBehavior {
    Succeed,
    Refuse,
    Fault,
}

pub struct FakeTracker {
    probe: Arc<TrackerProbe>,
    start: StartBehavior,
}

impl FakeTracker {
    pub fn new(start: StartBehavior) -> (Self, Arc<TrackerProbe>) {
        let probe = Arc::new(TrackerProbe::default());
        (
            Self {
                probe: probe.clone(),
                start,
            },
            probe,
        )
    }
}

impl TrackingEngine for FakeTracker {
    fn bind(&mut self, _sink: EventSink<ControlEvent>) {
        // Tests drive completions through the coordinator's sink directly.
    }

    fn setup(&mut self) -> Result<()> {
        self.probe.setup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load_model(&mut self, asset: &AssetDescriptor) -> Result<()> {
        self.probe
            .loaded_assets
            .lock()
            .unwrap()
            .push(asset.name.clone());
        Ok(())
    }

    fn start_detection(&mut self) -> Result<bool> {
        self.probe.start_calls.fetch_add(1, Ordering::SeqCst);
        match self.start {
            StartBehavior::Succeed => Ok(true),
            StartBehavior::Refuse => Ok(false),
            StartBehavior::Fault => Err(anyhow!("tracking engine fault")),
        }
    }

    fn pause(&mut self) -> Result<()> {
        self.probe.pause_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.probe.resume_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.probe.cleanup_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// --- render engine fake -----------------------------------------------------

/// Observable call counts for the fake render engine.
#[derive(Default)]
pub struct RenderProbe {
    pub attach_calls: AtomicU32,
    pub release_calls: AtomicU32,
    pub show_calls: AtomicU32,
    pub update_calls: AtomicU32,
    pub hide_calls: AtomicU32,
    pub last_pose: Mutex<Option<Pose>>,
}

impl RenderProbe {
    pub fn show_count(&self) -> u32 {
        self.show_calls.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> u32 {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn release_count(&self) -> u32 {
        self.release_calls.load(Ordering::SeqCst)
    }
}

pub struct FakeRender {
    probe: Arc<RenderProbe>,
}

impl FakeRender {
    pub fn new() -> (Self, Arc<RenderProbe>) {
        let probe = Arc::new(RenderProbe::default());
        (
            Self {
                probe: probe.clone(),
            },
            probe,
        )
    }
}

impl RenderEngine for FakeRender {
    fn attach(&mut self, _surface: SurfaceHandle) -> Result<()> {
        self.probe.attach_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn release(&mut self) {
        self.probe.release_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn show_asset(&mut self) -> Result<()> {
        self.probe.show_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn update_transform(&mut self, pose: &Pose) -> Result<()> {
        self.probe.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.probe.last_pose.lock().unwrap() = Some(*pose);
        Ok(())
    }

    fn hide_asset(&mut self) -> Result<()> {
        self.probe.hide_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// --- asset catalog fake -----------------------------------------------------

pub struct FakeCatalog {
    entries: Vec<(String, u64)>,
}

impl FakeCatalog {
    /// A catalog holding only the default demo asset.
    pub fn with_giraffe() -> Self {
        Self {
            entries: vec![("giraffe_voxel.glb".to_string(), 4_500_000)],
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl AssetCatalog for FakeCatalog {
    fn list(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    fn describe(&self, name: &str) -> AssetDescriptor {
        match self.entries.iter().find(|(n, _)| n == name) {
            Some((n, size)) => AssetDescriptor {
                name: n.clone(),
                size_bytes: *size,
                is_valid: true,
            },
            None => AssetDescriptor::invalid(name),
        }
    }
}

// --- capability host fake ---------------------------------------------------

pub struct FakeHost {
    /// What `is_granted` answers.
    pub pregranted: bool,
    /// What the consent flow grants; `None` means the host never responds.
    pub respond: Option<Vec<Capability>>,
    pub requests: Arc<AtomicU32>,
}

impl FakeHost {
    pub fn granting() -> (Self, Arc<AtomicU32>) {
        Self::with(true, Some(vec![Capability::Camera]))
    }

    pub fn denying() -> (Self, Arc<AtomicU32>) {
        Self::with(false, Some(Vec::new()))
    }

    pub fn with(pregranted: bool, respond: Option<Vec<Capability>>) -> (Self, Arc<AtomicU32>) {
        let requests = Arc::new(AtomicU32::new(0));
        (
            Self {
                pregranted,
                respond,
                requests: requests.clone(),
            },
            requests,
        )
    }
}

impl CapabilityHost for FakeHost {
    fn is_granted(&self, _capability: Capability) -> bool {
        self.pregranted
    }

    fn request(&mut self, _capabilities: &[Capability], sink: EventSink<ControlEvent>) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(granted) = &self.respond {
            sink.post(ControlEvent::PermissionResult {
                granted: granted.clone(),
            });
        }
    }
}

// --- notifier fake ----------------------------------------------------------

pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let messages = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                messages: messages.clone(),
            },
            messages,
        )
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// --- stub surface -----------------------------------------------------------

struct StubSurface;

impl raw_window_handle::HasWindowHandle for StubSurface {
    fn window_handle(
        &self,
    ) -> std::result::Result<raw_window_handle::WindowHandle<'_>, raw_window_handle::HandleError>
    {
        Err(raw_window_handle::HandleError::Unavailable)
    }
}

impl raw_window_handle::HasDisplayHandle for StubSurface {
    fn display_handle(
        &self,
    ) -> std::result::Result<raw_window_handle::DisplayHandle<'_>, raw_window_handle::HandleError>
    {
        Err(raw_window_handle::HandleError::Unavailable)
    }
}

pub fn stub_surface() -> SurfaceHandle {
    Arc::new(StubSurface)
}

// --- harness ----------------------------------------------------------------

/// A coordinator wired to fakes, with probes for every collaborator.
pub struct Harness {
    pub coordinator: Coordinator,
    pub tracker: Arc<TrackerProbe>,
    pub render: Arc<RenderProbe>,
    pub requests: Arc<AtomicU32>,
    pub notes: Arc<Mutex<Vec<String>>>,
    pub t0: Instant,
}

pub struct HarnessOptions {
    pub pregranted: bool,
    pub respond: Option<Vec<Capability>>,
    pub catalog: FakeCatalog,
    pub start: StartBehavior,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            pregranted: true,
            respond: Some(vec![Capability::Camera]),
            catalog: FakeCatalog::with_giraffe(),
            start: StartBehavior::Succeed,
        }
    }
}

impl Harness {
    pub fn new(options: HarnessOptions) -> Self {
        let (tracker, tracker_probe) = FakeTracker::new(options.start);
        let (render, render_probe) = FakeRender::new();
        let (host, requests) = FakeHost::with(options.pregranted, options.respond);
        let (notifier, notes) = RecordingNotifier::new();

        let coordinator = Coordinator::new(
            SessionConfig::default(),
            Box::new(tracker),
            Box::new(render),
            Box::new(options.catalog),
            Box::new(host),
            Box::new(notifier),
        );

        Self {
            coordinator,
            tracker: tracker_probe,
            render: render_probe,
            requests,
            notes,
            t0: Instant::now(),
        }
    }

    /// Time `offset_ms` after the harness was created.
    pub fn at(&self, offset_ms: u64) -> Instant {
        self.t0 + Duration::from_millis(offset_ms)
    }

    /// Posts a control event and drains it at `offset_ms`.
    pub fn deliver(&mut self, event: ControlEvent, offset_ms: u64) {
        self.coordinator.sink().post(event);
        self.coordinator.pump(self.at(offset_ms));
    }

    /// Signals surface-ready and pumps the (auto-responding) consent flow.
    pub fn start_session(&mut self) {
        self.coordinator.on_surface_ready(stub_surface());
        self.coordinator.pump(self.t0);
    }

    /// Drives the full bring-up to `Active`.
    pub fn advance_to_active(&mut self) {
        self.start_session();
        self.deliver(ControlEvent::EngineInitialized { success: true }, 0);
        self.deliver(ControlEvent::ModelLoaded { success: true }, 0);
        assert_eq!(
            *self.coordinator.phase(),
            mirage_session::Phase::Active,
            "harness failed to reach Active"
        );
    }

    pub fn failure_code(&self) -> Option<&'static str> {
        match self.coordinator.phase() {
            mirage_session::Phase::Failed(reason) => Some(reason.code()),
            _ => None,
        }
    }
}
