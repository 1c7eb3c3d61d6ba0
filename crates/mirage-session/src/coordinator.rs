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

//! The initialization coordinator: the state machine that sequences
//! permission acquisition, tracking engine bring-up, asset inspection,
//! model load, and target detection, and relays tracking events to the
//! renderer while the session is active.
//!
//! Everything here runs on a single control thread. Collaborators complete
//! on their own executors and report back through the control queue; the
//! host loop calls [`Coordinator::pump`] (or [`Coordinator::run_until`]) to
//! drain marshaled events and fire due timers. No transition proceeds until
//! the previous asynchronous step's completion has been observed, and each
//! completion is honored at most once — duplicates and out-of-phase
//! arrivals are dropped.

use crate::adapter::TrackingLifecycleAdapter;
use crate::binder::RenderSurfaceBinder;
use crate::config::SessionConfig;
use crate::gate::PermissionGate;
use crate::inspector::AssetInspector;
use crate::session::{Phase, PermissionState, Session};
use crate::timer::SingleShot;
use mirage_core::asset::AssetCatalog;
use mirage_core::event::{ControlEvent, ControlQueue, EventSink};
use mirage_core::platform::{Capability, CapabilityHost, Notifier};
use mirage_core::render::{RenderEngine, SurfaceHandle};
use mirage_core::tracking::{TrackingEngine, TrackingEvent};
use mirage_core::FailureReason;
use std::time::Instant;

/// Sequences the AR session's bring-up, foreground/background cycle, and
/// teardown.
///
/// Owns the [`Session`] exclusively; at most one coordinator exists per
/// running application instance, constructed when the host surface is
/// created and destroyed with it.
pub struct Coordinator {
    config: SessionConfig,
    session: Session,
    adapter: TrackingLifecycleAdapter,
    binder: RenderSurfaceBinder,
    gate: PermissionGate,
    inspector: AssetInspector,
    notifier: Box<dyn Notifier>,
    queue: ControlQueue<ControlEvent>,
    surface: Option<SurfaceHandle>,
    // Single-shot recovery for a missed/delayed setup completion.
    init_recheck: SingleShot,
    // Single-shot re-entry into the bring-up sequence after foreground-resume.
    resume_reentry: SingleShot,
    destroyed: bool,
}

impl Coordinator {
    /// Creates a coordinator and binds itself as the single owner of the
    /// tracking engine's callbacks.
    pub fn new(
        config: SessionConfig,
        tracking: Box<dyn TrackingEngine>,
        render: Box<dyn RenderEngine>,
        catalog: Box<dyn AssetCatalog>,
        host: Box<dyn CapabilityHost>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let queue = ControlQueue::new();
        let mut adapter = TrackingLifecycleAdapter::new(tracking);
        adapter.bind_callbacks(queue.sink());

        Self {
            config,
            session: Session::new(),
            adapter,
            binder: RenderSurfaceBinder::new(render),
            gate: PermissionGate::new(host),
            inspector: AssetInspector::new(catalog),
            notifier,
            queue,
            surface: None,
            init_recheck: SingleShot::new(),
            resume_reentry: SingleShot::new(),
            destroyed: false,
        }
    }

    /// The session owned by this coordinator.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current state machine phase.
    pub fn phase(&self) -> &Phase {
        self.session.phase()
    }

    /// A sink for posting control events from the host or from tests.
    pub fn sink(&self) -> EventSink<ControlEvent> {
        self.queue.sink()
    }

    /// The earliest pending timer deadline, if any.
    ///
    /// Host loops block on the control queue until this instant instead of
    /// polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.init_recheck.due(), self.resume_reentry.due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Entry point: the host's drawing surface is ready.
    ///
    /// Starts the bring-up sequence by re-requesting the capability grant,
    /// unconditionally, even if a stale grant is already in place.
    pub fn on_surface_ready(&mut self, surface: SurfaceHandle) {
        if self.destroyed {
            return;
        }
        if *self.session.phase() != Phase::Idle {
            log::debug!(
                "Surface ready ignored in phase {}.",
                self.session.phase()
            );
            return;
        }
        self.surface = Some(surface);
        self.begin_permission_request();
    }

    /// Drains every marshaled event and fires due timers.
    ///
    /// A fired timer can enqueue new work (the resume re-entry posts a
    /// fresh permission request), so draining repeats until quiescent.
    pub fn pump(&mut self, now: Instant) {
        loop {
            let mut progressed = false;
            for event in self.queue.try_drain() {
                progressed = true;
                self.handle_event(event, now);
            }
            if self.fire_timers(now) {
                progressed = true;
            }
            if !progressed {
                break;
            }
        }
    }

    /// Runs the control loop until `deadline`, blocking on the queue
    /// between events instead of spinning.
    pub fn run_until(&mut self, deadline: Instant) {
        loop {
            let now = Instant::now();
            if now >= deadline || self.destroyed {
                break;
            }
            let wait_until = self
                .next_deadline()
                .map_or(deadline, |due| due.min(deadline));
            if let Some(event) = self.queue.recv_deadline(wait_until) {
                self.handle_event(event, Instant::now());
            }
            self.pump(Instant::now());
        }
    }

    /// Applies one marshaled collaborator result to the state machine.
    ///
    /// Public so hosts that own their own event loop can feed events
    /// directly; each event is guarded by the current phase, so stale or
    /// duplicated completions are logged and dropped.
    pub fn handle_event(&mut self, event: ControlEvent, now: Instant) {
        if self.destroyed {
            log::debug!("Event after destroy dropped: {event:?}");
            return;
        }
        match event {
            ControlEvent::PermissionResult { granted } => self.on_permission_result(granted, now),
            ControlEvent::EngineInitialized { success } => self.on_engine_initialized(success),
            ControlEvent::ModelLoaded { success } => self.on_model_loaded(success),
            ControlEvent::Target(event) => self.on_target(event),
        }
    }

    // ---- bring-up sequence -------------------------------------------------

    fn begin_permission_request(&mut self) {
        self.session.set_phase(Phase::PermissionPending);
        self.gate.request(self.queue.sink());
    }

    fn on_permission_result(&mut self, granted: Vec<Capability>, now: Instant) {
        if *self.session.phase() != Phase::PermissionPending {
            log::debug!(
                "Permission result ignored in phase {}.",
                self.session.phase()
            );
            return;
        }
        if self.gate.covers(&granted) {
            self.session.set_permission(PermissionState::Granted);
            self.enter_engine_initializing(now);
        } else {
            self.session.set_permission(PermissionState::Denied);
            self.fail(FailureReason::PermissionDenied);
        }
    }

    fn enter_engine_initializing(&mut self, now: Instant) {
        self.session.set_phase(Phase::EngineInitializing);

        let Some(surface) = self.surface.clone() else {
            self.fail_internal(anyhow::anyhow!("no drawing surface stored"));
            return;
        };
        if let Err(e) = self.binder.attach(surface) {
            self.fail_internal(e);
            return;
        }
        if let Err(e) = self.adapter.setup() {
            self.fail_internal(e);
            return;
        }

        // Some platform/driver combinations lose or indefinitely delay the
        // setup completion callback. Re-issue setup once if it is still
        // outstanding when this fires; the timer is cancelled as soon as
        // the completion arrives.
        self.init_recheck.arm(now + self.config.init_recheck_delay());
    }

    fn on_engine_initialized(&mut self, success: bool) {
        if *self.session.phase() != Phase::EngineInitializing {
            log::debug!(
                "Engine-initialized callback ignored in phase {}.",
                self.session.phase()
            );
            return;
        }
        self.init_recheck.cancel();

        if !success {
            self.fail(FailureReason::EngineInitFailed);
            return;
        }
        self.session.mark_engine_initialized();
        self.session.set_phase(Phase::AssetChecking);

        self.inspector.survey();
        let descriptor = self.inspector.describe(&self.config.asset_name);
        if !descriptor.is_valid {
            self.fail(FailureReason::InvalidAsset);
            return;
        }
        self.session.set_phase(Phase::ModelLoading);
        if let Err(e) = self.adapter.load_model(&descriptor) {
            self.fail_internal(e);
        }
    }

    fn on_model_loaded(&mut self, success: bool) {
        if *self.session.phase() != Phase::ModelLoading {
            log::debug!(
                "Model-loaded callback ignored in phase {}.",
                self.session.phase()
            );
            return;
        }
        if !success {
            self.fail(FailureReason::ModelLoadFailed);
            return;
        }
        self.session.set_phase(Phase::DetectionStarting);
        match self.adapter.start_detection() {
            Ok(true) => {
                self.session.set_phase(Phase::Active);
                log::info!("[{}] AR session active.", self.session.id());
            }
            Ok(false) => self.fail(FailureReason::DetectionStartFailed),
            Err(e) => self.fail_internal(e),
        }
    }

    // ---- target relay ------------------------------------------------------

    fn on_target(&mut self, event: TrackingEvent) {
        if *self.session.phase() != Phase::Active {
            log::trace!(
                "Target event for '{}' dropped in phase {}.",
                event.target(),
                self.session.phase()
            );
            return;
        }
        match event {
            TrackingEvent::Found(name) => {
                log::info!("Target found: {name}");
                self.session.set_active_target(&name);
                self.binder.show_asset();
            }
            TrackingEvent::Tracking { target, pose } => {
                if !pose.is_finite() {
                    log::warn!("Dropping non-finite pose for target '{target}'.");
                    return;
                }
                self.binder.update_transform(&pose);
            }
            TrackingEvent::Lost(name) => {
                log::info!("Target lost: {name}");
                self.session.clear_active_target();
                self.binder.hide_asset();
            }
        }
    }

    // ---- lifecycle (driven by the bridge) ----------------------------------

    /// Foreground-resume. Resumes a paused engine, or — when the engine
    /// never came up and the capability is granted — arms the bounded,
    /// delayed re-entry into the bring-up sequence.
    pub fn on_resumed(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        match self.session.phase() {
            Phase::Paused => match self.adapter.resume() {
                Ok(()) => self.session.set_phase(Phase::Active),
                // Stay paused; the next foreground cycle may succeed.
                Err(e) => log::error!("Tracking engine resume failed: {e:#}"),
            },
            Phase::Active => {}
            _ => {
                if self.gate.has_all_required() && !self.session.engine_initialized() {
                    log::info!(
                        "Engine not initialized on resume; scheduling delayed re-entry."
                    );
                    self.resume_reentry
                        .arm(now + self.config.resume_retry_delay());
                }
            }
        }
    }

    /// Background-pause. Failures are logged, never escalated.
    pub fn on_suspended(&mut self, _now: Instant) {
        if self.destroyed {
            return;
        }
        if *self.session.phase() == Phase::Active {
            if let Err(e) = self.adapter.pause() {
                log::error!("Tracking engine pause failed: {e:#}");
            }
            self.session.set_phase(Phase::Paused);
        }
    }

    /// Tears the session down, from any phase. Best-effort with no failure
    /// path: pending timers are preempted and both engines are released
    /// exactly once. Repeat calls are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.init_recheck.cancel();
        self.resume_reentry.cancel();

        if let Err(e) = self.adapter.cleanup() {
            log::error!("Tracking engine cleanup failed: {e:#}");
        }
        self.binder.release();
        log::info!("[{}] Session destroyed.", self.session.id());
    }

    // ---- timers ------------------------------------------------------------

    fn fire_timers(&mut self, now: Instant) -> bool {
        let mut fired = false;
        if self.init_recheck.fire_if_due(now) {
            fired = true;
            self.on_init_recheck();
        }
        if self.resume_reentry.fire_if_due(now) {
            fired = true;
            self.on_resume_reentry(now);
        }
        fired
    }

    /// The bounded, single-shot recovery for a silent engine setup: fires
    /// at most once per entry into `EngineInitializing` and only re-issues
    /// setup if the completion is still outstanding.
    fn on_init_recheck(&mut self) {
        if *self.session.phase() != Phase::EngineInitializing
            || self.session.engine_initialized()
        {
            log::debug!("Stale init re-check ignored.");
            return;
        }
        log::warn!("Engine setup still outstanding; re-issuing setup once.");
        if let Err(e) = self.adapter.setup() {
            self.fail_internal(e);
        }
    }

    /// The resume re-entry: restarts the bring-up sequence from the
    /// capability request, but only if no sequence is in flight — the
    /// machine must be in `Idle` or `Failed` at fire time. One owner, ever.
    fn on_resume_reentry(&mut self, _now: Instant) {
        let eligible = matches!(self.session.phase(), Phase::Idle | Phase::Failed(_));
        if !eligible || self.session.engine_initialized() || !self.gate.has_all_required() {
            log::debug!(
                "Resume re-entry skipped in phase {}.",
                self.session.phase()
            );
            return;
        }
        if self.surface.is_none() {
            log::debug!("Resume re-entry skipped: no drawing surface yet.");
            return;
        }
        log::info!("Re-entering initialization sequence after resume.");
        self.begin_permission_request();
    }

    // ---- failure -----------------------------------------------------------

    fn fail(&mut self, reason: FailureReason) {
        log::error!(
            "[{}] Session failed ({}): {}",
            self.session.id(),
            reason.code(),
            reason
        );
        self.notifier.notify(&reason.to_string());
        // The guarded state is gone; a pending re-check must not act on it.
        self.init_recheck.cancel();
        self.session.set_phase(Phase::Failed(reason));
    }

    fn fail_internal(&mut self, error: anyhow::Error) {
        log::error!("Unexpected collaborator fault: {error:#}");
        self.fail(FailureReason::Internal(error.to_string()));
    }
}
