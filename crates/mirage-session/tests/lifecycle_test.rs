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

//! Integration tests for the foreground/background/destroy lifecycle.

mod common;

use common::{Harness, HarnessOptions};
use mirage_core::event::ControlEvent;
use mirage_core::platform::LifecycleSignal;
use mirage_core::tracking::TrackingEvent;
use mirage_session::{bridge, Phase};
use std::sync::atomic::Ordering;

#[test]
fn pause_resume_cycle_preserves_active_target() {
    let mut h = Harness::new(HarnessOptions::default());
    h.advance_to_active();
    h.deliver(ControlEvent::Target(TrackingEvent::Found("giraffe".to_string())), 0);

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Suspended, ts);
    assert_eq!(*h.coordinator.phase(), Phase::Paused);
    assert_eq!(h.tracker.pause_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.coordinator.session().active_target(), Some("giraffe"));

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Resumed, ts);
    assert_eq!(*h.coordinator.phase(), Phase::Active);
    assert_eq!(h.tracker.resume_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.coordinator.session().active_target(), Some("giraffe"));
}

#[test]
fn target_events_are_dropped_while_paused() {
    let mut h = Harness::new(HarnessOptions::default());
    h.advance_to_active();
    h.deliver(ControlEvent::Target(TrackingEvent::Found("giraffe".to_string())), 0);
    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Suspended, ts);

    h.deliver(ControlEvent::Target(TrackingEvent::Lost("giraffe".to_string())), 0);

    // The lost event must not have reached the session or the renderer.
    assert_eq!(h.coordinator.session().active_target(), Some("giraffe"));
    assert_eq!(h.render.hide_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn suspend_outside_active_is_a_no_op() {
    let mut h = Harness::new(HarnessOptions::default());

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Suspended, ts);
    assert_eq!(*h.coordinator.phase(), Phase::Idle);
    assert_eq!(h.tracker.pause_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn destroy_from_idle_releases_both_engines_once() {
    let mut h = Harness::new(HarnessOptions::default());

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Destroyed, ts);
    assert_eq!(h.tracker.cleanup_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.render.release_count(), 1);

    // Repeat destroys are inert.
    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Destroyed, ts);
    assert_eq!(h.tracker.cleanup_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.render.release_count(), 1);
}

#[test]
fn destroy_from_failed_releases_both_engines_once() {
    let mut h = Harness::new(HarnessOptions {
        respond: Some(Vec::new()),
        ..Default::default()
    });
    h.start_session();
    assert_eq!(h.failure_code(), Some("permission_denied"));

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Destroyed, ts);
    assert_eq!(h.tracker.cleanup_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.render.release_count(), 1);
}

#[test]
fn destroy_from_active_releases_both_engines_once() {
    let mut h = Harness::new(HarnessOptions::default());
    h.advance_to_active();

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Destroyed, ts);
    assert_eq!(h.tracker.cleanup_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.render.release_count(), 1);
}

#[test]
fn destroy_preempts_a_pending_recheck() {
    let mut h = Harness::new(HarnessOptions::default());
    h.start_session();
    assert_eq!(*h.coordinator.phase(), Phase::EngineInitializing);

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Destroyed, ts);

    // The re-check deadline passes; the preempted timer must not re-issue
    // setup on a torn-down engine.
    h.coordinator.pump(h.at(60_000));
    assert_eq!(h.tracker.setup_count(), 1);
}

#[test]
fn events_after_destroy_are_dropped() {
    let mut h = Harness::new(HarnessOptions::default());
    h.advance_to_active();
    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Destroyed, ts);

    h.deliver(ControlEvent::Target(TrackingEvent::Found("giraffe".to_string())), 0);
    assert_eq!(h.coordinator.session().active_target(), None);
    assert_eq!(h.render.show_count(), 0);
}

#[test]
fn resume_after_init_failure_restarts_the_sequence() {
    let mut h = Harness::new(HarnessOptions::default());
    h.start_session();
    h.deliver(ControlEvent::EngineInitialized { success: false }, 0);
    assert_eq!(h.failure_code(), Some("engine_init_failed"));

    // Foreground-resume with a granted capability and an engine that never
    // came up: a delayed re-entry is scheduled...
    let ts = h.at(1_000);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Resumed, ts);
    assert_eq!(h.requests.load(Ordering::SeqCst), 1);

    // ...and fires after the delay, restarting from the permission request.
    h.coordinator.pump(h.at(1_600));
    assert_eq!(h.requests.load(Ordering::SeqCst), 2);
    assert_eq!(*h.coordinator.phase(), Phase::EngineInitializing);
    assert_eq!(h.tracker.setup_count(), 2);

    // The restarted sequence can complete normally.
    h.deliver(ControlEvent::EngineInitialized { success: true }, 1_600);
    h.deliver(ControlEvent::ModelLoaded { success: true }, 1_600);
    assert_eq!(*h.coordinator.phase(), Phase::Active);
}

#[test]
fn resume_reentry_refuses_while_a_sequence_is_in_flight() {
    let mut h = Harness::new(HarnessOptions::default());
    h.start_session();
    assert_eq!(*h.coordinator.phase(), Phase::EngineInitializing);
    assert_eq!(h.requests.load(Ordering::SeqCst), 1);

    // A resume lands while bring-up is still in flight; the re-entry must
    // not start a second permission request on top of it.
    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Resumed, ts);
    h.coordinator.pump(h.at(2_000));

    assert_eq!(h.requests.load(Ordering::SeqCst), 1);
    assert_eq!(*h.coordinator.phase(), Phase::EngineInitializing);
}

#[test]
fn resume_without_grant_does_not_schedule_reentry() {
    let mut h = Harness::new(HarnessOptions {
        pregranted: false,
        respond: Some(Vec::new()),
        ..Default::default()
    });
    h.start_session();
    assert_eq!(h.failure_code(), Some("permission_denied"));

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Resumed, ts);
    h.coordinator.pump(h.at(2_000));

    // Denied is terminal: no second consent request is ever issued.
    assert_eq!(h.requests.load(Ordering::SeqCst), 1);
    assert_eq!(h.failure_code(), Some("permission_denied"));
}

#[test]
fn resume_while_active_is_a_no_op() {
    let mut h = Harness::new(HarnessOptions::default());
    h.advance_to_active();

    let ts = h.at(0);
    bridge::dispatch(&mut h.coordinator, LifecycleSignal::Resumed, ts);
    assert_eq!(*h.coordinator.phase(), Phase::Active);
    assert_eq!(h.tracker.resume_calls.load(Ordering::SeqCst), 0);
}
