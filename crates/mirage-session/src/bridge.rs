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

//! The lifecycle bridge: maps host application lifecycle signals onto
//! coordinator operations.
//!
//! Host windowing layers deliver foreground/background/teardown signals on
//! the control thread (winit's `resumed`/`suspended`, an Android activity's
//! `onResume`/`onPause`/`onDestroy`); this is the single place they are
//! translated into session operations, so the mapping in one direction and
//! the coordinator's guards in the other stay independently testable.

use crate::coordinator::Coordinator;
use mirage_core::platform::LifecycleSignal;
use std::time::Instant;

/// Applies one host lifecycle signal to the coordinator.
///
/// - `Resumed`: resume a paused session, or schedule the bounded re-entry
///   if the engine never initialized.
/// - `Suspended`: pause an active session; failures are logged, not
///   escalated.
/// - `Destroyed`: tear everything down, from any phase.
pub fn dispatch(coordinator: &mut Coordinator, signal: LifecycleSignal, now: Instant) {
    log::debug!("Lifecycle signal: {signal:?}");
    match signal {
        LifecycleSignal::Resumed => coordinator.on_resumed(now),
        LifecycleSignal::Suspended => coordinator.on_suspended(now),
        LifecycleSignal::Destroyed => coordinator.destroy(),
    }
}
