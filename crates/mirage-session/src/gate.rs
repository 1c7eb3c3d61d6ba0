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

//! The permission gate: capability queries and the consent flow trigger.

use mirage_core::event::{ControlEvent, EventSink};
use mirage_core::platform::{Capability, CapabilityHost};

/// Wraps the platform's capability API for the one capability set this
/// session needs.
///
/// A denial is terminal for the current session; the gate never retries on
/// its own.
pub struct PermissionGate {
    host: Box<dyn CapabilityHost>,
    required: Vec<Capability>,
}

impl PermissionGate {
    /// Creates a gate requiring camera access.
    pub fn new(host: Box<dyn CapabilityHost>) -> Self {
        Self {
            host,
            required: vec![Capability::Camera],
        }
    }

    /// The capabilities this session requires.
    pub fn required(&self) -> &[Capability] {
        &self.required
    }

    /// Returns whether every required capability is currently granted.
    pub fn has_all_required(&self) -> bool {
        self.required.iter().all(|&c| self.host.is_granted(c))
    }

    /// Triggers the OS consent flow for the full required set.
    ///
    /// Always requests, even when [`has_all_required`](Self::has_all_required)
    /// already reports granted: some tracking-engine builds keep an internal
    /// permission cache that desynchronizes from a stale platform grant, and
    /// re-asserting the request is the documented workaround. The result
    /// arrives later as a one-shot [`ControlEvent::PermissionResult`].
    pub fn request(&mut self, sink: EventSink<ControlEvent>) {
        log::info!(
            "Requesting capabilities: {:?} (unconditional re-assert)",
            self.required
        );
        let required = self.required.clone();
        self.host.request(&required, sink);
    }

    /// Returns whether a grant result covers every required capability.
    pub fn covers(&self, granted: &[Capability]) -> bool {
        self.required.iter().all(|c| granted.contains(c))
    }
}
