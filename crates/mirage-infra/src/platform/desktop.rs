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

//! Desktop stand-ins for the mobile host platform.

use mirage_core::event::{ControlEvent, EventSink};
use mirage_core::platform::{Capability, CapabilityHost, Notifier};

/// A capability host for desktop development.
///
/// Desktops have no runtime consent dialog, so the grant set is fixed at
/// construction and the "consent flow" answers immediately — still through
/// the control queue, so the coordinator sees the same asynchronous shape
/// it would on a phone.
pub struct DesktopCapabilityHost {
    granted: Vec<Capability>,
}

impl DesktopCapabilityHost {
    /// A host that grants everything it is asked for.
    pub fn granting_all() -> Self {
        Self {
            granted: vec![Capability::Camera],
        }
    }

    /// A host that grants nothing, for exercising the denial path.
    pub fn denying() -> Self {
        Self {
            granted: Vec::new(),
        }
    }
}

impl CapabilityHost for DesktopCapabilityHost {
    fn is_granted(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    fn request(&mut self, capabilities: &[Capability], sink: EventSink<ControlEvent>) {
        let granted: Vec<Capability> = capabilities
            .iter()
            .copied()
            .filter(|c| self.granted.contains(c))
            .collect();
        log::debug!("Desktop consent flow: requested {capabilities:?}, granting {granted:?}.");
        sink.post(ControlEvent::PermissionResult { granted });
    }
}

/// A notifier that routes user-facing messages to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::warn!("USER NOTICE: {message}");
    }
}
