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

//! Contracts for the host platform: capabilities, lifecycle, notifications.

use crate::event::{ControlEvent, EventSink};
use std::fmt;

/// A device capability the session may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Access to the device camera feed.
    Camera,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Camera => write!(f, "camera"),
        }
    }
}

/// The host platform's capability-grant API.
///
/// `request` triggers the OS consent flow and returns immediately; the host
/// later delivers a one-shot [`ControlEvent::PermissionResult`] through the
/// provided sink with the set of capabilities the user actually granted.
pub trait CapabilityHost: Send {
    /// Returns whether the given capability is currently granted.
    fn is_granted(&self, capability: Capability) -> bool;

    /// Triggers the asynchronous OS consent flow for the given capabilities.
    fn request(&mut self, capabilities: &[Capability], sink: EventSink<ControlEvent>);
}

/// A host application lifecycle signal, as delivered on the control thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// The application entered the foreground.
    Resumed,
    /// The application entered the background.
    Suspended,
    /// The host surface is being torn down for good.
    Destroyed,
}

/// The user-facing notification surface.
///
/// Every session failure is surfaced through this in addition to being
/// logged with its cause; the host decides how to present it (the mobile
/// shell raises a toast, the desktop demo logs).
pub trait Notifier: Send {
    /// Shows a human-readable message to the user.
    fn notify(&self, message: &str);
}
