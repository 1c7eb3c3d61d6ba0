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

//! Primitives for marshaling collaborator callbacks onto the control thread.
//!
//! The coordinator is single-threaded by construction: the tracking engine
//! and the platform's consent flow complete on their own executors, and
//! everything they report must cross back through a [`ControlQueue`] before
//! it may touch session state. [`EventSink`] is the cloneable, `Send` half
//! that collaborators hold; the queue's owner drains it from the control
//! thread.

mod queue;

pub use queue::{ControlQueue, EventSink};

use crate::platform::Capability;
use crate::tracking::TrackingEvent;

/// A collaborator result marshaled onto the control thread.
///
/// Each variant corresponds to one asynchronous completion category. The
/// first three fire once per logical request; `Target` is long-lived for
/// the duration of an active detection session.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// One-shot result of the OS consent flow: the set of capabilities the
    /// user actually granted.
    PermissionResult {
        /// Capabilities granted by the user, possibly a subset of those
        /// requested.
        granted: Vec<Capability>,
    },
    /// The tracking engine finished (or failed) its asynchronous setup.
    EngineInitialized {
        /// Whether setup completed successfully.
        success: bool,
    },
    /// The tracking engine finished (or failed) loading the 3D model.
    ModelLoaded {
        /// Whether the model load completed successfully.
        success: bool,
    },
    /// A target detection event from an active tracking session.
    Target(TrackingEvent),
}
