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

//! Contract for the external target-tracking engine.

use crate::asset::AssetDescriptor;
use crate::event::{ControlEvent, EventSink};
use crate::math::Pose;
use anyhow::Result;

/// A target detection event reported by the tracking engine.
///
/// Only one target is assumed active at a time in this design, but `Found`,
/// `Tracking`, and `Lost` may interleave in any order for distinct target
/// names; consumers must key on the name, not on event order.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingEvent {
    /// The named target entered the camera view.
    Found(String),
    /// The named target left the camera view.
    Lost(String),
    /// A fresh pose estimate for a target currently in view.
    Tracking {
        /// The tracked target's name.
        target: String,
        /// The target's rigid transform relative to the camera.
        pose: Pose,
    },
}

impl TrackingEvent {
    /// Returns the name of the target this event concerns.
    pub fn target(&self) -> &str {
        match self {
            TrackingEvent::Found(name) | TrackingEvent::Lost(name) => name,
            TrackingEvent::Tracking { target, .. } => target,
        }
    }
}

/// The opaque tracking engine, wrapped by the session's lifecycle adapter.
///
/// `setup` and `load_model` are fire-and-forget: completion is reported
/// solely through [`ControlEvent::EngineInitialized`] and
/// [`ControlEvent::ModelLoaded`] posted into the bound sink, asynchronously,
/// on an unspecified executor. Implementations must never call back into
/// session state directly; the sink is the only channel out.
///
/// An `Err` from any operation means an unexpected engine fault (as opposed
/// to a clean `false` result); the caller maps it to an internal failure
/// rather than letting it propagate.
pub trait TrackingEngine: Send {
    /// Binds the sink all engine callbacks are delivered through.
    ///
    /// Binding *replaces* any previously bound sink, it never stacks: there
    /// is exactly one active owner of engine callbacks at any time.
    fn bind(&mut self, sink: EventSink<ControlEvent>);

    /// Begins asynchronous engine setup.
    fn setup(&mut self) -> Result<()>;

    /// Begins asynchronously loading the 3D model for the given asset.
    fn load_model(&mut self, asset: &AssetDescriptor) -> Result<()>;

    /// Starts target detection. Returns `Ok(false)` if the engine cleanly
    /// refused to start.
    fn start_detection(&mut self) -> Result<bool>;

    /// Suspends camera capture and detection.
    fn pause(&mut self) -> Result<()>;

    /// Resumes a previously paused engine.
    fn resume(&mut self) -> Result<()>;

    /// Releases all engine resources. Called exactly once, at teardown.
    fn cleanup(&mut self) -> Result<()>;
}
