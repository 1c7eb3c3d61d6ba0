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

//! The tracking lifecycle adapter: a uniform, logged wrapper around the
//! opaque tracking engine's operations.

use anyhow::Result;
use mirage_core::asset::AssetDescriptor;
use mirage_core::event::{ControlEvent, EventSink};
use mirage_core::tracking::TrackingEngine;

/// Wraps the tracking engine behind a uniform callback contract.
///
/// Every operation is logged on entry so the bring-up sequence can be
/// reconstructed from the log alone. Completion of `setup` and `load_model`
/// is reported solely through the bound sink — asynchronously, on an
/// executor this crate makes no assumptions about.
pub struct TrackingLifecycleAdapter {
    engine: Box<dyn TrackingEngine>,
}

impl TrackingLifecycleAdapter {
    /// Creates an adapter over the given engine.
    pub fn new(engine: Box<dyn TrackingEngine>) -> Self {
        Self { engine }
    }

    /// Binds the sink engine callbacks are marshaled through.
    ///
    /// Re-binding replaces the previous sink; there is exactly one active
    /// owner of engine callbacks at any time.
    pub fn bind_callbacks(&mut self, sink: EventSink<ControlEvent>) {
        log::debug!("Binding tracking engine callback sink (replaces any previous).");
        self.engine.bind(sink);
    }

    /// Begins asynchronous engine setup. Completion arrives as
    /// [`ControlEvent::EngineInitialized`].
    pub fn setup(&mut self) -> Result<()> {
        log::info!("Tracking engine setup requested.");
        self.engine.setup()
    }

    /// Begins asynchronously loading the 3D model. Completion arrives as
    /// [`ControlEvent::ModelLoaded`].
    pub fn load_model(&mut self, asset: &AssetDescriptor) -> Result<()> {
        log::info!(
            "Loading model '{}' ({} bytes).",
            asset.name,
            asset.size_bytes
        );
        self.engine.load_model(asset)
    }

    /// Starts target detection. `Ok(false)` means the engine cleanly
    /// refused.
    pub fn start_detection(&mut self) -> Result<bool> {
        log::info!("Starting target detection.");
        self.engine.start_detection()
    }

    /// Suspends camera capture and detection.
    pub fn pause(&mut self) -> Result<()> {
        log::info!("Pausing tracking engine.");
        self.engine.pause()
    }

    /// Resumes a previously paused engine.
    pub fn resume(&mut self) -> Result<()> {
        log::info!("Resuming tracking engine.");
        self.engine.resume()
    }

    /// Releases all engine resources.
    pub fn cleanup(&mut self) -> Result<()> {
        log::info!("Cleaning up tracking engine.");
        self.engine.cleanup()
    }
}
