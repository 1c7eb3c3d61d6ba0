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

//! Contract for the external render engine and its drawing surface.

use crate::math::Pose;
use anyhow::Result;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::sync::Arc;

/// Combines the windowing handle traits graphics backends require, so a
/// single trait object can satisfy Rust's trait-object rules.
pub trait SurfaceHandles: HasWindowHandle + HasDisplayHandle {}

// Blanket impl: anything that exposes both handles is a valid surface.
impl<T: HasWindowHandle + HasDisplayHandle> SurfaceHandles for T {}

/// A thread-safe, shared handle to the drawing surface the render engine
/// draws the overlay into.
pub type SurfaceHandle = Arc<dyn SurfaceHandles + Send + Sync>;

/// The opaque render engine, driven by the session's surface binder.
///
/// The engine is purely a sink from the coordinator's point of view: poses
/// flow in, nothing flows back. Show/update/hide are fire-and-forget at the
/// call site; an `Err` from them is logged by the caller, never escalated.
pub trait RenderEngine: Send {
    /// Binds the engine to a drawing surface. At most once per surface
    /// instance.
    fn attach(&mut self, surface: SurfaceHandle) -> Result<()>;

    /// Tears the engine down. Idempotent, and safe to call even if
    /// [`attach`](RenderEngine::attach) never succeeded.
    fn release(&mut self);

    /// Makes the overlay asset visible.
    fn show_asset(&mut self) -> Result<()>;

    /// Updates the overlay's transform from a fresh tracking pose.
    fn update_transform(&mut self, pose: &Pose) -> Result<()>;

    /// Hides the overlay asset.
    fn hide_asset(&mut self) -> Result<()>;
}
