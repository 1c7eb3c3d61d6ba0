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

//! The render surface binder: attaches the render engine to a drawing
//! surface and owns its teardown.

use anyhow::Result;
use mirage_core::math::Pose;
use mirage_core::render::{RenderEngine, SurfaceHandle};

/// Owns the render engine's surface binding and teardown.
///
/// Purely a sink from the coordinator's point of view: show/update/hide are
/// forwarded fire-and-forget and their failures are logged, never
/// escalated. Only `attach` can fail the bring-up sequence.
pub struct RenderSurfaceBinder {
    engine: Box<dyn RenderEngine>,
    attached: bool,
    released: bool,
}

impl RenderSurfaceBinder {
    /// Creates a binder over the given render engine.
    pub fn new(engine: Box<dyn RenderEngine>) -> Self {
        Self {
            engine,
            attached: false,
            released: false,
        }
    }

    /// Binds the render engine to the drawing surface.
    ///
    /// At most once per surface instance: a repeat call is a logged no-op.
    pub fn attach(&mut self, surface: SurfaceHandle) -> Result<()> {
        if self.attached {
            log::warn!("Render surface already attached; ignoring repeat attach.");
            return Ok(());
        }
        self.engine.attach(surface)?;
        self.attached = true;
        log::info!("Render engine attached to drawing surface.");
        Ok(())
    }

    /// Tears down the render engine.
    ///
    /// Idempotent, and safe even if [`attach`](Self::attach) never
    /// succeeded; teardown has no failure path.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.engine.release();
        self.released = true;
        self.attached = false;
        log::info!("Render engine released.");
    }

    /// Forwards a "show asset" instruction. Fire-and-forget.
    pub fn show_asset(&mut self) {
        if let Err(e) = self.engine.show_asset() {
            log::error!("Render engine failed to show asset: {e:#}");
        }
    }

    /// Forwards a fresh pose to the rendered overlay. Fire-and-forget.
    pub fn update_transform(&mut self, pose: &Pose) {
        if let Err(e) = self.engine.update_transform(pose) {
            log::error!("Render engine failed to update transform: {e:#}");
        }
    }

    /// Forwards a "hide asset" instruction. Fire-and-forget.
    pub fn hide_asset(&mut self) {
        if let Err(e) = self.engine.hide_asset() {
            log::error!("Render engine failed to hide asset: {e:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Counters {
        attach: AtomicU32,
        release: AtomicU32,
    }

    struct CountingEngine {
        counters: Arc<Counters>,
    }

    impl RenderEngine for CountingEngine {
        fn attach(&mut self, _surface: SurfaceHandle) -> Result<()> {
            self.counters.attach.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn release(&mut self) {
            self.counters.release.fetch_add(1, Ordering::SeqCst);
        }

        fn show_asset(&mut self) -> Result<()> {
            Ok(())
        }

        fn update_transform(&mut self, _pose: &Pose) -> Result<()> {
            Ok(())
        }

        fn hide_asset(&mut self) -> Result<()> {
            Ok(())
        }
    }

    struct NullSurface;

    impl raw_window_handle::HasWindowHandle for NullSurface {
        fn window_handle(
            &self,
        ) -> std::result::Result<raw_window_handle::WindowHandle<'_>, raw_window_handle::HandleError>
        {
            Err(raw_window_handle::HandleError::Unavailable)
        }
    }

    impl raw_window_handle::HasDisplayHandle for NullSurface {
        fn display_handle(
            &self,
        ) -> std::result::Result<raw_window_handle::DisplayHandle<'_>, raw_window_handle::HandleError>
        {
            Err(raw_window_handle::HandleError::Unavailable)
        }
    }

    fn surface() -> SurfaceHandle {
        Arc::new(NullSurface)
    }

    #[test]
    fn repeat_attach_is_a_no_op() {
        let counters = Arc::new(Counters::default());
        let mut binder = RenderSurfaceBinder::new(Box::new(CountingEngine {
            counters: counters.clone(),
        }));

        binder.attach(surface()).unwrap();
        binder.attach(surface()).unwrap();
        assert_eq!(counters.attach.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn release_is_idempotent_and_safe_without_attach() {
        let counters = Arc::new(Counters::default());
        let mut binder = RenderSurfaceBinder::new(Box::new(CountingEngine {
            counters: counters.clone(),
        }));

        // Never attached: release must still be safe.
        binder.release();
        binder.release();
        assert_eq!(counters.release.load(Ordering::SeqCst), 1);
    }
}
