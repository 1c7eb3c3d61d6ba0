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

//! A headless render sink for development without a GPU.

use anyhow::{bail, Result};
use mirage_core::math::Pose;
use mirage_core::render::{RenderEngine, SurfaceHandle};
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};

/// A drawing surface with no backing window, for headless runs.
///
/// Handle queries answer `Unavailable`; that is fine for render engines
/// that never dereference them (like [`HeadlessRenderEngine`]).
#[derive(Debug, Default)]
pub struct DetachedSurface;

impl HasWindowHandle for DetachedSurface {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

impl HasDisplayHandle for DetachedSurface {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

/// A render engine that draws nothing and logs everything.
///
/// Stands in for the GPU renderer during development and in the demo; it
/// tracks overlay visibility and the last pose so log output tells the
/// whole story.
#[derive(Debug, Default)]
pub struct HeadlessRenderEngine {
    attached: bool,
    visible: bool,
    last_pose: Option<Pose>,
}

impl HeadlessRenderEngine {
    /// Creates a detached, hidden engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The most recent pose forwarded to the overlay.
    pub fn last_pose(&self) -> Option<Pose> {
        self.last_pose
    }
}

impl RenderEngine for HeadlessRenderEngine {
    fn attach(&mut self, _surface: SurfaceHandle) -> Result<()> {
        if self.attached {
            bail!("surface already attached");
        }
        self.attached = true;
        log::info!("Headless renderer attached.");
        Ok(())
    }

    fn release(&mut self) {
        self.attached = false;
        self.visible = false;
        self.last_pose = None;
        log::info!("Headless renderer released.");
    }

    fn show_asset(&mut self) -> Result<()> {
        self.visible = true;
        log::info!("Overlay shown.");
        Ok(())
    }

    fn update_transform(&mut self, pose: &Pose) -> Result<()> {
        self.last_pose = Some(*pose);
        let t = pose.translation();
        log::trace!("Overlay at ({:.3}, {:.3}, {:.3}).", t.x, t.y, t.z);
        Ok(())
    }

    fn hide_asset(&mut self) -> Result<()> {
        self.visible = false;
        log::info!("Overlay hidden.");
        Ok(())
    }
}
