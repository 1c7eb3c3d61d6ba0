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

use super::{Mat4, Vec3};
use bytemuck::{Pod, Zeroable};

/// A rigid transform describing a tracked target's position and orientation
/// relative to the camera.
///
/// Poses are produced by the tracking engine as column-major model-view
/// matrices and forwarded unchanged to the render engine; the wrapper exists
/// so the relay has a single place to validate and label them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Pose {
    /// The model-view matrix for the tracked target.
    pub model_view: Mat4,
}

impl Pose {
    /// The identity pose (target coincident with the camera frame).
    pub const IDENTITY: Self = Self {
        model_view: Mat4::IDENTITY,
    };

    /// Creates a pose from a flat column-major model-view matrix, the layout
    /// tracking engines deliver over their native callback interfaces.
    #[inline]
    pub fn from_model_view(m: &[f32; 16]) -> Self {
        Self {
            model_view: Mat4::from_cols_array(m),
        }
    }

    /// Returns the target's position in the camera frame.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.model_view.translation()
    }

    /// Returns `true` if the underlying matrix contains only finite values.
    ///
    /// Tracking engines occasionally emit garbage matrices in the frame a
    /// target is lost; the relay drops those instead of forwarding them.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.model_view.is_finite()
    }
}

impl From<Mat4> for Pose {
    fn from(model_view: Mat4) -> Self {
        Self { model_view }
    }
}
