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

//! Minimal linear-algebra types for relaying tracked poses.
//!
//! The tracking engine reports target poses as column-major model-view
//! matrices and the render engine consumes them in the same layout, so this
//! module only carries what that relay needs: plain vectors, a 4x4 matrix,
//! and the [`Pose`] wrapper that validates and transports them.

mod matrix;
mod pose;
mod vector;

pub use matrix::Mat4;
pub use pose::Pose;
pub use vector::{Vec3, Vec4};
