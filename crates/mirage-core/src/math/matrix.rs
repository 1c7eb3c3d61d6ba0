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

use super::vector::{Vec3, Vec4};
use bytemuck::{Pod, Zeroable};

/// A 4x4 column-major matrix, used for rigid 3D transformations.
///
/// The memory layout is column-major, which is compatible with modern
/// graphics APIs, and matches the layout tracking engines report
/// model-view matrices in.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a matrix from a flat column-major array of 16 floats.
    #[inline]
    pub fn from_cols_array(m: &[f32; 16]) -> Self {
        Self {
            cols: [
                Vec4::new(m[0], m[1], m[2], m[3]),
                Vec4::new(m[4], m[5], m[6], m[7]),
                Vec4::new(m[8], m[9], m[10], m[11]),
                Vec4::new(m[12], m[13], m[14], m[15]),
            ],
        }
    }

    /// Returns the matrix as a flat column-major array of 16 floats.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let c = &self.cols;
        [
            c[0].x, c[0].y, c[0].z, c[0].w, c[1].x, c[1].y, c[1].z, c[1].w, c[2].x, c[2].y,
            c[2].z, c[2].w, c[3].x, c[3].y, c[3].z, c[3].w,
        ]
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            cols: [
                Vec4::X,
                Vec4::Y,
                Vec4::Z,
                Vec4::new(v.x, v.y, v.z, 1.0),
            ],
        }
    }

    /// Returns the translation part of the matrix (the xyz of the last column).
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.cols[3].truncate()
    }

    /// Returns `true` if every element is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(Vec4::is_finite)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
