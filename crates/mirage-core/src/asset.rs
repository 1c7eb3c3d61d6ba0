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

//! Contract for the store of named 3D-model assets.

/// Describes a named 3D-model resource.
///
/// Descriptors are ephemeral values: they are recomputed on every
/// inspection request and never cached across calls, so `is_valid` always
/// reflects the store's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    /// The asset's name, e.g. `"giraffe_voxel.glb"`.
    pub name: String,
    /// The asset's size in bytes; zero when the asset is missing.
    pub size_bytes: u64,
    /// Whether the asset exists and is structurally valid.
    pub is_valid: bool,
}

impl AssetDescriptor {
    /// Creates a descriptor for an asset that is missing or malformed.
    pub fn invalid(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes: 0,
            is_valid: false,
        }
    }
}

/// The store of named 3D-model assets.
///
/// Implementations must fail softly: a missing or malformed asset is
/// reported through `is_valid: false`, never through a panic or an error.
/// The coordinator treats an invalid descriptor as a normal branch.
pub trait AssetCatalog: Send {
    /// Enumerates the names of every available asset.
    ///
    /// Re-enumerated on each call; implementations must not cache the
    /// listing across calls.
    fn list(&self) -> Vec<String>;

    /// Describes the named asset, soft-failing with
    /// [`AssetDescriptor::invalid`] when it is missing or malformed.
    fn describe(&self, name: &str) -> AssetDescriptor;
}
