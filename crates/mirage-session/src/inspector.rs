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

//! The asset inspector: pre-flight checks on named 3D-model resources.

use mirage_core::asset::{AssetCatalog, AssetDescriptor};

/// Inspects the asset store before an asset is handed to the tracking and
/// render subsystems.
///
/// Nothing here caches: each call re-queries the catalog so the answer
/// reflects the store's current state.
pub struct AssetInspector {
    catalog: Box<dyn AssetCatalog>,
}

impl AssetInspector {
    /// Creates an inspector over the given catalog.
    pub fn new(catalog: Box<dyn AssetCatalog>) -> Self {
        Self { catalog }
    }

    /// Enumerates and logs the currently available assets.
    pub fn survey(&self) -> Vec<String> {
        let names = self.catalog.list();
        log::debug!("Available assets: {names:?}");
        names
    }

    /// Describes the named asset.
    ///
    /// An invalid descriptor is a normal, expected branch, not an
    /// exceptional one; the catalog never raises for missing or malformed
    /// assets.
    pub fn describe(&self, name: &str) -> AssetDescriptor {
        let descriptor = self.catalog.describe(name);
        if descriptor.is_valid {
            log::debug!(
                "Asset '{}' is valid ({} bytes).",
                descriptor.name,
                descriptor.size_bytes
            );
        } else {
            log::warn!("Asset '{}' is missing or malformed.", descriptor.name);
        }
        descriptor
    }
}
