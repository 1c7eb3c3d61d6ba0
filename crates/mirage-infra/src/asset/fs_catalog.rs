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

//! A directory-backed catalog of GLB model assets.

use mirage_core::asset::{AssetCatalog, AssetDescriptor};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error constructing an [`FsAssetCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The asset root path does not exist.
    #[error("asset root '{0}' does not exist")]
    RootMissing(PathBuf),
    /// The asset root path exists but is not a directory.
    #[error("asset root '{0}' is not a directory")]
    NotADirectory(PathBuf),
}

/// Serves `.glb` files from a directory.
///
/// Nothing is cached: `list` re-reads the directory and `describe` re-reads
/// the file on every call, so answers always reflect the directory's
/// current contents. Per the catalog contract every failure path in
/// `describe` soft-fails to an invalid descriptor.
pub struct FsAssetCatalog {
    root: PathBuf,
}

impl FsAssetCatalog {
    /// Creates a catalog rooted at `root`. Only construction can fail;
    /// lookups afterwards soft-fail.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let root = root.into();
        if !root.exists() {
            return Err(CatalogError::RootMissing(root));
        }
        if !root.is_dir() {
            return Err(CatalogError::NotADirectory(root));
        }
        log::info!("Asset catalog rooted at '{}'.", root.display());
        Ok(Self { root })
    }

    fn is_glb(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("glb"))
    }
}

impl AssetCatalog for FsAssetCatalog {
    fn list(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to read asset root '{}': {e}", self.root.display());
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && Self::is_glb(path))
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .collect();
        names.sort();
        names
    }

    fn describe(&self, name: &str) -> AssetDescriptor {
        // Asset names are bare file names; anything path-like is refused
        // rather than resolved outside the root.
        if name.contains(['/', '\\']) || name.contains("..") {
            log::warn!("Rejecting path-like asset name '{name}'.");
            return AssetDescriptor::invalid(name);
        }

        let path = self.root.join(name);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("Asset '{name}' unreadable: {e}");
                return AssetDescriptor::invalid(name);
            }
        };

        match gltf::Glb::from_slice(&bytes) {
            Ok(_) => AssetDescriptor {
                name: name.to_string(),
                size_bytes: bytes.len() as u64,
                is_valid: true,
            },
            Err(e) => {
                log::debug!("Asset '{name}' failed GLB validation: {e}");
                AssetDescriptor::invalid(name)
            }
        }
    }
}
