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

//! Session configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a single AR session.
///
/// Loadable from JSON so the host shell can ship it next to its assets.
/// The two delays parameterize the bounded timed recoveries in the bring-up
/// sequence; they are platform-race workarounds, not user-facing timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the 3D asset to overlay on the tracked target.
    pub asset_name: String,
    /// Delay before re-checking a silent engine setup, in milliseconds.
    pub init_recheck_delay_ms: u64,
    /// Delay before the foreground-resume re-entry attempt, in milliseconds.
    pub resume_retry_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            asset_name: "giraffe_voxel.glb".to_string(),
            init_recheck_delay_ms: 500,
            resume_retry_delay_ms: 500,
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse session config JSON")
    }

    /// The engine-setup re-check delay as a [`Duration`].
    pub fn init_recheck_delay(&self) -> Duration {
        Duration::from_millis(self.init_recheck_delay_ms)
    }

    /// The resume re-entry delay as a [`Duration`].
    pub fn resume_retry_delay(&self) -> Duration {
        Duration::from_millis(self.resume_retry_delay_ms)
    }
}
