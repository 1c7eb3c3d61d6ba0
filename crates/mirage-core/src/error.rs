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

//! Defines the failure taxonomy for an AR session.

use std::fmt;

/// The reason a session reached its terminal `Failed` phase.
///
/// Every variant is terminal for the current session: the coordinator does
/// not auto-recover from any of them. The two bounded timed recoveries in
/// the bring-up sequence happen *before* one of these is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The user denied the camera capability, or the grant result did not
    /// cover every required capability.
    PermissionDenied,
    /// The tracking engine reported that its setup failed.
    EngineInitFailed,
    /// The configured 3D asset is missing or structurally malformed.
    InvalidAsset,
    /// The tracking engine reported that loading the 3D model failed.
    ModelLoadFailed,
    /// The tracking engine refused to start target detection.
    DetectionStartFailed,
    /// An unexpected fault from a collaborator, caught before it could
    /// propagate and crash the host process.
    Internal(String),
}

impl FailureReason {
    /// Returns the stable machine-readable code for this failure.
    ///
    /// Codes are what tests and log scrapers key on; the `Display` text is
    /// the human-readable surface.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::PermissionDenied => "permission_denied",
            FailureReason::EngineInitFailed => "engine_init_failed",
            FailureReason::InvalidAsset => "invalid_asset",
            FailureReason::ModelLoadFailed => "model_load_failed",
            FailureReason::DetectionStartFailed => "detection_start_failed",
            FailureReason::Internal(_) => "internal_error",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::PermissionDenied => {
                write!(f, "Camera permission was denied.")
            }
            FailureReason::EngineInitFailed => {
                write!(f, "The tracking engine failed to initialize.")
            }
            FailureReason::InvalidAsset => {
                write!(f, "The 3D asset is missing or invalid.")
            }
            FailureReason::ModelLoadFailed => {
                write!(f, "The 3D model could not be loaded.")
            }
            FailureReason::DetectionStartFailed => {
                write!(f, "Target detection could not be started.")
            }
            FailureReason::Internal(detail) => {
                write!(f, "An internal error occurred: {detail}")
            }
        }
    }
}

impl std::error::Error for FailureReason {}
