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

//! The single logical AR session and its state machine phases.

use mirage_core::FailureReason;
use std::fmt;
use uuid::Uuid;

/// A unique identifier for one session instance, used to correlate log
/// lines across the bring-up sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random session id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first uuid group is plenty for log correlation.
        let s = self.0.to_string();
        write!(f, "{}", &s[..8])
    }
}

/// The phase of the session's initialization state machine.
///
/// Phases advance strictly in sequence during bring-up; `Failed` is
/// terminal and reachable from every non-terminal phase, and the
/// `Active ⇄ Paused` cycle is reachable only after `Active` is first
/// entered.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Nothing has happened yet; waiting for the host surface.
    Idle,
    /// The OS consent flow is in flight.
    PermissionPending,
    /// The tracking engine's asynchronous setup is in flight.
    EngineInitializing,
    /// The configured asset is being inspected.
    AssetChecking,
    /// The tracking engine is loading the 3D model.
    ModelLoading,
    /// Target detection is being started.
    DetectionStarting,
    /// The session is live: target events are relayed to the renderer.
    Active,
    /// The session is backgrounded; detection is suspended.
    Paused,
    /// Terminal failure; the session does not auto-recover.
    Failed(FailureReason),
}

impl Phase {
    /// Returns the phase's name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::PermissionPending => "PermissionPending",
            Phase::EngineInitializing => "EngineInitializing",
            Phase::AssetChecking => "AssetChecking",
            Phase::ModelLoading => "ModelLoading",
            Phase::DetectionStarting => "DetectionStarting",
            Phase::Active => "Active",
            Phase::Paused => "Paused",
            Phase::Failed(_) => "Failed",
        }
    }

    /// Returns `true` for the terminal `Failed` phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Failed(_))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Failed(reason) => write!(f, "Failed({})", reason.code()),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// The current capability-grant state, as last reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// No grant result has been observed this session.
    #[default]
    Unknown,
    /// The user denied at least one required capability.
    Denied,
    /// Every required capability is granted.
    Granted,
}

/// The single logical AR session for the application's lifetime.
///
/// Owned exclusively by the coordinator and mutated only on the control
/// thread; at most one exists per running application instance.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    phase: Phase,
    permission: PermissionState,
    active_target: Option<String>,
    engine_initialized: bool,
}

impl Session {
    /// Creates a fresh session in `Idle`.
    pub fn new() -> Self {
        let id = SessionId::new();
        log::info!("[{id}] Session created.");
        Self {
            id,
            phase: Phase::Idle,
            permission: PermissionState::Unknown,
            active_target: None,
            engine_initialized: false,
        }
    }

    /// The session's log-correlation id.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The current state machine phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The capability-grant state last reported by the platform.
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// The name of the target currently being tracked, if any.
    pub fn active_target(&self) -> Option<&str> {
        self.active_target.as_deref()
    }

    /// Whether the tracking engine ever completed setup this session.
    ///
    /// Consulted by the resume re-entry policy: a session whose engine
    /// never came up restarts the bring-up sequence instead of resuming.
    pub fn engine_initialized(&self) -> bool {
        self.engine_initialized
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::info!("[{}] Phase transition: {} -> {}", self.id, self.phase, phase);
            self.phase = phase;
        }
    }

    pub(crate) fn set_permission(&mut self, permission: PermissionState) {
        self.permission = permission;
    }

    pub(crate) fn set_active_target(&mut self, name: &str) {
        self.active_target = Some(name.to_string());
    }

    pub(crate) fn clear_active_target(&mut self) {
        self.active_target = None;
    }

    pub(crate) fn mark_engine_initialized(&mut self) {
        self.engine_initialized = true;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
