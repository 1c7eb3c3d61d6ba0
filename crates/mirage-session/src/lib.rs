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

//! # Mirage Session
//!
//! The AR session's state and its initialization/lifecycle coordinator: a
//! single-threaded state machine that serializes permission acquisition,
//! tracking engine bring-up, asset inspection, model load, and target
//! detection, then relays tracking events to the renderer for as long as
//! the session stays foregrounded.

#![warn(missing_docs)]

pub mod adapter;
pub mod binder;
pub mod bridge;
pub mod config;
pub mod coordinator;
pub mod gate;
pub mod inspector;
pub mod session;
pub mod timer;

pub use config::SessionConfig;
pub use coordinator::Coordinator;
pub use session::{Phase, PermissionState, Session, SessionId};
