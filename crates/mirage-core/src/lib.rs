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

//! # Mirage Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! that define the AR session runtime's architecture.
//!
//! The session coordinator lives in `mirage-session`; this crate only holds
//! the seams it drives: the tracking engine, the render engine, the asset
//! catalog, and the host platform are all external collaborators reached
//! through the traits defined here, and every asynchronous result they
//! produce crosses back over the [`event::ControlQueue`] marshaling
//! boundary.

#![warn(missing_docs)]

pub mod asset;
pub mod error;
pub mod event;
pub mod math;
pub mod platform;
pub mod render;
pub mod tracking;

pub use error::FailureReason;
pub use event::{ControlEvent, ControlQueue, EventSink};
