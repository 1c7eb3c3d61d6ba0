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

//! Single-shot, cancellable deadlines for the coordinator's timed
//! recoveries.
//!
//! These are not threads or blocking sleeps: a [`SingleShot`] is a deadline
//! the control thread checks each pump. Arming replaces any pending
//! deadline, firing disarms, and cancelling is always safe. The caller
//! still guards the fire with a phase check, so a deadline that outlives
//! the state it was armed for can never revert forward progress.

use std::time::Instant;

/// A single-shot, cancellable deadline owned by the control thread.
#[derive(Debug, Default)]
pub struct SingleShot {
    due: Option<Instant>,
}

impl SingleShot {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self { due: None }
    }

    /// Arms the timer for `due`, replacing any pending deadline.
    pub fn arm(&mut self, due: Instant) {
        self.due = Some(due);
    }

    /// Disarms the timer. Safe to call whether or not it is armed.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// Returns the pending deadline, if armed.
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Returns `true` if the timer is armed.
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Disarms and returns `true` if the deadline has passed.
    ///
    /// At most one fire per arm: the deadline is consumed here, so a timer
    /// can never fire twice without being re-armed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
