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

use std::time::Instant;

/// The single-consumer message queue owned by the control thread.
///
/// Collaborators never touch the coordinator directly; they post into this
/// queue through [`EventSink`] clones and the control thread drains it
/// between host-loop iterations. Generic over the event type so the crate
/// stays decoupled from any one coordinator's message set.
#[derive(Debug)]
pub struct ControlQueue<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> ControlQueue<T> {
    /// Creates a new unbounded control queue.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Returns a new sink that collaborators can carry to foreign threads.
    ///
    /// Sinks are cheap to clone; every one of them feeds the same queue.
    pub fn sink(&self) -> EventSink<T> {
        EventSink {
            sender: self.sender.clone(),
        }
    }

    /// Drains every event currently in the queue without blocking.
    pub fn try_drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Blocks until one event arrives or `deadline` passes.
    ///
    /// Host loops use this instead of spinning: the deadline is typically
    /// the coordinator's next timer due-time.
    pub fn recv_deadline(&self, deadline: Instant) -> Option<T> {
        self.receiver.recv_deadline(deadline).ok()
    }

    /// Returns `true` if no events are waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl<T: Send + 'static> Default for ControlQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The producer half of a [`ControlQueue`].
///
/// This is the only handle collaborators get: it can post events from any
/// thread but cannot read session state, which keeps the marshaling
/// boundary honest.
#[derive(Debug, Clone)]
pub struct EventSink<T: Send + 'static> {
    sender: flume::Sender<T>,
}

impl<T: Send + 'static> EventSink<T> {
    /// Posts an event to the control thread.
    ///
    /// A disconnected queue means the session has been torn down; late
    /// collaborator callbacks are expected during teardown, so this logs
    /// and drops rather than erroring.
    pub fn post(&self, event: T) {
        if self.sender.send(event).is_err() {
            log::debug!("Control queue disconnected; dropping late collaborator event.");
        }
    }
}
