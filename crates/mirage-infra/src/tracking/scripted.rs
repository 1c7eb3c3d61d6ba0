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

//! A scripted tracking engine for development and demos.
//!
//! The real tracking engine completes its operations on internal
//! vision-processing threads; this one does the same with plain worker
//! threads playing back a configured timeline, so it exercises the exact
//! marshaling path production callbacks take: worker thread -> event sink
//! -> control queue.

use anyhow::{bail, Result};
use crossbeam_channel::{RecvTimeoutError, Sender};
use mirage_core::asset::AssetDescriptor;
use mirage_core::event::{ControlEvent, EventSink};
use mirage_core::tracking::{TrackingEngine, TrackingEvent};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// One entry in the playback timeline: an event and the delay since the
/// previous entry.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    /// Delay relative to the previous entry (or to detection start).
    pub delay: Duration,
    /// The event to deliver.
    pub event: TrackingEvent,
}

/// What the scripted engine does for each operation.
#[derive(Debug, Clone)]
pub struct Script {
    /// Delay before the setup completion is delivered.
    pub init_delay: Duration,
    /// Whether setup reports success.
    pub init_success: bool,
    /// Delay before the model-load completion is delivered.
    pub load_delay: Duration,
    /// Whether the model load reports success.
    pub load_success: bool,
    /// Whether `start_detection` accepts.
    pub accept_detection: bool,
    /// Target events played back once detection starts.
    pub timeline: Vec<TimelineEntry>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            init_delay: Duration::from_millis(50),
            init_success: true,
            load_delay: Duration::from_millis(50),
            load_success: true,
            accept_detection: true,
            timeline: Vec::new(),
        }
    }
}

enum PlaybackCommand {
    Pause,
    Resume,
    Stop,
}

struct Playback {
    commands: Sender<PlaybackCommand>,
    thread: JoinHandle<()>,
}

/// A [`TrackingEngine`] that plays back a [`Script`] from worker threads.
pub struct ScriptedTrackingEngine {
    script: Script,
    sink: Option<EventSink<ControlEvent>>,
    playback: Option<Playback>,
}

impl ScriptedTrackingEngine {
    /// Creates an engine that will play back the given script.
    pub fn new(script: Script) -> Self {
        Self {
            script,
            sink: None,
            playback: None,
        }
    }

    fn bound_sink(&self) -> Result<EventSink<ControlEvent>> {
        match &self.sink {
            Some(sink) => Ok(sink.clone()),
            None => bail!("no callback sink bound"),
        }
    }

    fn stop_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            let _ = playback.commands.send(PlaybackCommand::Stop);
            if playback.thread.join().is_err() {
                log::error!("Playback thread panicked during shutdown.");
            }
        }
    }
}

impl TrackingEngine for ScriptedTrackingEngine {
    fn bind(&mut self, sink: EventSink<ControlEvent>) {
        // Replaces any previous sink: one owner of callbacks at a time.
        self.sink = Some(sink);
    }

    fn setup(&mut self) -> Result<()> {
        let sink = self.bound_sink()?;
        let delay = self.script.init_delay;
        let success = self.script.init_success;
        thread::spawn(move || {
            thread::sleep(delay);
            sink.post(ControlEvent::EngineInitialized { success });
        });
        Ok(())
    }

    fn load_model(&mut self, asset: &AssetDescriptor) -> Result<()> {
        log::debug!("Scripted engine loading '{}'.", asset.name);
        let sink = self.bound_sink()?;
        let delay = self.script.load_delay;
        let success = self.script.load_success;
        thread::spawn(move || {
            thread::sleep(delay);
            sink.post(ControlEvent::ModelLoaded { success });
        });
        Ok(())
    }

    fn start_detection(&mut self) -> Result<bool> {
        if !self.script.accept_detection {
            return Ok(false);
        }
        // A restarted detection session replaces the previous playback.
        self.stop_playback();

        let sink = self.bound_sink()?;
        let timeline = self.script.timeline.clone();
        let (commands, inbox) = crossbeam_channel::unbounded();

        let thread = thread::spawn(move || {
            let mut paused = false;
            for entry in timeline {
                let deadline = Instant::now() + entry.delay;
                loop {
                    let timeout = deadline.saturating_duration_since(Instant::now());
                    match inbox.recv_timeout(timeout) {
                        Ok(PlaybackCommand::Stop) | Err(RecvTimeoutError::Disconnected) => return,
                        Ok(PlaybackCommand::Pause) => paused = true,
                        Ok(PlaybackCommand::Resume) => paused = false,
                        Err(RecvTimeoutError::Timeout) => break,
                    }
                }
                // A paused engine emits nothing; hold until resumed.
                while paused {
                    match inbox.recv() {
                        Ok(PlaybackCommand::Resume) => paused = false,
                        Ok(PlaybackCommand::Pause) => {}
                        Ok(PlaybackCommand::Stop) | Err(_) => return,
                    }
                }
                sink.post(ControlEvent::Target(entry.event));
            }
        });

        self.playback = Some(Playback { commands, thread });
        Ok(true)
    }

    fn pause(&mut self) -> Result<()> {
        if let Some(playback) = &self.playback {
            let _ = playback.commands.send(PlaybackCommand::Pause);
        }
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        if let Some(playback) = &self.playback {
            let _ = playback.commands.send(PlaybackCommand::Resume);
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.stop_playback();
        self.sink = None;
        Ok(())
    }
}

impl Drop for ScriptedTrackingEngine {
    fn drop(&mut self) {
        // Unblock a still-running playback thread; no join in drop.
        if let Some(playback) = &self.playback {
            let _ = playback.commands.send(PlaybackCommand::Stop);
        }
    }
}
