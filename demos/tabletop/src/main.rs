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

// Tabletop demo: drives a full AR session lifecycle — bring-up, target
// found/tracked/lost, background/foreground cycle, teardown — against the
// scripted tracking engine and the headless renderer.

use anyhow::Result;
use mirage_core::math::{Mat4, Pose, Vec3};
use mirage_core::platform::LifecycleSignal;
use mirage_core::tracking::TrackingEvent;
use mirage_infra::asset::FsAssetCatalog;
use mirage_infra::platform::{DesktopCapabilityHost, LogNotifier};
use mirage_infra::render::{DetachedSurface, HeadlessRenderEngine};
use mirage_infra::tracking::{Script, ScriptedTrackingEngine, TimelineEntry};
use mirage_session::{bridge, Coordinator, SessionConfig};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Writes the demo's stand-in model: the smallest structurally valid GLB
/// container, enough for the catalog's pre-flight check.
fn write_demo_asset(dir: &std::path::Path, name: &str) -> Result<()> {
    let json = br#"{"asset":{"version":"2.0"}} "#;
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x4654_6C67u32.to_le_bytes()); // "glTF"
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&(12 + 8 + json.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&(json.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&0x4E4F_534Au32.to_le_bytes()); // "JSON"
    bytes.extend_from_slice(json);
    std::fs::write(dir.join(name), bytes)?;
    Ok(())
}

fn demo_script() -> Script {
    let step = Duration::from_millis(120);
    let mut timeline = vec![TimelineEntry {
        delay: step,
        event: TrackingEvent::Found("giraffe".to_string()),
    }];
    // A short sweep of the target across the camera frame.
    for i in 0..8 {
        timeline.push(TimelineEntry {
            delay: step,
            event: TrackingEvent::Tracking {
                target: "giraffe".to_string(),
                pose: Pose::from(Mat4::from_translation(Vec3::new(
                    0.05 * i as f32,
                    0.0,
                    -0.5,
                ))),
            },
        });
    }
    timeline.push(TimelineEntry {
        delay: step,
        event: TrackingEvent::Lost("giraffe".to_string()),
    });

    Script {
        init_delay: Duration::from_millis(80),
        load_delay: Duration::from_millis(120),
        timeline,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    mirage_infra::logging::init();

    let asset_dir = std::env::temp_dir().join("mirage-tabletop-demo");
    std::fs::create_dir_all(&asset_dir)?;
    let config = SessionConfig::default();
    write_demo_asset(&asset_dir, &config.asset_name)?;

    let mut coordinator = Coordinator::new(
        config,
        Box::new(ScriptedTrackingEngine::new(demo_script())),
        Box::new(HeadlessRenderEngine::new()),
        Box::new(FsAssetCatalog::new(&asset_dir)?),
        Box::new(DesktopCapabilityHost::granting_all()),
        Box::new(LogNotifier),
    );

    // Surface up: the bring-up sequence starts with the capability request.
    coordinator.on_surface_ready(Arc::new(DetachedSurface));
    coordinator.run_until(Instant::now() + Duration::from_millis(700));
    log::info!("Phase after bring-up: {}", coordinator.phase());

    // Let a few tracked poses flow, then background and foreground the app.
    coordinator.run_until(Instant::now() + Duration::from_millis(400));
    bridge::dispatch(&mut coordinator, LifecycleSignal::Suspended, Instant::now());
    log::info!("Backgrounded; phase: {}", coordinator.phase());

    bridge::dispatch(&mut coordinator, LifecycleSignal::Resumed, Instant::now());
    log::info!("Foregrounded; phase: {}", coordinator.phase());
    coordinator.run_until(Instant::now() + Duration::from_millis(600));

    log::info!(
        "Final phase {} (active target: {:?}).",
        coordinator.phase(),
        coordinator.session().active_target()
    );
    bridge::dispatch(&mut coordinator, LifecycleSignal::Destroyed, Instant::now());
    Ok(())
}
