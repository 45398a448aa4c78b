//! Headless frame loop.
//!
//! Drives a [`Session`] at the configured frame rate without a window.
//! Rendering and audio backends attach at the kernel seams (camera
//! uniform, overlay rects, channel gains); this loop walks the player down
//! the path so the whole simulation is exercised end to end.

use anyhow::Result;
use tracing::info;

use fogvale_gameplay::input::Key;
use fogvale_gameplay::session::Session;

use crate::config::EngineConfig;
use crate::timing::FrameTiming;

/// Frames between periodic log summaries.
const SUMMARY_INTERVAL: u64 = 60;

/// Frames between turn-direction changes in the scripted walk.
const TURN_INTERVAL: u64 = 240;

/// Runs the frame loop until the configured frame count elapses.
pub fn run(config: &EngineConfig) -> Result<()> {
    let mut session = Session::new(config.window_width, config.window_height, config.seed);
    let mut timing = FrameTiming::new(config.target_fps);

    if config.auto_start {
        session.start();
        // Scripted walk: hold forward, weave left and right
        session.key_down(Key::W);
        session.key_down(Key::A);
    }

    let mut frame: u64 = 0;
    loop {
        if let Some(limit) = config.run_frames {
            if frame >= limit {
                break;
            }
        }

        let dt = timing.delta_time();
        let output = session.frame(dt);

        if session.camera_mut().take_projection_dirty() {
            // A renderer would rebuild its projection matrix here
            let _ = session.camera().uniform();
        }

        if frame % TURN_INTERVAL == TURN_INTERVAL / 2 {
            session.key_up(Key::A);
            session.key_down(Key::D);
        } else if frame % TURN_INTERVAL == 0 && frame > 0 {
            session.key_up(Key::D);
            session.key_down(Key::A);
        }

        if frame % SUMMARY_INTERVAL == 0 {
            let pos = session.player().position;
            if config.show_fps {
                info!(
                    frame,
                    x = pos.x,
                    z = pos.z,
                    walking = output.walking,
                    flowers = session.flowers().len(),
                    grain = output.grain_opacity,
                    fps = timing.average_fps(),
                    "frame summary"
                );
            } else {
                info!(
                    frame,
                    x = pos.x,
                    z = pos.z,
                    walking = output.walking,
                    flowers = session.flowers().len(),
                    grain = output.grain_opacity,
                    "frame summary"
                );
            }
        }

        if let Some(remaining) = timing.budget_remaining() {
            std::thread::sleep(remaining);
        }

        frame += 1;
    }

    info!(frames = frame, "run complete");
    Ok(())
}
