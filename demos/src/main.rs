// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless run of the bunny viewport demo.
//!
//! Replays button presses (focus a region, follow the orbiting bunny) against
//! a 500x500 camera over a 2000x2000 world and logs what the camera does.
//!
//! ```text
//! cargo run -p burrow_demos -- --focus tl --follow-at 120 --stop-at 400
//! cargo run -p burrow_demos -- --frames 300 --command 0:focus=br --command 60:cancel
//! RUST_LOG=debug cargo run -p burrow_demos
//! ```

mod scene;
mod script;

use std::process::ExitCode;

use burrow_camera::{
    Behaviors, Camera, CameraCommand, CameraConfig, CameraController, CameraEvent, FollowOptions,
    ResumePolicy,
};
use clap::Parser;
use kurbo::Point;

use crate::scene::{FOLLOW_FRAME, FOLLOW_SPEED, SCREEN, Scene, WORLD};
use crate::script::{ScriptedCommand, default_script, parse_scripted};

#[derive(Parser, Debug)]
#[command(name = "bunnies", version, about = "Headless bunny viewport demo", long_about = None)]
struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Region to focus on the first frame.
    #[arg(long)]
    focus: Option<String>,
    /// Frame at which to press Follow.
    #[arg(long)]
    follow_at: Option<u32>,
    /// Frame at which to stop following.
    #[arg(long)]
    stop_at: Option<u32>,
    /// Scripted button press as FRAME:ACTION (focus=<region>, follow, stop, cancel).
    /// Repeatable. Any scripting flag replaces the built-in script.
    #[arg(long = "command", value_parser = parse_scripted)]
    commands: Vec<ScriptedCommand>,
    /// Log camera state every N frames.
    #[arg(long, default_value_t = 30)]
    log_every: u32,
    /// Keep follow paused after a focus until the next Follow press.
    #[arg(long)]
    manual_resume: bool,
    /// Disable drag panning.
    #[arg(long)]
    no_drag: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if !(args.fps.is_finite() && args.fps > 0.0) {
        tracing::error!(fps = args.fps, "fps must be a positive number");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo setup failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), burrow_camera::CameraError> {
    let regions = scene::regions()?;
    let mut scene = Scene::new(&regions)?;

    let behaviors = if args.no_drag {
        Behaviors::empty()
    } else {
        Behaviors::DRAG
    };
    let resume_policy = if args.manual_resume {
        ResumePolicy::Manual
    } else {
        ResumePolicy::AfterSnap
    };
    let config = CameraConfig::default()
        .with_screen_size(SCREEN)
        .with_world_size(WORLD)
        .with_behaviors(behaviors)
        .with_resume_policy(resume_policy);
    let follow_options = FollowOptions {
        speed: FOLLOW_SPEED,
        frame: Some(FOLLOW_FRAME),
    };
    let mut controller = CameraController::new(
        Camera::new(&config),
        regions,
        scene.follow_target(),
        follow_options,
    );

    let mut script = script_from(args);
    script.sort_by_key(|entry| entry.frame);
    let mut pending = script.into_iter().peekable();

    let dt = 1.0 / args.fps;
    // Scene animations are tuned in 60 Hz display frames.
    let frames_per_tick = 60.0 * dt;
    tracing::info!(
        frames = args.frames,
        fps = args.fps,
        regions = controller.regions().len(),
        "starting bunny demo"
    );

    for frame in 0..args.frames {
        while let Some(entry) = pending.next_if(|entry| entry.frame <= frame) {
            tracing::info!(frame, command = ?entry.command, "button");
            // Failed presses are already logged by the controller; keep running.
            let _ = controller.apply(&entry.command);
        }

        scene.advance(frames_per_tick);
        controller.tick(dt);

        for event in controller.camera_mut().drain_events() {
            match event {
                CameraEvent::SnapCompleted { kind } => {
                    tracing::info!(frame, ?kind, "snap completed");
                }
                CameraEvent::FollowLost => tracing::warn!(frame, "follow target lost"),
            }
        }

        if args.log_every > 0 && frame % args.log_every == 0 {
            log_frame(frame, &controller, &scene);
        }
    }

    log_frame(args.frames, &controller, &scene);
    Ok(())
}

/// Collects the scripting flags, falling back to the built-in script.
fn script_from(args: &Args) -> Vec<ScriptedCommand> {
    let mut script = args.commands.clone();
    if let Some(name) = &args.focus {
        script.push(ScriptedCommand {
            frame: 0,
            command: CameraCommand::Focus(name.clone()),
        });
    }
    if let Some(frame) = args.follow_at {
        script.push(ScriptedCommand {
            frame,
            command: CameraCommand::Follow,
        });
    }
    if let Some(frame) = args.stop_at {
        script.push(ScriptedCommand {
            frame,
            command: CameraCommand::StopFollow,
        });
    }
    if script.is_empty() {
        default_script()
    } else {
        script
    }
}

fn log_frame(frame: u32, controller: &CameraController, scene: &Scene) {
    let camera = controller.camera();
    let viewport = camera.viewport();
    let center: Point = camera.position();
    let orbiter = scene.orbiter_sprite();
    let (orbiter_screen, orbiter_scale) = orbiter.project(viewport);
    tracing::info!(
        frame,
        center_x = format_args!("{:.1}", center.x),
        center_y = format_args!("{:.1}", center.y),
        zoom = format_args!("{:.3}", camera.zoom()),
        following = ?camera.follow_state(),
        visible = scene.visible_sprites(viewport),
        orbiter = ?(orbiter.position.x.round(), orbiter.position.y.round()),
        orbiter_screen = ?(orbiter_screen.x.round(), orbiter_screen.y.round()),
        orbiter_scale = format_args!("{:.2}", orbiter_scale),
        orbiter_rotation = format_args!("{:.2}", orbiter.rotation),
        "camera"
    );
}
