// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command surface for UI layers, scripts and tests.
//!
//! A [`CameraController`] pairs a [`Camera`] with the region table and the
//! fixed follow target of a scene. Any trigger can drive it, either through
//! the methods directly or by applying [`CameraCommand`] values.

use alloc::rc::Weak;
use alloc::string::String;

use crate::camera::Camera;
use crate::error::CameraError;
use crate::follow::{FollowOptions, FollowTarget};
use crate::region::RegionRegistry;

/// A camera action requested from outside the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub enum CameraCommand {
    /// Snap to the named region.
    Focus(String),
    /// Follow the scene's follow target.
    Follow,
    /// Stop following.
    StopFollow,
    /// Drop running snaps where they are.
    CancelSnap,
}

/// Owns the camera and routes commands to it.
pub struct CameraController {
    camera: Camera,
    regions: RegionRegistry,
    follow_target: Weak<dyn FollowTarget>,
    follow_options: FollowOptions,
}

impl core::fmt::Debug for CameraController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CameraController")
            .field("camera", &self.camera)
            .field("regions", &self.regions)
            .field("follow_target_alive", &(self.follow_target.strong_count() > 0))
            .field("follow_options", &self.follow_options)
            .finish()
    }
}

impl CameraController {
    /// Creates a controller.
    #[must_use]
    pub fn new(
        camera: Camera,
        regions: RegionRegistry,
        follow_target: Weak<dyn FollowTarget>,
        follow_options: FollowOptions,
    ) -> Self {
        Self {
            camera,
            regions,
            follow_target,
            follow_options,
        }
    }

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access for input handling (drag, wheel) and resizing.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The region table.
    #[must_use]
    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }

    /// Snaps to the named region, pausing any follow.
    ///
    /// Failures (unknown name, empty screen) are logged and returned; the
    /// camera is left unchanged.
    pub fn focus(&mut self, name: &str) -> Result<(), CameraError> {
        tracing::debug!(region = name, "focus");
        self.regions
            .get(name)
            .and_then(|region| self.camera.snap_to(region))
            .inspect_err(|err| {
                tracing::warn!(%err, "focus request ignored");
            })
    }

    /// Follows the scene's follow target.
    pub fn follow(&mut self) -> Result<(), CameraError> {
        self.camera
            .follow(self.follow_target.clone(), self.follow_options)
    }

    /// Stops following.
    pub fn stop_follow(&mut self) {
        self.camera.stop_follow();
    }

    /// Drops running snaps.
    pub fn cancel_snap(&mut self) {
        self.camera.cancel_snap();
    }

    /// Applies a command.
    pub fn apply(&mut self, command: &CameraCommand) -> Result<(), CameraError> {
        match command {
            CameraCommand::Focus(name) => self.focus(name),
            CameraCommand::Follow => self.follow(),
            CameraCommand::StopFollow => {
                self.stop_follow();
                Ok(())
            }
            CameraCommand::CancelSnap => {
                self.cancel_snap();
                Ok(())
            }
        }
    }

    /// Advances the camera by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.camera.tick(dt);
    }
}
