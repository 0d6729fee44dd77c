// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Follow mode: continuously re-center the camera on a moving target.

use alloc::rc::Weak;
use core::cell::Cell;
use core::fmt;

use kurbo::{Point, Size};

/// An entity the camera can follow.
pub trait FollowTarget {
    /// Current position of the entity in world space.
    fn world_position(&self) -> Point;
}

impl FollowTarget for Cell<Point> {
    fn world_position(&self) -> Point {
        self.get()
    }
}

/// Parameters for [`crate::Camera::follow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowOptions {
    /// Fraction of the remaining distance covered per second; must be > 0.
    pub speed: f64,
    /// World‑space extent framed around the target when following starts.
    ///
    /// When set, `follow` also starts a holding zoom snap that fits this size
    /// into the view.
    pub frame: Option<Size>,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            speed: 20.0,
            frame: Some(Size::new(1000.0, 1000.0)),
        }
    }
}

/// When a follow that was paused by a position snap or a drag picks up again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumePolicy {
    /// Resume as soon as the pausing snap is removed or cancelled, or the
    /// pausing drag ends.
    #[default]
    AfterSnap,
    /// Stay paused until [`crate::Camera::resume_follow`] is called.
    Manual,
}

/// Whether the follow task currently writes the camera position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    /// Chasing the target every tick.
    Active,
    /// Keeping the target reference but not moving the camera.
    Paused,
}

/// The single follow task owned by a [`crate::Camera`].
pub struct FollowTask {
    target: Weak<dyn FollowTarget>,
    speed: f64,
    state: FollowState,
    auto_resume: bool,
}

impl fmt::Debug for FollowTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FollowTask")
            .field("target_alive", &self.is_target_alive())
            .field("speed", &self.speed)
            .field("state", &self.state)
            .field("auto_resume", &self.auto_resume)
            .finish()
    }
}

impl FollowTask {
    pub(crate) fn new(target: Weak<dyn FollowTarget>, speed: f64) -> Self {
        Self {
            target,
            speed,
            state: FollowState::Active,
            auto_resume: false,
        }
    }

    /// Chase speed.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FollowState {
        self.state
    }

    /// Returns `true` while the followed entity still exists.
    #[must_use]
    pub fn is_target_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// Target position, or `None` if the target was dropped.
    #[must_use]
    pub fn target_position(&self) -> Option<Point> {
        self.target.upgrade().map(|t| t.world_position())
    }

    pub(crate) fn pause(&mut self, auto_resume: bool) {
        self.state = FollowState::Paused;
        self.auto_resume = auto_resume;
    }

    pub(crate) fn resume(&mut self) {
        self.state = FollowState::Active;
        self.auto_resume = false;
    }

    pub(crate) fn resumes_automatically(&self) -> bool {
        self.state == FollowState::Paused && self.auto_resume
    }

    /// Next camera center when chasing `target` from `current` over `dt` seconds.
    pub(crate) fn chase(&self, current: Point, target: Point, dt: f64) -> Point {
        let t = (self.speed * dt).clamp(0.0, 1.0);
        current.lerp(target, t)
    }
}
