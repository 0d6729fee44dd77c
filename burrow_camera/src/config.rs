// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use burrow_view2d::ClampMode;
use kurbo::{Rect, Size};

use crate::follow::ResumePolicy;

bitflags::bitflags! {
    /// Input behaviours enabled on a [`crate::Camera`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Behaviors: u8 {
        /// Pointer drag pans the camera.
        const DRAG  = 0b0000_0001;
        /// Wheel steps zoom about the pointer.
        const WHEEL = 0b0000_0010;
    }
}

/// Easing parameters for snap animations.
///
/// Each tick moves the animated value by `(target - value) * min(1, rate * dt)`,
/// which approaches the target without overshooting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapOptions {
    /// Fraction of the remaining distance covered per second.
    pub rate: f64,
    /// Distance below which the snap is considered arrived.
    ///
    /// World units for position snaps; relative to the target for zoom snaps.
    pub epsilon: f64,
    /// Upper bound on the snap duration in seconds. When exceeded the value
    /// jumps to the target and the snap completes.
    pub max_duration: f64,
    /// Remove the task once it arrives. Otherwise it keeps holding the target.
    pub remove_on_complete: bool,
}

impl SnapOptions {
    /// Returns a copy with `remove_on_complete` set to `remove`.
    #[must_use]
    pub fn with_remove_on_complete(mut self, remove: bool) -> Self {
        self.remove_on_complete = remove;
        self
    }

    /// Returns `true` when `rate` and `max_duration` are finite and positive
    /// and `epsilon` is finite and not negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        *self == self.sanitized()
    }

    /// Returns a copy where every unusable field is replaced by its default.
    ///
    /// Snaps always run with sanitized options, so they make progress and
    /// terminate.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |v: f64| v.is_finite() && v > 0.0;
        Self {
            rate: if positive(self.rate) {
                self.rate
            } else {
                defaults.rate
            },
            epsilon: if self.epsilon.is_finite() && self.epsilon >= 0.0 {
                self.epsilon
            } else {
                defaults.epsilon
            },
            max_duration: if positive(self.max_duration) {
                self.max_duration
            } else {
                defaults.max_duration
            },
            remove_on_complete: self.remove_on_complete,
        }
    }
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            rate: 8.0,
            epsilon: 1e-3,
            max_duration: 4.0,
            remove_on_complete: true,
        }
    }
}

/// Startup configuration of a [`crate::Camera`].
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// Screen size in pixels.
    pub screen_size: Size,
    /// World size in world units; the world spans `(0, 0)` to this size.
    pub world_size: Size,
    /// Enabled input behaviours.
    pub behaviors: Behaviors,
    /// Clamping of the camera position against the world bounds.
    pub clamp_mode: ClampMode,
    /// `(min, max)` zoom factors.
    pub zoom_limits: (f64, f64),
    /// Easing used by region snaps.
    pub snap: SnapOptions,
    /// When a follow paused by a snap resumes.
    pub resume_policy: ResumePolicy,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            screen_size: Size::new(500.0, 500.0),
            world_size: Size::new(2000.0, 2000.0),
            behaviors: Behaviors::empty(),
            clamp_mode: ClampMode::None,
            zoom_limits: (1e-3, 1e3),
            snap: SnapOptions::default(),
            resume_policy: ResumePolicy::default(),
        }
    }
}

impl CameraConfig {
    /// Sets the screen size.
    #[must_use]
    pub fn with_screen_size(mut self, size: Size) -> Self {
        self.screen_size = size;
        self
    }

    /// Sets the world size.
    #[must_use]
    pub fn with_world_size(mut self, size: Size) -> Self {
        self.world_size = size;
        self
    }

    /// Sets the enabled input behaviours.
    #[must_use]
    pub fn with_behaviors(mut self, behaviors: Behaviors) -> Self {
        self.behaviors = behaviors;
        self
    }

    /// Sets the clamp mode.
    #[must_use]
    pub fn with_clamp_mode(mut self, mode: ClampMode) -> Self {
        self.clamp_mode = mode;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.zoom_limits = (min_zoom, max_zoom);
        self
    }

    /// Sets the snap easing. Unusable fields fall back to their defaults,
    /// see [`SnapOptions::sanitized`].
    #[must_use]
    pub fn with_snap(mut self, snap: SnapOptions) -> Self {
        self.snap = snap.sanitized();
        self
    }

    /// Sets the follow resume policy.
    #[must_use]
    pub fn with_resume_policy(mut self, policy: ResumePolicy) -> Self {
        self.resume_policy = policy;
        self
    }

    /// Screen rectangle anchored at the origin.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        self.screen_size.to_rect()
    }

    /// World bounds anchored at the origin, or `None` for an empty world.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        let size = self.world_size;
        (size.width > 0.0 && size.height > 0.0).then(|| size.to_rect())
    }
}
