// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Weak;
use alloc::vec::Vec;
use core::mem;

use burrow_view2d::Viewport2D;
use kurbo::{Point, Rect, Size};

use crate::config::{Behaviors, CameraConfig, SnapOptions};
use crate::error::CameraError;
use crate::follow::{FollowOptions, FollowState, FollowTarget, FollowTask, ResumePolicy};
use crate::region::Region;
use crate::snap::{SnapKind, SnapStep, SnapTask};

/// Zoom factor applied per wheel step.
const WHEEL_STEP: f64 = 1.1;
/// Wheel steps beyond this are clamped; `1.1^160` already spans the default
/// zoom range from end to end.
const MAX_WHEEL_STEPS: i32 = 160;

/// Notifications recorded during ticks and commands, read with
/// [`Camera::drain_events`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraEvent {
    /// A snap reached its target.
    SnapCompleted {
        /// Which field the snap animated.
        kind: SnapKind,
    },
    /// The follow target was dropped and following stopped.
    FollowLost,
}

/// Animated camera: owns the [`Viewport2D`] and every task that writes it.
///
/// Position is written by either a position snap or the follow task, never
/// both in the same tick. Zoom is written only by the zoom snap or by wheel
/// input.
#[derive(Debug)]
pub struct Camera {
    viewport: Viewport2D,
    behaviors: Behaviors,
    snap_options: SnapOptions,
    resume_policy: ResumePolicy,
    position_snap: Option<SnapTask<Point>>,
    zoom_snap: Option<SnapTask<f64>>,
    follow: Option<FollowTask>,
    drag_last: Option<Point>,
    events: Vec<CameraEvent>,
}

impl Camera {
    /// Creates a camera from its startup configuration.
    #[must_use]
    pub fn new(config: &CameraConfig) -> Self {
        let mut viewport = Viewport2D::new(config.screen_rect());
        let (min_zoom, max_zoom) = config.zoom_limits;
        viewport.set_zoom_limits(min_zoom, max_zoom);
        viewport.set_world_bounds(config.world_bounds());
        viewport.set_clamp_mode(config.clamp_mode);
        Self {
            viewport,
            behaviors: config.behaviors,
            snap_options: config.snap.sanitized(),
            resume_policy: config.resume_policy,
            position_snap: None,
            zoom_snap: None,
            follow: None,
            drag_last: None,
            events: Vec::new(),
        }
    }

    /// Read‑only camera state for rendering and coordinate conversion.
    #[must_use]
    pub fn viewport(&self) -> &Viewport2D {
        &self.viewport
    }

    /// World point at the center of the view.
    #[must_use]
    pub fn position(&self) -> Point {
        self.viewport.center()
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Enabled input behaviours.
    #[must_use]
    pub fn behaviors(&self) -> Behaviors {
        self.behaviors
    }

    /// Replaces the enabled input behaviours.
    pub fn set_behaviors(&mut self, behaviors: Behaviors) {
        self.behaviors = behaviors;
        if !behaviors.contains(Behaviors::DRAG) {
            self.drag_end();
        }
    }

    /// Resizes the screen; center and zoom are kept.
    pub fn set_screen_size(&mut self, size: Size) {
        self.viewport.set_view_rect(size.to_rect());
    }

    /// Active position snap, if any.
    #[must_use]
    pub fn position_snap(&self) -> Option<&SnapTask<Point>> {
        self.position_snap.as_ref()
    }

    /// Active zoom snap, if any.
    #[must_use]
    pub fn zoom_snap(&self) -> Option<&SnapTask<f64>> {
        self.zoom_snap.as_ref()
    }

    /// Active follow task, if any.
    #[must_use]
    pub fn follow_task(&self) -> Option<&FollowTask> {
        self.follow.as_ref()
    }

    /// State of the follow task, or `None` when not following.
    #[must_use]
    pub fn follow_state(&self) -> Option<FollowState> {
        self.follow.as_ref().map(FollowTask::state)
    }

    /// Returns `true` when a follow task exists and is not paused.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.follow_state() == Some(FollowState::Active)
    }

    /// Takes all events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<CameraEvent> {
        mem::take(&mut self.events)
    }

    /// Frames `region`: eases the center to its middle and the zoom to the
    /// largest value that keeps the whole region visible.
    ///
    /// Replaces any running snaps and pauses an active follow.
    ///
    /// Fails with [`CameraError::EmptyScreen`] while the screen has no area;
    /// the camera is left unchanged.
    pub fn snap_to(&mut self, region: &Region) -> Result<(), CameraError> {
        self.frame_rect(region.name(), region.rect())
    }

    /// Same as [`Camera::snap_to`] for an unnamed world rectangle.
    ///
    /// Rectangles with a non‑finite corner or a zero or negative extent are
    /// rejected as well.
    pub fn snap_to_rect(&mut self, rect: Rect) -> Result<(), CameraError> {
        self.frame_rect("<rect>", rect)
    }

    fn frame_rect(&mut self, name: &str, rect: Rect) -> Result<(), CameraError> {
        let rect = Region::new(name, rect.origin(), rect.size())?.rect();
        if self.screen_is_empty() {
            return Err(CameraError::EmptyScreen);
        }
        let Some(zoom) = self.viewport.fit_zoom(rect) else {
            return Err(CameraError::DegenerateRegion {
                name: name.into(),
                width: rect.width(),
                height: rect.height(),
            });
        };
        let options = self.snap_options;
        self.snap_zoom(zoom, options);
        self.snap_position(rect.center(), options);
        Ok(())
    }

    /// Starts (or replaces) a position snap toward `target`.
    ///
    /// An active follow is paused, not stopped. Non‑finite targets are
    /// ignored.
    pub fn snap_position(&mut self, target: Point, options: SnapOptions) {
        if !target.is_finite() {
            tracing::warn!(x = target.x, y = target.y, "non-finite snap target ignored");
            return;
        }
        tracing::debug!(x = target.x, y = target.y, "position snap started");
        self.position_snap = Some(SnapTask::new(self.viewport.center(), target, options));
        let auto_resume = self.resume_policy == ResumePolicy::AfterSnap;
        if let Some(follow) = self.follow.as_mut() {
            if follow.state() == FollowState::Active {
                tracing::debug!("follow paused by position snap");
                follow.pause(auto_resume);
            }
        }
    }

    fn screen_is_empty(&self) -> bool {
        let size = self.viewport.screen_size();
        !(size.width > 0.0 && size.height > 0.0)
    }

    /// Starts (or replaces) a zoom snap toward `zoom`, clamped to the zoom
    /// limits. Non‑finite or non‑positive targets are ignored.
    pub fn snap_zoom(&mut self, zoom: f64, options: SnapOptions) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        let target = self.viewport.clamp_zoom(zoom);
        tracing::debug!(zoom = target, "zoom snap started");
        self.zoom_snap = Some(SnapTask::new(self.viewport.zoom(), target, options));
    }

    /// Removes every snap immediately; the camera stays where it is.
    ///
    /// A follow paused by the snap resumes under [`ResumePolicy::AfterSnap`].
    pub fn cancel_snap(&mut self) {
        if self.zoom_snap.take().is_some() {
            tracing::debug!("zoom snap cancelled");
        }
        self.cancel_position_snap();
    }

    fn cancel_position_snap(&mut self) {
        if self.position_snap.take().is_some() {
            tracing::debug!("position snap cancelled");
            self.resume_interrupted_follow();
        }
    }

    /// Starts following `target`, replacing any previous follow.
    ///
    /// A running position snap is cancelled so the follow takes over at once.
    /// When `options.frame` is set, a holding zoom snap eases the zoom to fit
    /// that frame.
    ///
    /// Fails without touching the camera if the target is already gone or
    /// the speed is not a finite positive number.
    pub fn follow(
        &mut self,
        target: Weak<dyn FollowTarget>,
        options: FollowOptions,
    ) -> Result<(), CameraError> {
        if !options.speed.is_finite() || options.speed <= 0.0 {
            return Err(CameraError::InvalidSpeed(options.speed));
        }
        if target.strong_count() == 0 {
            tracing::warn!("follow target is no longer alive, ignoring follow request");
            return Err(CameraError::InvalidTarget);
        }

        if self.position_snap.take().is_some() {
            tracing::debug!("position snap superseded by follow");
        }
        if let Some(frame) = options.frame {
            if let Some(zoom) = self.viewport.fit_zoom(frame.to_rect()) {
                let hold = self.snap_options.with_remove_on_complete(false);
                self.snap_zoom(zoom, hold);
            } else if self.screen_is_empty() {
                tracing::warn!("screen has no area, follow keeps the current zoom");
            } else {
                tracing::warn!(
                    width = frame.width,
                    height = frame.height,
                    "degenerate follow frame, follow keeps the current zoom"
                );
            }
        }
        tracing::debug!(speed = options.speed, "follow started");
        self.follow = Some(FollowTask::new(target, options.speed));
        Ok(())
    }

    /// Stops following; the camera keeps its last position.
    pub fn stop_follow(&mut self) {
        if self.follow.take().is_some() {
            tracing::debug!("follow stopped");
        }
    }

    /// Pauses the follow until [`Camera::resume_follow`].
    pub fn pause_follow(&mut self) {
        if let Some(follow) = self.follow.as_mut() {
            follow.pause(false);
            tracing::debug!("follow paused");
        }
    }

    /// Resumes a paused follow.
    ///
    /// A running position snap is cancelled, as a new follow would do.
    pub fn resume_follow(&mut self) {
        let Some(follow) = self.follow.as_mut() else {
            return;
        };
        if follow.state() == FollowState::Active {
            return;
        }
        follow.resume();
        tracing::debug!("follow resumed");
        if self.position_snap.take().is_some() {
            tracing::debug!("position snap superseded by follow");
        }
    }

    /// Resumes a follow paused by a snap or a drag once neither is running.
    fn resume_interrupted_follow(&mut self) {
        if self.position_snap.is_some() || self.drag_last.is_some() {
            return;
        }
        if let Some(follow) = self.follow.as_mut() {
            if follow.resumes_automatically() {
                follow.resume();
                tracing::debug!("follow resumed");
            }
        }
    }

    /// Advances all animations by `dt` seconds and writes the camera state.
    ///
    /// Negative or non‑finite `dt` is treated as zero. This never fails:
    /// a dropped follow target just ends the follow.
    pub fn tick(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.tick_zoom(dt);
        self.tick_position(dt);
        self.tick_follow(dt);
    }

    fn tick_zoom(&mut self, dt: f64) {
        let Some(task) = self.zoom_snap.as_mut() else {
            return;
        };
        let step = task.advance(self.viewport.zoom(), dt);
        let remove = task.options().remove_on_complete;
        self.viewport.set_zoom(step.value());
        if let SnapStep::Arrived(_) = step {
            tracing::debug!(zoom = step.value(), "zoom snap completed");
            self.events.push(CameraEvent::SnapCompleted {
                kind: SnapKind::Zoom,
            });
            if remove {
                self.zoom_snap = None;
            }
        }
    }

    fn tick_position(&mut self, dt: f64) {
        let Some(task) = self.position_snap.as_mut() else {
            return;
        };
        let step = task.advance(self.viewport.center(), dt);
        let remove = task.options().remove_on_complete;
        self.viewport.set_center(step.value());
        if let SnapStep::Arrived(target) = step {
            tracing::debug!(x = target.x, y = target.y, "position snap completed");
            self.events.push(CameraEvent::SnapCompleted {
                kind: SnapKind::Position,
            });
            if remove {
                self.position_snap = None;
                self.resume_interrupted_follow();
            }
        }
    }

    fn tick_follow(&mut self, dt: f64) {
        if self.position_snap.is_some() {
            return;
        }
        let Some(follow) = self.follow.as_ref() else {
            return;
        };
        if follow.state() != FollowState::Active {
            return;
        }
        match follow.target_position() {
            Some(target) => {
                let next = follow.chase(self.viewport.center(), target, dt);
                self.viewport.set_center(next);
            }
            None => {
                tracing::debug!("follow target dropped, follow stopped");
                self.follow = None;
                self.events.push(CameraEvent::FollowLost);
            }
        }
    }

    /// Begins a drag at `screen_pt`. Ignored unless [`Behaviors::DRAG`] is on.
    ///
    /// The user takes over the position: a running position snap is
    /// cancelled and an active follow is paused until [`Camera::drag_end`]
    /// (or until [`Camera::resume_follow`] under [`ResumePolicy::Manual`]).
    pub fn drag_start(&mut self, screen_pt: Point) {
        if !self.behaviors.contains(Behaviors::DRAG) {
            return;
        }
        self.drag_last = Some(screen_pt);
        self.cancel_position_snap();
        let auto_resume = self.resume_policy == ResumePolicy::AfterSnap;
        if let Some(follow) = self.follow.as_mut() {
            if follow.state() == FollowState::Active {
                tracing::debug!("follow paused by drag");
                follow.pause(auto_resume);
            }
        }
    }

    /// Pans by the pointer movement since the last drag event.
    pub fn drag_move(&mut self, screen_pt: Point) {
        let Some(last) = self.drag_last else {
            return;
        };
        self.viewport.pan_by_screen(screen_pt - last);
        self.drag_last = Some(screen_pt);
    }

    /// Ends the current drag, if any, and resumes a follow the drag paused.
    pub fn drag_end(&mut self) {
        if self.drag_last.take().is_some() {
            self.resume_interrupted_follow();
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    /// Zooms about `screen_anchor` by `1.1^steps`. Ignored unless
    /// [`Behaviors::WHEEL`] is on; a running zoom snap is cancelled.
    ///
    /// `steps` is clamped to `±160`; the result is clamped to the zoom limits.
    pub fn wheel(&mut self, screen_anchor: Point, steps: i32) {
        if !self.behaviors.contains(Behaviors::WHEEL) || steps == 0 {
            return;
        }
        let steps = steps.clamp(-MAX_WHEEL_STEPS, MAX_WHEEL_STEPS);
        let mut factor = 1.0;
        for _ in 0..steps.unsigned_abs() {
            factor *= WHEEL_STEP;
        }
        if steps < 0 {
            factor = 1.0 / factor;
        }
        if self.zoom_snap.take().is_some() {
            tracing::debug!("zoom snap cancelled by wheel");
        }
        self.viewport.zoom_about_screen_point(screen_anchor, factor);
    }
}
