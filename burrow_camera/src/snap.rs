// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased snap animations for camera position and zoom.

use kurbo::Point;

use crate::config::SnapOptions;

/// Which camera field a snap animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapKind {
    /// Camera center in world space.
    Position,
    /// Uniform zoom factor.
    Zoom,
}

/// A value that can be eased toward a target.
pub trait Approach: Copy {
    /// Moves `self` toward `target` by fraction `t` in `[0, 1]`.
    fn approach(self, target: Self, t: f64) -> Self;

    /// Returns `true` when `self` is within `epsilon` of `target`.
    fn within(self, target: Self, epsilon: f64) -> bool;
}

impl Approach for Point {
    fn approach(self, target: Self, t: f64) -> Self {
        self.lerp(target, t)
    }

    fn within(self, target: Self, epsilon: f64) -> bool {
        (target.x - self.x).abs() <= epsilon && (target.y - self.y).abs() <= epsilon
    }
}

impl Approach for f64 {
    fn approach(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }

    // Zoom tolerance scales with the target so small zooms still converge tightly.
    fn within(self, target: Self, epsilon: f64) -> bool {
        (target - self).abs() <= epsilon * target.abs().max(f64::MIN_POSITIVE)
    }
}

/// Result of advancing a [`SnapTask`] by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapStep<T> {
    /// Still travelling; write this value.
    Moving(T),
    /// Reached the target on this tick.
    Arrived(T),
    /// Already arrived earlier and holding the target.
    Holding(T),
}

impl<T: Copy> SnapStep<T> {
    /// The value to write into the camera.
    #[must_use]
    pub fn value(self) -> T {
        match self {
            Self::Moving(v) | Self::Arrived(v) | Self::Holding(v) => v,
        }
    }
}

/// One running snap animation.
#[derive(Clone, Copy, Debug)]
pub struct SnapTask<T> {
    start: T,
    target: T,
    elapsed: f64,
    options: SnapOptions,
    arrived: bool,
}

impl<T: Approach> SnapTask<T> {
    /// Starts a snap from `start` toward `target`.
    ///
    /// Unusable option fields are replaced by their defaults.
    #[must_use]
    pub fn new(start: T, target: T, options: SnapOptions) -> Self {
        if !options.is_valid() {
            tracing::warn!(?options, "invalid snap options, using defaults for bad fields");
        }
        Self {
            start,
            target,
            elapsed: 0.0,
            options: options.sanitized(),
            arrived: false,
        }
    }

    /// Value the camera had when the snap started.
    #[must_use]
    pub fn start(&self) -> T {
        self.start
    }

    /// Target value.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Seconds since the snap started.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Easing options this snap was started with.
    #[must_use]
    pub fn options(&self) -> SnapOptions {
        self.options
    }

    /// Returns `true` once the target was reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.arrived
    }

    /// Advances the snap from `current` by `dt` seconds.
    ///
    /// The returned value never moves past the target. Arrival is declared
    /// once the value is within `epsilon` or `max_duration` has elapsed; the
    /// target value is then returned exactly.
    pub fn advance(&mut self, current: T, dt: f64) -> SnapStep<T> {
        if self.arrived {
            return SnapStep::Holding(self.target);
        }
        self.elapsed += dt;
        if current.within(self.target, self.options.epsilon)
            || self.elapsed >= self.options.max_duration
        {
            self.arrived = true;
            return SnapStep::Arrived(self.target);
        }

        let t = (self.options.rate * dt).clamp(0.0, 1.0);
        let next = current.approach(self.target, t);
        if next.within(self.target, self.options.epsilon) {
            self.arrived = true;
            SnapStep::Arrived(self.target)
        } else {
            SnapStep::Moving(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn position_snap_decreases_distance_every_tick() {
        let target = Point::new(200.0, 200.0);
        let mut task = SnapTask::new(Point::new(250.0, 250.0), target, SnapOptions::default());
        let mut current = task.start();
        let mut last = current.distance(target);
        let mut ticks = 0;
        loop {
            ticks += 1;
            match task.advance(current, DT) {
                SnapStep::Moving(v) => {
                    let d = v.distance(target);
                    assert!(d < last, "distance must shrink: {d} >= {last}");
                    last = d;
                    current = v;
                }
                SnapStep::Arrived(v) => {
                    assert_eq!(v, target);
                    break;
                }
                SnapStep::Holding(_) => unreachable!("task had not arrived yet"),
            }
            assert!(ticks < 1_000, "snap must terminate");
        }
        assert!(task.is_complete());
        assert_eq!(task.advance(target, DT), SnapStep::Holding(target));
    }

    #[test]
    fn zoom_snap_never_overshoots() {
        let mut task = SnapTask::new(1.0, 2.5, SnapOptions::default());
        let mut zoom = 1.0;
        while let SnapStep::Moving(v) = task.advance(zoom, DT) {
            assert!(v > zoom && v < 2.5);
            zoom = v;
        }
        assert!(task.is_complete());
    }

    #[test]
    fn large_step_lands_exactly_on_target() {
        let mut task = SnapTask::new(0.5, 2.0, SnapOptions::default());
        // rate * dt >= 1 covers the whole distance.
        assert_eq!(task.advance(0.5, 1.0), SnapStep::Arrived(2.0));
    }

    #[test]
    fn max_duration_forces_completion() {
        let options = SnapOptions {
            rate: 1e-6,
            max_duration: 0.5,
            ..SnapOptions::default()
        };
        let mut task = SnapTask::new(Point::ZERO, Point::new(1e6, 0.0), options);
        assert!(matches!(task.advance(Point::ZERO, 0.25), SnapStep::Moving(_)));
        assert_eq!(
            task.advance(Point::ZERO, 0.25),
            SnapStep::Arrived(Point::new(1e6, 0.0))
        );
    }

    #[test]
    fn bad_options_fall_back_to_defaults() {
        let options = SnapOptions {
            rate: f64::NAN,
            epsilon: -1.0,
            max_duration: f64::INFINITY,
            remove_on_complete: false,
        };
        assert!(!options.is_valid());
        let mut task = SnapTask::new(Point::ZERO, Point::new(100.0, 0.0), options);
        let used = task.options();
        assert!(used.is_valid());
        assert_eq!(used.rate, SnapOptions::default().rate);
        assert_eq!(used.max_duration, SnapOptions::default().max_duration);
        assert!(!used.remove_on_complete);

        match task.advance(Point::ZERO, DT) {
            SnapStep::Moving(p) => assert!(p.is_finite() && p.x > 0.0),
            other => panic!("expected progress, got {other:?}"),
        }
    }

    #[test]
    fn zero_dt_makes_no_progress() {
        let mut task = SnapTask::new(1.0, 3.0, SnapOptions::default());
        assert_eq!(task.advance(1.0, 0.0), SnapStep::Moving(1.0));
        assert!(!task.is_complete());
    }
}
