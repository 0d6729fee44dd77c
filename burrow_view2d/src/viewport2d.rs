// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{ClampMode, FitMode};

/// Camera state over a world‑space plane.
///
/// `Viewport2D` tracks a rectangular screen region (in pixels), the world
/// point shown at the center of that region, and a uniform zoom factor. It
/// can be used to:
/// - Convert points and rectangles between world and screen coordinates.
/// - Pan by screen deltas and zoom around a chosen anchor point.
/// - Compute the zoom that frames a world rectangle inside the view.
///
/// The mapping is `world = (screen - screen_center) / zoom + center`.
#[derive(Clone, Debug)]
pub struct Viewport2D {
    view_rect: Rect,
    world_bounds: Option<Rect>,
    center: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    clamp_mode: ClampMode,
    fit_mode: FitMode,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Viewport2D {
    /// Creates a new viewport covering `view_rect` with default zoom and clamping.
    ///
    /// - Initial zoom is `1.0`.
    /// - The world origin starts at the top‑left corner of the view.
    /// - Zoom is clamped to the range `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            world_bounds: None,
            center: Point::new(view_rect.width() * 0.5, view_rect.height() * 0.5),
            zoom: 1.0,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            clamp_mode: ClampMode::default(),
            fit_mode: FitMode::default(),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the current view rectangle in screen coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Returns the size of the view rectangle in pixels.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.view_rect.size()
    }

    /// Sets the view rectangle in screen coordinates.
    ///
    /// The camera keeps its world center and zoom; only the visible world
    /// region changes.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Sets optional world bounds used for clamping.
    pub fn set_world_bounds(&mut self, bounds: Option<Rect>) {
        if self.world_bounds == bounds {
            return;
        }
        self.world_bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Returns the current world bounds, if any.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        self.world_bounds
    }

    /// Returns the world‑space point shown at the center of the view.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Moves the camera so that `center` is shown at the center of the view.
    ///
    /// Non‑finite points are ignored.
    pub fn set_center(&mut self, center: Point) {
        if !center.is_finite() || self.center == center {
            return;
        }
        self.center = center;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// Non‑finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let clamped = self.clamp_zoom(zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.zoom = clamped;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Returns the configured `(min_zoom, max_zoom)` pair.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`, and
    /// the lower limit is kept strictly positive. The current zoom is clamped
    /// into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom.max(f64::MIN_POSITIVE);
        self.max_zoom = max_zoom.max(self.min_zoom);
        self.set_zoom(self.zoom);
    }

    /// Clamps `zoom` into the configured zoom range.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Sets the clamp mode for the camera position relative to world bounds.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_bounds();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the policy used by [`Viewport2D::fit_zoom`].
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Pans the view by a delta in screen space.
    ///
    /// Dragging content to the right moves the camera center to the left in
    /// world space.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.center -= delta / self.zoom;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Zooms around a given anchor point in screen coordinates.
    ///
    /// The world point under the anchor stays under the anchor as far as the
    /// zoom limits allow.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let old_zoom = self.zoom;
        let new_zoom = self.clamp_zoom(old_zoom * factor);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }

        let anchor_world = self.screen_to_world(anchor);
        let offset = anchor - self.view_rect.center();
        self.zoom = new_zoom;
        self.center = anchor_world - offset / new_zoom;
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Returns the zoom that frames `rect` inside the view under the current
    /// [`FitMode`], clamped into the zoom range.
    ///
    /// Returns `None` when the rectangle is not finite, or when either the
    /// rectangle or the view has a zero or negative extent.
    #[must_use]
    pub fn fit_zoom(&self, rect: Rect) -> Option<f64> {
        let rect = rect.abs();
        if !rect.is_finite() || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        let view_size = self.view_rect.size();
        if view_size.width <= 0.0 || view_size.height <= 0.0 {
            return None;
        }

        let sx = view_size.width / rect.width();
        let sy = view_size.height / rect.height();
        let zoom = match self.fit_mode {
            FitMode::Contain => sx.min(sy),
            FitMode::Cover => sx.max(sy),
        };
        Some(self.clamp_zoom(zoom))
    }

    /// Immediately centers the camera on `rect` and zooms to fit it.
    ///
    /// Degenerate rectangles are ignored.
    pub fn fit_rect(&mut self, rect: Rect) {
        let Some(zoom) = self.fit_zoom(rect) else {
            return;
        };
        self.zoom = zoom;
        self.center = rect.center();
        self.rebuild_transforms();
        self.clamp_to_bounds();
    }

    /// Immediately fits the world bounds into the view.
    ///
    /// If no world bounds are set, this is a no‑op.
    pub fn fit_world(&mut self) {
        if let Some(bounds) = self.world_bounds {
            self.fit_rect(bounds);
        }
    }

    /// Returns the visible world‑space rectangle.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.screen_to_world_rect(self.view_rect)
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a world‑space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        self.world_to_screen.transform_rect_bbox(rect)
    }

    /// Converts a screen‑space rectangle into world coordinates.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        self.screen_to_world.transform_rect_bbox(rect)
    }

    /// Returns the world → screen transform.
    #[must_use]
    pub fn world_to_screen_transform(&self) -> Affine {
        self.world_to_screen
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Viewport2DDebugInfo {
        Viewport2DDebugInfo {
            view_rect: self.view_rect,
            world_bounds: self.world_bounds,
            visible_world_rect: self.visible_world_rect(),
            center: self.center,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            clamp_mode: self.clamp_mode,
            fit_mode: self.fit_mode,
        }
    }

    fn rebuild_transforms(&mut self) {
        let screen_center = self.view_rect.center().to_vec2();
        // World → screen: move the camera center to the origin, scale, then
        // translate onto the center of the view rect.
        self.world_to_screen = Affine::translate(screen_center)
            * Affine::scale(self.zoom)
            * Affine::translate(-self.center.to_vec2());
        self.screen_to_world = self.world_to_screen.inverse();
    }

    fn clamp_to_bounds(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let bounds = match self.world_bounds {
            Some(b) if b.width() > 0.0 && b.height() > 0.0 => b,
            _ => return,
        };

        let visible = self.visible_world_rect();
        if visible.width() <= 0.0 || visible.height() <= 0.0 {
            return;
        }

        let mut dx = 0.0;
        let mut dy = 0.0;

        // Keep some horizontal overlap between the visible rect and bounds.
        if visible.max_x() < bounds.min_x() {
            dx = bounds.min_x() - visible.max_x();
        } else if visible.min_x() > bounds.max_x() {
            dx = bounds.max_x() - visible.min_x();
        }

        if visible.max_y() < bounds.min_y() {
            dy = bounds.min_y() - visible.max_y();
        } else if visible.min_y() > bounds.max_y() {
            dy = bounds.max_y() - visible.min_y();
        }

        if dx != 0.0 || dy != 0.0 {
            self.center += Vec2::new(dx, dy);
            self.rebuild_transforms();
        }
    }
}

/// Debug snapshot of a [`Viewport2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Viewport2DDebugInfo {
    /// Current view rectangle in screen coordinates.
    pub view_rect: Rect,
    /// Optional world bounds for clamping.
    pub world_bounds: Option<Rect>,
    /// World‑space rectangle currently visible through the view.
    pub visible_world_rect: Rect,
    /// World‑space point at the center of the view.
    pub center: Point,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Clamp mode relative to bounds.
    pub clamp_mode: ClampMode,
    /// Fit mode used by [`Viewport2D::fit_zoom`] / [`Viewport2D::fit_rect`].
    pub fit_mode: FitMode,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{ClampMode, FitMode, Viewport2D};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn initial_view_maps_world_origin_to_top_left() {
        let vp = Viewport2D::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        assert_eq!(vp.center(), Point::new(250.0, 250.0));
        let origin = vp.world_to_screen(Point::ZERO);
        assert!(close(origin.x, 0.0) && close(origin.y, 0.0));
    }

    #[test]
    fn screen_to_world_follows_center_and_zoom() {
        let mut vp = Viewport2D::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        vp.set_center(Point::new(200.0, 200.0));
        vp.set_zoom(2.5);

        // Screen center is the camera center.
        let mid = vp.screen_to_world(Point::new(250.0, 250.0));
        assert!(close(mid.x, 200.0) && close(mid.y, 200.0));

        // (0, 0) is 250px left/up of center: 250 / 2.5 = 100 world units.
        let corner = vp.screen_to_world(Point::ZERO);
        assert!(close(corner.x, 100.0) && close(corner.y, 100.0));
    }

    #[test]
    fn world_screen_roundtrip() {
        let mut vp = Viewport2D::new(Rect::new(10.0, 20.0, 810.0, 620.0));
        vp.set_center(Point::new(-30.0, 12.5));
        vp.set_zoom(0.75);

        let world_pt = Point::new(10.0, -5.0);
        let back = vp.screen_to_world(vp.world_to_screen(world_pt));
        assert!(close(back.x, world_pt.x));
        assert!(close(back.y, world_pt.y));
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut vp = Viewport2D::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        vp.set_center(Point::new(f64::NAN, 5.0));
        vp.set_center(Point::new(0.0, f64::INFINITY));
        assert_eq!(vp.center(), Point::new(250.0, 250.0));
        assert_eq!(vp.fit_zoom(Rect::new(0.0, 0.0, f64::NAN, 10.0)), None);
        assert_eq!(vp.fit_zoom(Rect::new(0.0, 0.0, f64::INFINITY, 10.0)), None);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let view_rect = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut vp = Viewport2D::new(view_rect);

        let anchor = Point::new(100.0, 450.0);
        let before = vp.screen_to_world(anchor);
        vp.zoom_about_screen_point(anchor, 2.0);
        let after = vp.screen_to_world(anchor);

        assert!(close(vp.zoom(), 2.0));
        assert!(close(before.x, after.x));
        assert!(close(before.y, after.y));
    }

    #[test]
    fn pan_moves_content_with_the_pointer() {
        let mut vp = Viewport2D::new(Rect::new(0.0, 0.0, 400.0, 400.0));
        vp.set_zoom(2.0);
        let world_pt = Point::new(100.0, 100.0);
        let before = vp.world_to_screen(world_pt);

        vp.pan_by_screen(Vec2::new(40.0, -10.0));
        let after = vp.world_to_screen(world_pt);

        assert!(close(after.x - before.x, 40.0));
        assert!(close(after.y - before.y, -10.0));
    }

    #[test]
    fn fit_zoom_uses_contain_by_default() {
        let vp = Viewport2D::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        assert_eq!(vp.fit_zoom(Rect::new(100.0, 100.0, 300.0, 300.0)), Some(2.5));
        // Wide rect: width ratio 500/1000 is the binding one.
        assert_eq!(vp.fit_zoom(Rect::new(0.0, 0.0, 1000.0, 250.0)), Some(0.5));
        assert_eq!(vp.fit_zoom(Rect::new(0.0, 0.0, 0.0, 10.0)), None);
    }

    #[test]
    fn fit_zoom_cover_fills_the_view() {
        let mut vp = Viewport2D::new(Rect::new(0.0, 0.0, 500.0, 500.0));
        vp.set_fit_mode(FitMode::Cover);
        assert_eq!(vp.fit_zoom(Rect::new(0.0, 0.0, 1000.0, 250.0)), Some(2.0));
    }

    #[test]
    fn fit_world_shows_whole_bounds() {
        let view_rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let mut vp = Viewport2D::new(view_rect);

        let world_bounds = Rect::new(-50.0, -25.0, 50.0, 25.0);
        vp.set_world_bounds(Some(world_bounds));
        vp.fit_world();

        let visible = vp.visible_world_rect();
        assert!(visible.min_x() <= world_bounds.min_x() + 1e-9);
        assert!(visible.max_x() >= world_bounds.max_x() - 1e-9);
        assert!(visible.min_y() <= world_bounds.min_y() + 1e-9);
        assert!(visible.max_y() >= world_bounds.max_y() - 1e-9);
    }

    #[test]
    fn clamp_keeps_some_of_the_world_visible() {
        let mut vp = Viewport2D::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_clamp_mode(ClampMode::KeepSomeVisible);

        let bounds = Rect::new(0.0, 0.0, 50.0, 50.0);
        vp.set_world_bounds(Some(bounds));
        vp.set_center(Point::new(5_000.0, -5_000.0));

        let visible = vp.visible_world_rect();
        assert!(visible.min_x() <= bounds.max_x() + 1e-6);
        assert!(visible.max_y() >= bounds.min_y() - 1e-6);
    }

    #[test]
    fn zoom_limits_are_normalized_and_positive() {
        let mut vp = Viewport2D::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_zoom_limits(4.0, -1.0);
        let (min_zoom, max_zoom) = vp.zoom_limits();
        assert!(min_zoom > 0.0);
        assert_eq!(max_zoom, 4.0);

        vp.set_zoom(f64::NAN);
        assert!(vp.zoom() > 0.0);

        let info = vp.debug_info();
        assert_eq!(info.clamp_mode, ClampMode::None);
        assert!(info.min_zoom <= info.max_zoom);
    }
}
