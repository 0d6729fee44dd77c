// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for the camera position relative to optional world bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the camera may move freely.
    #[default]
    None,
    /// Clamp so that the view never moves completely outside the world bounds.
    ///
    /// When world bounds are present, this mode keeps at least some portion of
    /// them visible.
    KeepSomeVisible,
}

/// Policy used by [`crate::Viewport2D::fit_zoom`] to pick a uniform zoom for a
/// rectangle whose aspect ratio differs from the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Use the smaller of the width/height ratios so the whole rectangle is
    /// visible inside the view.
    #[default]
    Contain,
    /// Use the larger of the width/height ratios so the rectangle fills the
    /// view; parts of it may be cut off along one axis.
    Cover,
}
