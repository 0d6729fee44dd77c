// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors returned by camera commands and region registration.
///
/// Per‑frame anomalies never surface here: [`crate::Camera::tick`] recovers
/// from them locally.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// The requested region name is not registered.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    /// The follow target was already dropped when `follow` was called.
    #[error("follow target is no longer alive")]
    InvalidTarget,
    /// The follow speed is not a finite positive number.
    #[error("follow speed must be finite and positive, got {0}")]
    InvalidSpeed(f64),
    /// A region with zero or negative width or height.
    #[error("region '{name}' has degenerate size {width}x{height}")]
    DegenerateRegion {
        /// Name of the rejected region.
        name: String,
        /// Width in world units.
        width: f64,
        /// Height in world units.
        height: f64,
    },
    /// A region whose origin is not a finite point.
    #[error("region '{name}' has non-finite origin ({x}, {y})")]
    InvalidOrigin {
        /// Name of the rejected region.
        name: String,
        /// Origin x in world units.
        x: f64,
        /// Origin y in world units.
        y: f64,
    },
    /// The screen has zero or negative extent, so nothing can be framed.
    #[error("screen has no area, cannot frame a region")]
    EmptyScreen,
    /// Two regions were registered under the same name.
    #[error("region '{0}' is already registered")]
    DuplicateRegion(String),
}
