// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Burrow Camera: eased snapping and target following on top of
//! [`burrow_view2d::Viewport2D`].
//!
//! The crate is driven by a host frame loop. Commands (focus a region,
//! follow a target) set up tasks; [`Camera::tick`] advances them once per
//! frame and writes the result into the viewport before the host renders.
//!
//! - [`Camera`] owns the viewport, the position and zoom [`SnapTask`]s and
//!   the single [`FollowTask`].
//! - [`RegionRegistry`] maps names to world rectangles.
//! - [`CameraController`] is the command surface a UI layer talks to.
//!
//! ## Example
//!
//! ```rust
//! use burrow_camera::{Camera, CameraConfig, RegionRegistry};
//! use kurbo::Point;
//!
//! let regions = RegionRegistry::from_entries([("tl", (100.0, 100.0, 200.0, 200.0))]).unwrap();
//! let mut camera = Camera::new(&CameraConfig::default());
//!
//! camera.snap_to(regions.get("tl").unwrap()).unwrap();
//! for _ in 0..600 {
//!     camera.tick(1.0 / 60.0);
//! }
//! assert_eq!(camera.position(), Point::new(200.0, 200.0));
//! assert_eq!(camera.zoom(), 2.5);
//! ```
//!
//! ## Ownership of camera fields
//!
//! Within a tick the zoom snap runs first, then the position snap, then the
//! follow task. A running position snap pauses the follow task, and starting
//! a follow cancels a running position snap, so the camera center always has
//! exactly one writer.
//!
//! This crate is `no_std` + `alloc`. Diagnostics go through `tracing`; the
//! host decides whether to install a subscriber.

#![no_std]

extern crate alloc;

mod camera;
mod config;
mod controller;
mod error;
mod follow;
mod region;
mod snap;

pub use burrow_view2d::{ClampMode, FitMode, Viewport2D};
pub use camera::{Camera, CameraEvent};
pub use config::{Behaviors, CameraConfig, SnapOptions};
pub use controller::{CameraCommand, CameraController};
pub use error::CameraError;
pub use follow::{FollowOptions, FollowState, FollowTarget, FollowTask, ResumePolicy};
pub use region::{Region, RegionRegistry};
pub use snap::{Approach, SnapKind, SnapStep, SnapTask};
