// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Burrow View 2D: camera state and coordinate transforms for a 2D world.
//!
//! This crate provides a small, headless model of a camera looking at a
//! world‑space plane through a screen‑space view rectangle (in pixels). It
//! focuses on:
//! - Camera state: the world point at the view center plus a uniform zoom.
//! - Coordinate conversion between world and screen space.
//! - Computing the zoom that frames a world rectangle.
//! - Simple zoom limits and optional clamping against world bounds.
//!
//! It does **not** animate anything. Eased snapping and follow behaviour live
//! in `burrow_camera`, which owns a [`Viewport2D`] and writes into it once per
//! frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use burrow_view2d::Viewport2D;
//!
//! // 500x500 screen.
//! let mut view = Viewport2D::new(Rect::new(0.0, 0.0, 500.0, 500.0));
//!
//! // Frame the world rectangle (100, 100)-(300, 300).
//! view.fit_rect(Rect::new(100.0, 100.0, 300.0, 300.0));
//! assert_eq!(view.center(), Point::new(200.0, 200.0));
//! assert_eq!(view.zoom(), 2.5);
//!
//! // The top-left screen pixel now shows the rectangle's origin.
//! let world_pt = view.screen_to_world(Point::ZERO);
//! assert!((world_pt.x - 100.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Cameras are axis‑aligned with a **uniform** zoom factor.
//! - `world = (screen - screen_center) / zoom + center`; the inverse is used
//!   for placing world content on screen.
//! - Zoom is kept strictly positive, so both directions are always defined.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport2d;

pub use modes::{ClampMode, FitMode};
pub use viewport2d::{Viewport2D, Viewport2DDebugInfo};
