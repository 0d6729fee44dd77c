// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named world‑space rectangles used as camera framing targets.
//!
//! A [`RegionRegistry`] is built once from a fixed list and never changes
//! afterwards. Lookups are by name; iteration follows registration order.
//!
//! ```
//! use burrow_camera::{CameraError, RegionRegistry};
//!
//! let regions = RegionRegistry::from_entries([
//!     ("tl", (100.0, 100.0, 200.0, 200.0)),
//!     ("world", (0.0, 0.0, 2000.0, 2000.0)),
//! ])
//! .unwrap();
//!
//! let tl = regions.get("tl").unwrap();
//! assert_eq!(tl.center(), kurbo::Point::new(200.0, 200.0));
//! assert!(matches!(regions.get("nope"), Err(CameraError::UnknownRegion(_))));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::error::CameraError;

/// A named rectangle in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    name: String,
    origin: Point,
    size: Size,
}

impl Region {
    /// Creates a region from its origin (minimum corner) and size.
    ///
    /// Fails with [`CameraError::DegenerateRegion`] unless both size
    /// components are finite and strictly positive, and with
    /// [`CameraError::InvalidOrigin`] if the origin is not finite.
    pub fn new(name: impl Into<String>, origin: Point, size: Size) -> Result<Self, CameraError> {
        let name = name.into();
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(size.width) || !valid(size.height) {
            return Err(CameraError::DegenerateRegion {
                name,
                width: size.width,
                height: size.height,
            });
        }
        if !origin.is_finite() {
            return Err(CameraError::InvalidOrigin {
                name,
                x: origin.x,
                y: origin.y,
            });
        }
        Ok(Self { name, origin, size })
    }

    /// Region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum corner in world space.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Extent in world units.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// World‑space rectangle covered by this region.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Center of the region; this is where the camera looks when framing it.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

/// Read‑only lookup of [`Region`]s by name.
#[derive(Clone, Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
    by_name: HashMap<String, usize>,
}

impl RegionRegistry {
    /// Builds a registry from `(name, (x, y, width, height))` entries.
    ///
    /// Fails fast on the first degenerate or duplicate entry.
    pub fn from_entries<N, I>(entries: I) -> Result<Self, CameraError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, (f64, f64, f64, f64))>,
    {
        Self::from_regions(entries.into_iter().map(|(name, (x, y, w, h))| {
            Region::new(name, Point::new(x, y), Size::new(w, h))
        }))
    }

    /// Builds a registry from already constructed regions.
    pub fn from_regions<I>(regions: I) -> Result<Self, CameraError>
    where
        I: IntoIterator<Item = Result<Region, CameraError>>,
    {
        let mut registry = Self::default();
        for region in regions {
            let region = region?;
            if registry.by_name.contains_key(region.name()) {
                return Err(CameraError::DuplicateRegion(region.name));
            }
            registry
                .by_name
                .insert(region.name().to_string(), registry.regions.len());
            registry.regions.push(region);
        }
        Ok(registry)
    }

    /// Looks up a region by name.
    pub fn get(&self, name: &str) -> Result<&Region, CameraError> {
        self.by_name
            .get(name)
            .map(|&idx| &self.regions[idx])
            .ok_or_else(|| CameraError::UnknownRegion(name.to_string()))
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates regions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter()
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if no regions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn lookup_and_order() {
        let regions = RegionRegistry::from_entries([
            ("world", (0.0, 0.0, 2000.0, 2000.0)),
            ("tl", (100.0, 100.0, 200.0, 200.0)),
        ])
        .unwrap();

        assert_eq!(regions.len(), 2);
        let names: Vec<&str> = regions.iter().map(Region::name).collect();
        assert_eq!(names, ["world", "tl"]);

        let tl = regions.get("tl").unwrap();
        assert_eq!(tl.rect(), Rect::new(100.0, 100.0, 300.0, 300.0));
        assert_eq!(tl.center(), Point::new(200.0, 200.0));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let regions = RegionRegistry::from_entries([("tl", (0.0, 0.0, 1.0, 1.0))]).unwrap();
        assert_eq!(
            regions.get("br"),
            Err(CameraError::UnknownRegion("br".into()))
        );
        assert!(!regions.contains("br"));
    }

    #[test]
    fn degenerate_regions_fail_fast() {
        let err = RegionRegistry::from_entries([
            ("ok", (0.0, 0.0, 10.0, 10.0)),
            ("flat", (0.0, 0.0, 10.0, 0.0)),
        ])
        .unwrap_err();
        assert!(matches!(err, CameraError::DegenerateRegion { ref name, .. } if name == "flat"));

        assert!(Region::new("neg", Point::ZERO, Size::new(-1.0, 5.0)).is_err());
        assert!(Region::new("nan", Point::ZERO, Size::new(f64::NAN, 5.0)).is_err());
    }

    #[test]
    fn non_finite_origin_is_rejected() {
        let err = Region::new("bad", Point::new(f64::NAN, 0.0), Size::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, CameraError::InvalidOrigin { ref name, .. } if name == "bad"));
        assert!(RegionRegistry::from_entries([("inf", (f64::INFINITY, 0.0, 10.0, 10.0))]).is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = RegionRegistry::from_entries([
            ("tl", (0.0, 0.0, 10.0, 10.0)),
            ("tl", (5.0, 5.0, 10.0, 10.0)),
        ])
        .unwrap_err();
        assert_eq!(err, CameraError::DuplicateRegion("tl".into()));
    }
}
