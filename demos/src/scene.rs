// Copyright 2025 the Burrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bunny scene: four wiggling groups in the corners, a bigger group in the
//! middle, and one large bunny orbiting the world center.
//!
//! Nothing here is drawn. The scene only computes sprite transforms so the
//! host can project them through the camera and report what would be on
//! screen.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use burrow_camera::{CameraError, FollowTarget, RegionRegistry, Viewport2D};
use kurbo::{Point, Rect, Size, Vec2};

/// Screen size in pixels.
pub(crate) const SCREEN: Size = Size::new(500.0, 500.0);
/// World size in world units.
pub(crate) const WORLD: Size = Size::new(2000.0, 2000.0);
/// Chase speed used by the Follow button.
pub(crate) const FOLLOW_SPEED: f64 = 20.0;
/// World extent framed while following.
pub(crate) const FOLLOW_FRAME: Size = Size::new(1000.0, 1000.0);

/// Named camera targets as `(x, y, width, height)` with `(x, y)` the minimum corner.
const AREAS: [(&str, (f64, f64, f64, f64)); 6] = [
    ("world", (0.0, 0.0, 2000.0, 2000.0)),
    ("center", (800.0, 800.0, 400.0, 400.0)),
    ("tl", (100.0, 100.0, 200.0, 200.0)),
    ("tr", (1700.0, 100.0, 200.0, 200.0)),
    ("bl", (100.0, 1700.0, 200.0, 200.0)),
    ("br", (1700.0, 1700.0, 200.0, 200.0)),
];

/// Groups placed in the scene, with their sprite scale.
const GROUPS: [(&str, f64); 5] = [
    ("tl", 1.0),
    ("tr", 1.0),
    ("bl", 1.0),
    ("br", 1.0),
    ("center", 2.0),
];

/// Builds the region table used by the focus buttons.
pub(crate) fn regions() -> Result<RegionRegistry, CameraError> {
    RegionRegistry::from_entries(AREAS)
}

/// Phase accumulator advanced in display frames (1.0 per 60 Hz frame).
#[derive(Clone, Copy, Debug)]
struct Iteration {
    value: f64,
    step: f64,
}

impl Iteration {
    fn new(step: f64) -> Self {
        Self { value: 0.0, step }
    }

    fn advance(&mut self, frames: f64) {
        self.value += self.step * frames;
    }
}

/// One sprite as it would be handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SpriteInstance {
    /// Anchor position (sprite center) in world space.
    pub(crate) position: Point,
    /// Rotation in radians.
    pub(crate) rotation: f64,
    /// Uniform sprite scale in world space.
    pub(crate) scale: f64,
}

impl SpriteInstance {
    /// Projects the sprite through the camera: screen position and on‑screen scale.
    pub(crate) fn project(&self, viewport: &Viewport2D) -> (Point, f64) {
        (
            viewport.world_to_screen(self.position),
            self.scale * viewport.zoom(),
        )
    }
}

/// Four bunnies wiggling around a common center.
#[derive(Clone, Debug)]
struct BunnyGroup {
    center: Point,
    scale: f64,
    wiggle: Iteration,
}

impl BunnyGroup {
    const OFFSETS: [Vec2; 4] = [
        Vec2::new(-50.0, -50.0),
        Vec2::new(50.0, -50.0),
        Vec2::new(-50.0, 50.0),
        Vec2::new(50.0, 50.0),
    ];

    fn sprites(&self) -> impl Iterator<Item = SpriteInstance> + '_ {
        let rotation = self.wiggle.value.cos() * 0.98;
        Self::OFFSETS.iter().map(move |offset| SpriteInstance {
            position: self.center + *offset * self.scale,
            rotation,
            scale: self.scale,
        })
    }
}

/// Position cell shared with the camera through a weak reference.
#[derive(Debug)]
struct Tracked(Cell<Point>);

impl FollowTarget for Tracked {
    fn world_position(&self) -> Point {
        self.0.get()
    }
}

/// A large bunny moving on a circle.
#[derive(Debug)]
struct OrbitingBunny {
    center: Point,
    radius: f64,
    orbit: Iteration,
    wiggle: Iteration,
    position: Rc<Tracked>,
}

impl OrbitingBunny {
    const SCALE: f64 = 6.0;

    fn new(center: Point, radius: f64) -> Self {
        let orbit = Iteration::new(0.02);
        Self {
            center,
            radius,
            orbit,
            wiggle: Iteration::new(0.1),
            position: Rc::new(Tracked(Cell::new(Self::orbit_point(center, radius, orbit)))),
        }
    }

    fn orbit_point(center: Point, radius: f64, orbit: Iteration) -> Point {
        let (sin, cos) = orbit.value.sin_cos();
        center + Vec2::new(cos, sin) * radius
    }

    fn advance(&mut self, frames: f64) {
        self.orbit.advance(frames);
        self.wiggle.advance(frames);
        self.position
            .0
            .set(Self::orbit_point(self.center, self.radius, self.orbit));
    }

    fn sprite(&self) -> SpriteInstance {
        SpriteInstance {
            position: self.position.0.get(),
            rotation: self.wiggle.value.cos() * 0.98,
            scale: Self::SCALE,
        }
    }
}

/// Everything the demo animates.
#[derive(Debug)]
pub(crate) struct Scene {
    groups: Vec<BunnyGroup>,
    orbiter: OrbitingBunny,
}

impl Scene {
    /// Places the groups at the centers of their regions and starts the orbit.
    pub(crate) fn new(regions: &RegionRegistry) -> Result<Self, CameraError> {
        let groups = GROUPS
            .iter()
            .map(|&(name, scale)| {
                Ok(BunnyGroup {
                    center: regions.get(name)?.center(),
                    scale,
                    wiggle: Iteration::new(0.1),
                })
            })
            .collect::<Result<Vec<_>, CameraError>>()?;
        let world_center = WORLD.to_rect().center();
        Ok(Self {
            groups,
            orbiter: OrbitingBunny::new(world_center, 500.0),
        })
    }

    /// Advances every animation by `frames` display frames.
    pub(crate) fn advance(&mut self, frames: f64) {
        for group in &mut self.groups {
            group.wiggle.advance(frames);
        }
        self.orbiter.advance(frames);
    }

    /// Weak handle to the orbiting bunny for the camera to follow.
    pub(crate) fn follow_target(&self) -> Weak<dyn FollowTarget> {
        let target: Rc<dyn FollowTarget> = self.orbiter.position.clone();
        Rc::downgrade(&target)
    }

    /// The orbiting bunny's sprite.
    pub(crate) fn orbiter_sprite(&self) -> SpriteInstance {
        self.orbiter.sprite()
    }

    /// All sprites, groups first, orbiting bunny last.
    pub(crate) fn sprites(&self) -> impl Iterator<Item = SpriteInstance> + '_ {
        self.groups
            .iter()
            .flat_map(BunnyGroup::sprites)
            .chain(std::iter::once(self.orbiter.sprite()))
    }

    /// Number of sprites whose anchor falls inside the view.
    pub(crate) fn visible_sprites(&self, viewport: &Viewport2D) -> usize {
        let view: Rect = viewport.view_rect();
        self.sprites()
            .filter(|sprite| view.contains(sprite.project(viewport).0))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use burrow_camera::{Camera, CameraConfig};

    use super::*;

    #[test]
    fn groups_sit_at_region_centers() {
        let regions = regions().unwrap();
        let scene = Scene::new(&regions).unwrap();
        let sprites: Vec<_> = scene.sprites().collect();
        // Five groups of four plus the orbiting bunny.
        assert_eq!(sprites.len(), 21);
        assert_eq!(sprites[0].position, Point::new(150.0, 150.0));
        // The center group is scaled up, offsets included.
        assert_eq!(sprites[16].position, Point::new(900.0, 900.0));
        assert_eq!(sprites[16].scale, 2.0);
    }

    #[test]
    fn orbit_keeps_radius() {
        let regions = regions().unwrap();
        let mut scene = Scene::new(&regions).unwrap();
        assert_eq!(scene.orbiter_sprite().position, Point::new(1500.0, 1000.0));
        for _ in 0..100 {
            scene.advance(1.0);
            let r = scene.orbiter_sprite().position.distance(Point::new(1000.0, 1000.0));
            assert!((r - 500.0).abs() < 1e-9);
        }
    }

    #[test]
    fn follow_target_tracks_orbiter() {
        let regions = regions().unwrap();
        let mut scene = Scene::new(&regions).unwrap();
        let target = scene.follow_target();
        scene.advance(10.0);
        let seen = target.upgrade().unwrap().world_position();
        assert_eq!(seen, scene.orbiter_sprite().position);

        drop(scene);
        assert!(target.upgrade().is_none());
    }

    #[test]
    fn world_fit_shows_every_sprite() {
        let regions = regions().unwrap();
        let scene = Scene::new(&regions).unwrap();
        let mut camera = Camera::new(&CameraConfig::default());
        camera.snap_to(regions.get("world").unwrap()).unwrap();
        for _ in 0..600 {
            camera.tick(1.0 / 60.0);
        }
        assert_eq!(camera.zoom(), 0.25);
        assert_eq!(scene.visible_sprites(camera.viewport()), 21);
    }
}
