//! Screen-to-world projection against the ground plane.
//!
//! The viewport shows a perspective camera looking at a horizontal ground
//! plane (`y = 0` in 3D). Parcel outlines live on that plane, so a 2D world
//! [`Point`] maps to the 3D position `(x, 0, y)`: `Point::x` is world X and
//! `Point::y` is world Z.
//!
//! Screen coordinates are CSS pixels with the origin at the top-left corner of
//! the viewport and `y` growing downward.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Mul, Sub};

use glam::{DMat4, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_PLANE_Y, PARALLEL_RAY_EPSILON};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (neither NaN nor infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A viewport with a zero or non-finite dimension cannot be projected through.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 720.0 }
    }
}

/// Perspective camera looking at the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position in 3D world space.
    pub position: DVec3,
    /// Point the camera looks at.
    pub target: DVec3,
    /// Up direction; must not be parallel to the view direction.
    pub up: DVec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 80.0, 60.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fov_y_deg: 75.0,
            near: 0.1,
            far: 10_000.0,
        }
    }
}

impl Camera {
    /// Camera straight above `center` at `height`, with world -Z toward the top of the screen.
    #[must_use]
    pub fn top_down(center: Point, height: f64) -> Self {
        Self {
            position: DVec3::new(center.x, height, center.y),
            target: DVec3::new(center.x, GROUND_PLANE_Y, center.y),
            up: DVec3::NEG_Z,
            ..Self::default()
        }
    }

    fn view_projection(&self, viewport: Viewport) -> DMat4 {
        let projection = DMat4::perspective_rh(self.fov_y_deg.to_radians(), viewport.aspect(), self.near, self.far);
        let view = DMat4::look_at_rh(self.position, self.target, self.up);
        projection * view
    }

    /// Ray from the eye through a screen pixel, as `(origin, unit direction)`.
    fn screen_ray(&self, screen: Point, viewport: Viewport) -> Option<(DVec3, DVec3)> {
        if !viewport.is_valid() || !screen.is_finite() {
            return None;
        }
        let inv = self.view_projection(viewport).inverse();
        let ndc_x = (screen.x / viewport.width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / viewport.height) * 2.0;
        let near = inv.project_point3(DVec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(DVec3::new(ndc_x, ndc_y, 1.0));
        let dir = (far - near).normalize_or_zero();
        if !near.is_finite() || dir == DVec3::ZERO {
            return None;
        }
        Some((near, dir))
    }

    /// Convert a screen-space point (CSS pixels) to the world point on the ground plane.
    ///
    /// Returns `None` when the ray is parallel to the plane, points away from
    /// it, or the camera/viewport is degenerate.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport: Viewport) -> Option<Point> {
        let (origin, dir) = self.screen_ray(screen, viewport)?;
        if dir.y.abs() <= PARALLEL_RAY_EPSILON {
            return None;
        }
        let t = (GROUND_PLANE_Y - origin.y) / dir.y;
        if t < 0.0 {
            return None;
        }
        let hit = origin + dir * t;
        let world = Point::new(hit.x, hit.z);
        world.is_finite().then_some(world)
    }

    /// Convert a ground-plane world point to screen coordinates (CSS pixels).
    ///
    /// Returns `None` for points behind the camera.
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport: Viewport) -> Option<Point> {
        if !viewport.is_valid() || !world.is_finite() {
            return None;
        }
        let clip = self.view_projection(viewport) * DVec4::new(world.x, GROUND_PLANE_Y, world.y, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        let screen = Point::new((ndc_x * 0.5 + 0.5) * viewport.width, (0.5 - ndc_y * 0.5) * viewport.height);
        screen.is_finite().then_some(screen)
    }
}
