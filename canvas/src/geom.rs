//! Geometry utilities: rotation, angles, bounds, and circle/ellipse outlines.
//!
//! Everything here is a pure function of its inputs. Angles are degrees at
//! every boundary and converted to radians only inside the trigonometry.
//!
//! Coordinate spaces are explicit in names: *local* points are a shape's
//! stored, pre-rotation coordinates; *world* points are on the ground plane
//! after the shape's [`Rotation`] is applied.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

// =============================================================
// Rotation
// =============================================================

/// Rotation metadata of a shape. `center` is in the shape's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation angle in degrees; positive turns +X toward +Y.
    pub angle: f64,
    /// Pivot of the rotation.
    pub center: Point,
}

impl Rotation {
    #[must_use]
    pub fn new(angle: f64, center: Point) -> Self {
        Self { angle, center }
    }

    /// An angle that normalizes to zero leaves the shape unrotated.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        normalize_deg(self.angle) == 0.0
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.angle.is_finite() && self.center.is_finite()
    }
}

/// Rotate `p` about `center` by `angle_deg`.
#[must_use]
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    center + rotate_vector(p - center, angle_deg)
}

/// Rotate a direction vector about the origin by `angle_deg`.
#[must_use]
pub fn rotate_vector(v: Point, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Map a local (stored) point to world space by applying `rotation`.
#[must_use]
pub fn local_to_world(p: Point, rotation: Option<&Rotation>) -> Point {
    match rotation {
        Some(r) if !r.is_identity() => rotate_point(p, r.center, r.angle),
        _ => p,
    }
}

/// Map a world point back into a shape's local space by undoing `rotation`.
#[must_use]
pub fn world_to_local(p: Point, rotation: Option<&Rotation>) -> Point {
    match rotation {
        Some(r) if !r.is_identity() => rotate_point(p, r.center, -r.angle),
        _ => p,
    }
}

// =============================================================
// Angles
// =============================================================

/// Angle in degrees of the direction from `center` to `p`, in `(-180, 180]`.
#[must_use]
pub fn angle_deg(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x).to_degrees()
}

/// Normalize an angle to `(-180, 180]`. Non-finite input maps to `0`.
#[must_use]
pub fn normalize_deg(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Normalize an angle to `[0, 360)`. Non-finite input maps to `0`.
#[must_use]
pub fn normalize_deg_360(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest signed rotation from `start` to `current`, in `(-180, 180]`.
#[must_use]
pub fn signed_delta_deg(current: f64, start: f64) -> f64 {
    normalize_deg(current - start)
}

/// Round `deg` to the nearest multiple of `increment`.
///
/// A non-positive or non-finite increment disables snapping.
#[must_use]
pub fn snap_deg(deg: f64, increment: f64) -> f64 {
    if !increment.is_finite() || increment <= 0.0 {
        return deg;
    }
    (deg / increment).round() * increment
}

// =============================================================
// Bounds
// =============================================================

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Box spanning two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Box of the given size centered on `center`.
    #[must_use]
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        let half = Point::new(width * 0.5, height * 0.5);
        Self { min: center - half, max: center + half }
    }

    /// Smallest box containing every point; `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self { min: first, max: first };
        for p in iter {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    #[must_use]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Corners clockwise from top-left: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Expand the compact two-corner rectangle form into four corners, clockwise from top-left.
#[must_use]
pub fn rect_corners(a: Point, b: Point) -> [Point; 4] {
    Bounds::from_corners(a, b).corners()
}

/// Arithmetic mean of the points; `None` when empty.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum = points.iter().fold(Point::default(), |acc, p| acc + *p);
    Some(sum * (1.0 / n))
}

/// Midpoint of every segment. A closed outline includes the segment from the last point back to the first.
#[must_use]
pub fn edge_midpoints(points: &[Point], closed: bool) -> Vec<Point> {
    let mut mids: Vec<Point> = points.windows(2).map(|w| w[0].midpoint(w[1])).collect();
    if closed && points.len() > 2 {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            mids.push(last.midpoint(*first));
        }
    }
    mids
}

/// Unsigned area of a simple polygon (shoelace formula).
#[must_use]
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        twice += a.x * b.y - b.x * a.y;
    }
    (twice * 0.5).abs()
}

// =============================================================
// Circles and ellipses
// =============================================================

/// Canonical in-engine form of a circle or axis-aligned (local-space) ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    /// Radius along local X.
    pub rx: f64,
    /// Radius along local Y.
    pub ry: f64,
}

impl Ellipse {
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        Self { center, rx: radius, ry: radius }
    }

    /// Decode either stored circle form.
    ///
    /// Two points are the compact `[center, point on radius]` form; three or
    /// more are evenly spaced perimeter samples. For those the centroid is the
    /// center and `r = sqrt(2 * mean(d^2))` per axis, which is exact for any
    /// sample count and phase. A closing point repeating the first is ignored.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        match points {
            [] | [_] => None,
            [center, edge] => Some(Self::circle(*center, center.distance(*edge))),
            _ => {
                let samples = match points {
                    [first, rest @ .., last] if rest.len() >= 2 && first == last => &points[..points.len() - 1],
                    _ => points,
                };
                let center = centroid(samples)?;
                #[allow(clippy::cast_precision_loss)]
                let n = samples.len() as f64;
                let (sx, sy) = samples
                    .iter()
                    .fold((0.0, 0.0), |(sx, sy), p| (sx + (p.x - center.x).powi(2), sy + (p.y - center.y).powi(2)));
                Some(Self { center, rx: (2.0 * sx / n).sqrt(), ry: (2.0 * sy / n).sqrt() })
            }
        }
    }

    /// Equal radii; only a true circle may use the compact stored form.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        self.rx == self.ry
    }

    /// Point on the outline at `angle_deg` from the center.
    #[must_use]
    pub fn point_at(&self, angle_deg: f64) -> Point {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Point::new(self.center.x + self.rx * cos, self.center.y + self.ry * sin)
    }

    /// Perimeter approximation with `segments` evenly spaced points.
    #[must_use]
    pub fn perimeter(&self, segments: usize) -> Vec<Point> {
        #[allow(clippy::cast_precision_loss)]
        let step = TAU / segments as f64;
        (0..segments)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let theta = step * i as f64;
                Point::new(self.center.x + self.rx * theta.cos(), self.center.y + self.ry * theta.sin())
            })
            .collect()
    }

    /// Encode for storage: compact form for circles, perimeter otherwise.
    #[must_use]
    pub fn to_points(&self, segments: usize) -> Vec<Point> {
        if self.is_circle() {
            vec![self.center, Point::new(self.center.x + self.rx, self.center.y)]
        } else {
            self.perimeter(segments)
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.center, self.rx * 2.0, self.ry * 2.0)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.rx * self.ry
    }
}
