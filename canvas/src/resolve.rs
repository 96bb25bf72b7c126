//! Transform resolvers: rotation, resize, vertex move, drag, and flip.
//!
//! Resolvers are pure. They take the session's original geometry (never the
//! previous live result) and the current pointer, and return new geometry.
//! Resize works in the shape's local space: the pointer is mapped through
//! [`world_to_local`] first and the rotation is carried over unchanged, so the
//! pivot corner stays fixed in world space while the shape grows.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::config::{EngineConfig, SizeLimits};
use crate::doc::{ShapeGeometry, ShapeId, ShapeKind};
use crate::error::EngineError;
use crate::geom::{
    Bounds, Ellipse, Rotation, normalize_deg, rotate_point, rotate_vector, signed_delta_deg, snap_deg, world_to_local,
};
use crate::handles::HandleKind;

// =============================================================
// Rotation
// =============================================================

/// New absolute angle for a rotation session.
///
/// `start_angle + normalize(current_pointer - start_pointer)`, snapped to the
/// nearest `snap_increment` when given, then normalized to `(-180, 180]`.
#[must_use]
pub fn resolve_rotation(
    start_angle: f64,
    start_pointer_angle: f64,
    current_pointer_angle: f64,
    snap_increment: Option<f64>,
) -> f64 {
    let raw = start_angle + signed_delta_deg(current_pointer_angle, start_pointer_angle);
    let snapped = snap_increment.map_or(raw, |inc| snap_deg(raw, inc));
    normalize_deg(snapped)
}

/// Re-express `geometry` with `new_angle` about `pivot`.
///
/// The shape ends up where rotating its current world outline about `pivot`
/// by `new_angle - current_angle` would put it, with `rotation.center` set to
/// `pivot`. Stored points are only translated, never rotated, so a rectangle
/// keeps its axis-aligned two-corner form.
#[must_use]
pub fn reorient(geometry: &ShapeGeometry, pivot: Point, new_angle: f64) -> ShapeGeometry {
    let (angle, center) = geometry.rotation.map_or((0.0, pivot), |r| (r.angle, r.center));
    let rotation = Some(Rotation::new(new_angle, pivot));
    let Some(&probe) = geometry.points.first() else {
        return ShapeGeometry::new(Vec::new(), rotation);
    };
    if center == pivot {
        return ShapeGeometry::new(geometry.points.clone(), rotation);
    }
    let desired = rotate_point(rotate_point(probe, center, angle), pivot, new_angle - angle);
    let plain = rotate_point(probe, pivot, new_angle);
    let shift = rotate_vector(desired - plain, -new_angle);
    ShapeGeometry::new(geometry.points.iter().map(|p| *p + shift).collect(), rotation)
}

// =============================================================
// Resize
// =============================================================

/// Modifier-derived options for a resize step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOptions {
    /// Keep the original aspect ratio on corner drags.
    pub aspect_lock: bool,
    pub limits: SizeLimits,
    /// Perimeter segments for an ellipse result.
    pub segments: usize,
}

impl ResizeOptions {
    #[must_use]
    pub fn from_config(config: &EngineConfig, aspect_lock: bool) -> Self {
        Self { aspect_lock, limits: config.limits(), segments: config.segments() }
    }
}

type ResizeFn = fn(&ShapeGeometry, HandleKind, usize, Point, &ResizeOptions) -> Result<Vec<Point>, EngineError>;

fn resizer_for(kind: ShapeKind) -> ResizeFn {
    match kind {
        ShapeKind::Rectangle => resize_rect_points,
        ShapeKind::Circle => resize_circle_points,
        ShapeKind::Polygon | ShapeKind::Polyline => move_vertex_points,
    }
}

/// Reject geometry the resolvers cannot work from.
///
/// # Errors
///
/// `TooFewPoints` below two points, `NonFiniteGeometry` for NaN/infinite values.
pub fn validate(shape_id: ShapeId, geometry: &ShapeGeometry) -> Result<(), EngineError> {
    if geometry.points.len() < 2 {
        return Err(EngineError::TooFewPoints { shape_id, count: geometry.points.len() });
    }
    if !geometry.is_finite() {
        return Err(EngineError::NonFiniteGeometry { shape_id });
    }
    Ok(())
}

/// Resize `original` by dragging handle `(handle, index)` to `pointer_world`.
///
/// # Errors
///
/// Invalid original geometry, a non-finite pointer, or a handle the shape
/// kind does not have.
pub fn resolve_resize(
    shape_id: ShapeId,
    kind: ShapeKind,
    original: &ShapeGeometry,
    handle: HandleKind,
    index: usize,
    pointer_world: Point,
    options: &ResizeOptions,
) -> Result<ShapeGeometry, EngineError> {
    validate(shape_id, original)?;
    if !pointer_world.is_finite() {
        return Err(EngineError::NonFiniteGeometry { shape_id });
    }
    let pointer = world_to_local(pointer_world, original.rotation.as_ref());
    let points = resizer_for(kind)(original, handle, index, pointer, options)?;
    let result = ShapeGeometry::new(points, original.rotation);
    if !result.is_finite() {
        return Err(EngineError::NonFiniteGeometry { shape_id });
    }
    Ok(result)
}

fn resize_rect_points(
    original: &ShapeGeometry,
    handle: HandleKind,
    index: usize,
    pointer: Point,
    options: &ResizeOptions,
) -> Result<Vec<Point>, EngineError> {
    let bounds =
        Bounds::from_points(original.points.iter().copied()).ok_or(EngineError::HandleOutOfRange { kind: handle, index })?;
    let resized = resize_rect(bounds, handle, index, pointer, options.aspect_lock, options.limits)?;
    Ok(vec![resized.min, resized.max])
}

fn resize_circle_points(
    original: &ShapeGeometry,
    handle: HandleKind,
    index: usize,
    pointer: Point,
    options: &ResizeOptions,
) -> Result<Vec<Point>, EngineError> {
    let ellipse =
        Ellipse::from_points(&original.points).ok_or(EngineError::HandleOutOfRange { kind: handle, index })?;
    let resized = resize_ellipse(ellipse, handle, index, pointer, options.limits)?;
    Ok(resized.to_points(options.segments))
}

fn move_vertex_points(
    original: &ShapeGeometry,
    handle: HandleKind,
    index: usize,
    pointer: Point,
    _options: &ResizeOptions,
) -> Result<Vec<Point>, EngineError> {
    if handle != HandleKind::Corner {
        return Err(EngineError::HandleOutOfRange { kind: handle, index });
    }
    move_vertex(&original.points, index, pointer)
}

/// Resize a local-space rectangle.
///
/// Corner handles pivot on the opposite corner. With `aspect_lock` the larger
/// of the width-driven and height-driven candidates wins and the other side
/// follows the original ratio, keeping the drag direction. Edge handles move
/// only their own side. The result always passes [`enforce_min_size`].
///
/// # Errors
///
/// `HandleOutOfRange` for an index above 3 or a non-resize handle kind.
pub fn resize_rect(
    bounds: Bounds,
    handle: HandleKind,
    index: usize,
    pointer: Point,
    aspect_lock: bool,
    limits: SizeLimits,
) -> Result<Bounds, EngineError> {
    let out_of_range = EngineError::HandleOutOfRange { kind: handle, index };
    let candidate = match handle {
        HandleKind::Corner => {
            let corners = bounds.corners();
            let moving = *corners.get(index).ok_or(out_of_range)?;
            let pivot = corners[(index + 2) % 4];
            let mut dx = pointer.x - pivot.x;
            let mut dy = pointer.y - pivot.y;
            let (w0, h0) = (bounds.width(), bounds.height());
            if aspect_lock && w0 > 0.0 && h0 > 0.0 {
                let ratio = w0 / h0;
                let width = dx.abs().max(dy.abs() * ratio);
                dx = drag_sign(dx, moving.x - pivot.x) * width;
                dy = drag_sign(dy, moving.y - pivot.y) * width / ratio;
            }
            Bounds::from_corners(pivot, Point::new(pivot.x + dx, pivot.y + dy))
        }
        HandleKind::Edge => match index {
            0 => Bounds::from_corners(Point::new(bounds.min.x, pointer.y), bounds.max),
            1 => Bounds::from_corners(bounds.min, Point::new(pointer.x, bounds.max.y)),
            2 => Bounds::from_corners(bounds.min, Point::new(bounds.max.x, pointer.y)),
            3 => Bounds::from_corners(Point::new(pointer.x, bounds.min.y), bounds.max),
            _ => return Err(out_of_range),
        },
        HandleKind::Rotate | HandleKind::Body => return Err(out_of_range),
    };
    Ok(enforce_min_size(candidate, limits))
}

/// Sign of the drag along one axis; falls back to the handle's side when the pointer sits on the pivot line.
fn drag_sign(delta: f64, side: f64) -> f64 {
    if delta != 0.0 {
        delta.signum()
    } else if side != 0.0 {
        side.signum()
    } else {
        1.0
    }
}

/// Grow `bounds` about its center until it meets `limits`.
///
/// Short edges are clamped to `min_edge` first. If the area is still under
/// `min_area`, both sides scale by the same factor so the aspect holds.
/// Input with no extent on either axis becomes a minimum square.
#[must_use]
pub fn enforce_min_size(bounds: Bounds, limits: SizeLimits) -> Bounds {
    if !bounds.is_finite() || meets_limits(&bounds, limits) {
        return bounds;
    }
    let center = bounds.center();
    let (w, h) = (bounds.width(), bounds.height());
    if w <= 0.0 && h <= 0.0 {
        let side = limits.min_square_side();
        return Bounds::centered(center, side, side);
    }
    let (mut w, mut h) = (w.max(limits.min_edge), h.max(limits.min_edge));
    let area = w * h;
    if area > 0.0 && area < limits.min_area {
        let scale = (limits.min_area / area).sqrt();
        w *= scale;
        h *= scale;
    }
    Bounds::centered(center, w, h)
}

fn meets_limits(bounds: &Bounds, limits: SizeLimits) -> bool {
    bounds.width() >= limits.min_edge && bounds.height() >= limits.min_edge && bounds.area() >= limits.min_area
}

/// Smallest radius a circle may shrink to.
#[must_use]
pub fn min_radius(limits: SizeLimits) -> f64 {
    (limits.min_edge * 0.5).max((limits.min_area / PI).sqrt())
}

/// Resize a local-space circle or ellipse.
///
/// Corner handles set both radii to the pointer distance (stays a circle).
/// Edge handles set only their own axis (top/bottom: `ry`, right/left: `rx`).
///
/// # Errors
///
/// `HandleOutOfRange` for an index above 3 or a non-resize handle kind.
pub fn resize_ellipse(
    ellipse: Ellipse,
    handle: HandleKind,
    index: usize,
    pointer: Point,
    limits: SizeLimits,
) -> Result<Ellipse, EngineError> {
    let out_of_range = EngineError::HandleOutOfRange { kind: handle, index };
    let center = ellipse.center;
    match (handle, index) {
        (HandleKind::Corner, 0..=3) => {
            let radius = center.distance(pointer).max(min_radius(limits));
            Ok(Ellipse::circle(center, radius))
        }
        (HandleKind::Edge, 0 | 2) => {
            let ry = axis_radius((pointer.y - center.y).abs(), ellipse.rx, limits);
            Ok(Ellipse { center, rx: ellipse.rx, ry })
        }
        (HandleKind::Edge, 1 | 3) => {
            let rx = axis_radius((pointer.x - center.x).abs(), ellipse.ry, limits);
            Ok(Ellipse { center, rx, ry: ellipse.ry })
        }
        _ => Err(out_of_range),
    }
}

/// Floor one radius so the edge and area minimums hold given the other radius.
fn axis_radius(requested: f64, other: f64, limits: SizeLimits) -> f64 {
    let by_edge = limits.min_edge * 0.5;
    let by_area = if other > 0.0 { limits.min_area / (PI * other) } else { by_edge };
    requested.max(by_edge).max(by_area)
}

/// Replace vertex `index` with `pointer`.
///
/// # Errors
///
/// `HandleOutOfRange` when `index` is past the last vertex.
pub fn move_vertex(points: &[Point], index: usize, pointer: Point) -> Result<Vec<Point>, EngineError> {
    if index >= points.len() {
        return Err(EngineError::HandleOutOfRange { kind: HandleKind::Corner, index });
    }
    let mut moved = points.to_vec();
    moved[index] = pointer;
    Ok(moved)
}

// =============================================================
// Drag
// =============================================================

/// Translate a shape by a world-space `delta`.
///
/// The rotation center moves with the points, which translates the rotated
/// outline without re-rotating it.
#[must_use]
pub fn translate(geometry: &ShapeGeometry, delta: Point) -> ShapeGeometry {
    ShapeGeometry::new(
        geometry.points.iter().map(|p| *p + delta).collect(),
        geometry.rotation.map(|r| Rotation::new(r.angle, r.center + delta)),
    )
}

// =============================================================
// Flip
// =============================================================

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Mirror left/right across a vertical line.
    Horizontal,
    /// Mirror top/bottom across a horizontal line.
    Vertical,
}

/// Mirror a shape across the line through world point `about`.
///
/// Local points mirror across the same line; a rotation keeps its mirrored
/// center and flips the sign of its angle, which is the same world outline
/// as mirroring the rotated shape.
#[must_use]
pub fn flip(geometry: &ShapeGeometry, axis: FlipAxis, about: Point) -> ShapeGeometry {
    let mirror = |p: Point| match axis {
        FlipAxis::Horizontal => Point::new(2.0 * about.x - p.x, p.y),
        FlipAxis::Vertical => Point::new(p.x, 2.0 * about.y - p.y),
    };
    ShapeGeometry::new(
        geometry.points.iter().map(|p| mirror(*p)).collect(),
        geometry.rotation.map(|r| Rotation::new(normalize_deg(-r.angle), mirror(r.center))),
    )
}
