//! Magnetic snapping to other shapes' key points.
//!
//! Resize and vertex handles hold the pointer to a key point. A body drag
//! instead holds the moving shapes' own key points to the nearest candidate,
//! so shapes meet corner to corner or edge to edge.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::camera::Point;
use crate::config::EngineConfig;
use crate::doc::{Shape, ShapeGeometry, ShapeId, ShapeKind};
use crate::geom::{Bounds, Ellipse, edge_midpoints, local_to_world};
use crate::handles::world_outline;

/// Vertices, edge midpoints and center of `shape` in world space.
///
/// Circles contribute their center and the four cardinal points.
#[must_use]
pub fn key_points(shape: &Shape, config: &EngineConfig) -> Vec<Point> {
    geometry_key_points(shape.kind, &shape.geometry(), config)
}

/// [`key_points`] for a bare geometry, such as a session original.
#[must_use]
pub fn geometry_key_points(kind: ShapeKind, geometry: &ShapeGeometry, config: &EngineConfig) -> Vec<Point> {
    if kind == ShapeKind::Circle {
        let Some(ellipse) = Ellipse::from_points(&geometry.points) else {
            return Vec::new();
        };
        return [ellipse.center, ellipse.point_at(-90.0), ellipse.point_at(0.0), ellipse.point_at(90.0), ellipse.point_at(180.0)]
            .into_iter()
            .map(|p| local_to_world(p, geometry.rotation.as_ref()))
            .collect();
    }
    let vertices = world_outline(kind, geometry, config.segments());
    let mut points = edge_midpoints(&vertices, kind.is_closed());
    if let Some(bounds) = Bounds::from_points(vertices.iter().copied()) {
        points.push(bounds.center());
    }
    points.extend(vertices);
    points
}

/// Key points of every visible shape not in `exclude`.
#[must_use]
pub fn snap_candidates(shapes: &[&Shape], exclude: &[ShapeId], config: &EngineConfig) -> Vec<Point> {
    shapes
        .iter()
        .filter(|s| s.visible && !exclude.contains(&s.id))
        .flat_map(|s| key_points(s, config))
        .collect()
}

/// Nearest candidate within `threshold` of `pointer`, if any.
#[must_use]
pub fn snap_point(pointer: Point, candidates: &[Point], threshold: f64) -> Option<Point> {
    candidates
        .iter()
        .map(|c| (pointer.distance(*c), *c))
        .filter(|(d, _)| *d <= threshold)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, c)| c)
}

/// Closest `(moving, candidate)` pair within `threshold`, with `moving`
/// already offset by `delta`. The drag correction is `candidate - moving`.
#[must_use]
pub fn snap_pair(moving: &[Point], delta: Point, candidates: &[Point], threshold: f64) -> Option<(Point, Point)> {
    moving
        .iter()
        .map(|m| *m + delta)
        .filter_map(|m| snap_point(m, candidates, threshold).map(|c| (m.distance(c), m, c)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, m, c)| (m, c))
}
