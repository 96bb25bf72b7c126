//! Handle generation and render outlines.
//!
//! Handles are addressed by `(HandleKind, index)`. Indices are stable across
//! frames: corners first, then edges, each clockwise from the top-left
//! (rectangles and ellipses), or one corner per vertex in stored order
//! (polygons and polylines). Positions are world space, after rotation and
//! after any live session result.

#[cfg(test)]
#[path = "handles_test.rs"]
mod handles_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::config::EngineConfig;
use crate::doc::{Shape, ShapeGeometry, ShapeKind};
use crate::geom::{Bounds, Ellipse, edge_midpoints, local_to_world};
use crate::input::InputState;

/// Which family of control a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleKind {
    /// Corner resize handle (or polygon vertex).
    Corner,
    /// Edge-midpoint resize handle.
    Edge,
    /// The rotation handle.
    Rotate,
    /// The shape body; starts a drag.
    Body,
}

/// World-space handle positions for one shape or one group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HandlePositions {
    pub corners: Vec<Point>,
    pub edges: Vec<Point>,
    pub rotation: Option<Point>,
}

impl HandlePositions {
    /// Position of the handle at `(kind, index)`. `Rotate` ignores the index.
    #[must_use]
    pub fn get(&self, kind: HandleKind, index: usize) -> Option<Point> {
        match kind {
            HandleKind::Corner => self.corners.get(index).copied(),
            HandleKind::Edge => self.edges.get(index).copied(),
            HandleKind::Rotate => self.rotation,
            HandleKind::Body => None,
        }
    }

    /// No handles at all (locked, hidden, or degenerate shape).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty() && self.edges.is_empty() && self.rotation.is_none()
    }

    /// Every handle with its address, corners then edges then rotation.
    #[must_use]
    pub fn all(&self) -> Vec<(HandleKind, usize, Point)> {
        let corners = self.corners.iter().enumerate().map(|(i, p)| (HandleKind::Corner, i, *p));
        let edges = self.edges.iter().enumerate().map(|(i, p)| (HandleKind::Edge, i, *p));
        corners.chain(edges).chain(self.rotation.map(|p| (HandleKind::Rotate, 0, p))).collect()
    }
}

/// Local-space handle layout before rotation.
struct LocalLayout {
    corners: Vec<Point>,
    edges: Vec<Point>,
    bounds: Bounds,
}

type LayoutFn = fn(&ShapeGeometry) -> Option<LocalLayout>;

fn layout_for(kind: ShapeKind) -> LayoutFn {
    match kind {
        ShapeKind::Rectangle => rect_layout,
        ShapeKind::Circle => ellipse_layout,
        ShapeKind::Polygon | ShapeKind::Polyline => vertex_layout,
    }
}

fn rect_layout(geometry: &ShapeGeometry) -> Option<LocalLayout> {
    if geometry.points.len() < 2 {
        return None;
    }
    let bounds = Bounds::from_points(geometry.points.iter().copied())?;
    let corners = bounds.corners().to_vec();
    let edges = edge_midpoints(&corners, true);
    Some(LocalLayout { corners, edges, bounds })
}

fn ellipse_layout(geometry: &ShapeGeometry) -> Option<LocalLayout> {
    let ellipse = Ellipse::from_points(&geometry.points)?;
    let corners = [-135.0, -45.0, 45.0, 135.0].map(|a| ellipse.point_at(a)).to_vec();
    let edges = [-90.0, 0.0, 90.0, 180.0].map(|a| ellipse.point_at(a)).to_vec();
    Some(LocalLayout { corners, edges, bounds: ellipse.bounds() })
}

fn vertex_layout(geometry: &ShapeGeometry) -> Option<LocalLayout> {
    if geometry.points.len() < 2 {
        return None;
    }
    let bounds = Bounds::from_points(geometry.points.iter().copied())?;
    Some(LocalLayout { corners: geometry.points.clone(), edges: Vec::new(), bounds })
}

/// Number of handles of `kind` a shape of `shape_kind` exposes for `geometry`.
#[must_use]
pub fn handle_count(shape_kind: ShapeKind, kind: HandleKind, geometry: &ShapeGeometry) -> usize {
    match (shape_kind, kind) {
        (_, HandleKind::Rotate | HandleKind::Body) => 1,
        (ShapeKind::Rectangle | ShapeKind::Circle, _) => 4,
        (ShapeKind::Polygon | ShapeKind::Polyline, HandleKind::Corner) => geometry.points.len(),
        (ShapeKind::Polygon | ShapeKind::Polyline, HandleKind::Edge) => 0,
    }
}

/// Geometry the renderer should see: the session's live result for this shape, else the record's own.
#[must_use]
pub fn effective_geometry(shape: &Shape, session: &InputState) -> ShapeGeometry {
    session.live_for(&shape.id).cloned().unwrap_or_else(|| shape.geometry())
}

/// Local-space outline of `geometry` interpreted as `kind`.
#[must_use]
pub fn local_outline(kind: ShapeKind, geometry: &ShapeGeometry, segments: usize) -> Vec<Point> {
    match kind {
        ShapeKind::Rectangle => Bounds::from_points(geometry.points.iter().copied())
            .map(|b| b.corners().to_vec())
            .unwrap_or_default(),
        ShapeKind::Circle => Ellipse::from_points(&geometry.points)
            .map(|e| e.perimeter(segments))
            .unwrap_or_default(),
        ShapeKind::Polygon | ShapeKind::Polyline => geometry.points.clone(),
    }
}

/// World-space outline of `geometry` interpreted as `kind`.
#[must_use]
pub fn world_outline(kind: ShapeKind, geometry: &ShapeGeometry, segments: usize) -> Vec<Point> {
    local_outline(kind, geometry, segments)
        .into_iter()
        .map(|p| local_to_world(p, geometry.rotation.as_ref()))
        .collect()
}

/// Outline the renderer draws for `shape`, consistent with the live session.
#[must_use]
pub fn compute_render_points(shape: &Shape, session: &InputState, config: &EngineConfig) -> Vec<Point> {
    world_outline(shape.kind, &effective_geometry(shape, session), config.segments())
}

/// Handles for a single shape. Locked or hidden shapes get none.
#[must_use]
pub fn compute_handles(shape: &Shape, session: &InputState, config: &EngineConfig) -> HandlePositions {
    if shape.locked || !shape.visible {
        return HandlePositions::default();
    }
    let geometry = effective_geometry(shape, session);
    let Some(layout) = layout_for(shape.kind)(&geometry) else {
        return HandlePositions::default();
    };
    let rotation = geometry.rotation.as_ref();
    let to_world = |p: Point| local_to_world(p, rotation);
    let below = Point::new(layout.bounds.center().x, layout.bounds.max.y + config.rotate_handle_offset);
    HandlePositions {
        corners: layout.corners.into_iter().map(to_world).collect(),
        edges: layout.edges.into_iter().map(to_world).collect(),
        rotation: Some(to_world(below)),
    }
}

/// Bounding box of the union of every member's world outline.
///
/// Rectangles contribute all four corners, not just the two stored ones.
#[must_use]
pub fn group_bounds(shapes: &[&Shape], session: &InputState, config: &EngineConfig) -> Option<Bounds> {
    let points = shapes.iter().flat_map(|s| compute_render_points(s, session, config));
    Bounds::from_points(points)
}

/// Reference center for group rotation: the center of [`group_bounds`].
#[must_use]
pub fn group_center(shapes: &[&Shape], session: &InputState, config: &EngineConfig) -> Option<Point> {
    group_bounds(shapes, session, config).map(|b| b.center())
}

/// Handles for a multi-selection: a single rotation handle below the group box.
///
/// Locked members are excluded, matching the set a group session would move.
#[must_use]
pub fn compute_group_handles(shapes: &[&Shape], session: &InputState, config: &EngineConfig) -> HandlePositions {
    let members: Vec<&Shape> = shapes.iter().copied().filter(|s| !s.locked && s.visible).collect();
    let Some(bounds) = group_bounds(&members, session, config) else {
        return HandlePositions::default();
    };
    HandlePositions {
        corners: Vec::new(),
        edges: Vec::new(),
        rotation: Some(Point::new(bounds.center().x, bounds.max.y + config.rotate_handle_offset)),
    }
}

/// World-space edge midpoints for polygon and polyline midpoint indicators.
///
/// Polygons include the closing edge. Other kinds have none.
#[must_use]
pub fn midpoint_indicators(shape: &Shape, session: &InputState) -> Vec<Point> {
    if !matches!(shape.kind, ShapeKind::Polygon | ShapeKind::Polyline) {
        return Vec::new();
    }
    let geometry = effective_geometry(shape, session);
    edge_midpoints(&geometry.points, shape.kind.is_closed())
        .into_iter()
        .map(|p| local_to_world(p, geometry.rotation.as_ref()))
        .collect()
}
