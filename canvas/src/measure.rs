//! Area and dimension labels.
//!
//! Labels are computed from the same effective geometry the renderer draws,
//! so during a session they follow the live result, and after rotation they
//! sit on the rotated edges.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use serde::Serialize;

use crate::camera::Point;
use crate::config::EngineConfig;
use crate::doc::{Shape, ShapeGeometry, ShapeKind};
use crate::geom::{Bounds, Ellipse, angle_deg, local_to_world, polygon_area};
use crate::handles::{effective_geometry, world_outline};
use crate::input::InputState;

/// One measured span with its label anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionLabel {
    /// World-space start of the measured span.
    pub start: Point,
    /// World-space end of the measured span.
    pub end: Point,
    /// Span length in world units.
    pub length: f64,
    /// Where the label is drawn: the span's midpoint.
    pub anchor: Point,
    /// Direction of the span in degrees, for orienting the label text.
    pub angle_deg: f64,
}

impl DimensionLabel {
    fn span(start: Point, end: Point) -> Self {
        Self { start, end, length: start.distance(end), anchor: start.midpoint(end), angle_deg: angle_deg(start, end) }
    }
}

/// Enclosed area of `geometry` interpreted as `kind`. Polylines enclose nothing.
#[must_use]
pub fn area(kind: ShapeKind, geometry: &ShapeGeometry) -> f64 {
    match kind {
        ShapeKind::Rectangle => Bounds::from_points(geometry.points.iter().copied()).map_or(0.0, |b| b.area()),
        ShapeKind::Circle => Ellipse::from_points(&geometry.points).map_or(0.0, |e| e.area()),
        ShapeKind::Polygon => polygon_area(&geometry.points),
        ShapeKind::Polyline => 0.0,
    }
}

/// Area of the shape as currently displayed.
#[must_use]
pub fn shape_area(shape: &Shape, session: &InputState) -> f64 {
    area(shape.kind, &effective_geometry(shape, session))
}

/// Dimension labels for the shape as currently displayed.
///
/// Rectangles and polygons get one label per edge (closing edge included),
/// polylines one per segment, circles one diameter, ellipses two (X then Y).
#[must_use]
pub fn dimension_labels(shape: &Shape, session: &InputState, config: &EngineConfig) -> Vec<DimensionLabel> {
    let geometry = effective_geometry(shape, session);
    if shape.kind == ShapeKind::Circle {
        let Some(ellipse) = Ellipse::from_points(&geometry.points) else {
            return Vec::new();
        };
        let to_world = |a: f64| local_to_world(ellipse.point_at(a), geometry.rotation.as_ref());
        let mut labels = vec![DimensionLabel::span(to_world(180.0), to_world(0.0))];
        if !ellipse.is_circle() {
            labels.push(DimensionLabel::span(to_world(-90.0), to_world(90.0)));
        }
        return labels;
    }

    let outline = world_outline(shape.kind, &geometry, config.segments());
    let mut labels: Vec<DimensionLabel> = outline.windows(2).map(|w| DimensionLabel::span(w[0], w[1])).collect();
    if shape.kind.is_closed() && outline.len() > 2 {
        if let (Some(first), Some(last)) = (outline.first(), outline.last()) {
            labels.push(DimensionLabel::span(*last, *first));
        }
    }
    labels
}
