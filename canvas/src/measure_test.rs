#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use uuid::Uuid;

use super::*;
use crate::geom::Rotation;

fn shape(kind: ShapeKind, points: &[(f64, f64)]) -> Shape {
    Shape::new(kind, points.iter().map(|(x, y)| Point::new(*x, *y)).collect(), Uuid::new_v4())
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Area
// =============================================================

#[test]
fn area_per_kind() {
    let rect = shape(ShapeKind::Rectangle, &[(0.0, 0.0), (4.0, 2.5)]);
    let circle = shape(ShapeKind::Circle, &[(0.0, 0.0), (2.0, 0.0)]);
    let poly = shape(ShapeKind::Polygon, &[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    let line = shape(ShapeKind::Polyline, &[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    assert_eq!(shape_area(&rect, &InputState::Idle), 10.0);
    assert!(approx_eq(shape_area(&circle, &InputState::Idle), 4.0 * PI));
    assert_eq!(shape_area(&poly, &InputState::Idle), 6.0);
    assert_eq!(shape_area(&line, &InputState::Idle), 0.0);
}

#[test]
fn ellipse_area_is_pi_ab() {
    let e = Ellipse { center: Point::new(0.0, 0.0), rx: 3.0, ry: 2.0 };
    let g = ShapeGeometry::new(e.perimeter(48), None);
    assert!(approx_eq(area(ShapeKind::Circle, &g), 6.0 * PI));
}

#[test]
fn rotation_does_not_change_area() {
    let mut rect = shape(ShapeKind::Rectangle, &[(0.0, 0.0), (4.0, 2.5)]);
    rect.rotation = Some(Rotation::new(33.0, Point::new(2.0, 1.25)));
    assert_eq!(shape_area(&rect, &InputState::Idle), 10.0);
}

// =============================================================
// Dimension labels
// =============================================================

#[test]
fn rectangle_has_one_label_per_edge() {
    let rect = shape(ShapeKind::Rectangle, &[(0.0, 0.0), (4.0, 2.0)]);
    let labels = dimension_labels(&rect, &InputState::Idle, &EngineConfig::default());
    let lengths: Vec<f64> = labels.iter().map(|l| l.length).collect();
    assert_eq!(lengths, vec![4.0, 2.0, 4.0, 2.0]);
    assert_eq!(labels[0].anchor, Point::new(2.0, 0.0));
}

#[test]
fn polygon_labels_include_closing_edge() {
    let poly = shape(ShapeKind::Polygon, &[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
    let labels = dimension_labels(&poly, &InputState::Idle, &EngineConfig::default());
    assert_eq!(labels.len(), 3);
    assert!(approx_eq(labels[2].length, 5.0));
}

#[test]
fn polyline_labels_one_per_segment() {
    let line = shape(ShapeKind::Polyline, &[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
    let labels = dimension_labels(&line, &InputState::Idle, &EngineConfig::default());
    assert_eq!(labels.len(), 2);
}

#[test]
fn circle_has_diameter_label() {
    let circle = shape(ShapeKind::Circle, &[(1.0, 1.0), (3.0, 1.0)]);
    let labels = dimension_labels(&circle, &InputState::Idle, &EngineConfig::default());
    assert_eq!(labels.len(), 1);
    assert!(approx_eq(labels[0].length, 4.0));
    assert!(approx_eq(labels[0].anchor.x, 1.0) && approx_eq(labels[0].anchor.y, 1.0));
}

#[test]
fn ellipse_has_two_axis_labels() {
    let e = Ellipse { center: Point::new(0.0, 0.0), rx: 3.0, ry: 2.0 };
    let s = Shape::new(ShapeKind::Circle, e.perimeter(48), Uuid::new_v4());
    let labels = dimension_labels(&s, &InputState::Idle, &EngineConfig::default());
    assert_eq!(labels.len(), 2);
    assert!(approx_eq(labels[0].length, 6.0));
    assert!(approx_eq(labels[1].length, 4.0));
}

#[test]
fn labels_sit_on_rotated_edges() {
    let mut rect = shape(ShapeKind::Rectangle, &[(0.0, 0.0), (4.0, 2.0)]);
    rect.rotation = Some(Rotation::new(90.0, Point::new(0.0, 0.0)));
    let labels = dimension_labels(&rect, &InputState::Idle, &EngineConfig::default());
    // Top edge (0,0)-(4,0) turns to (0,0)-(0,4).
    assert!(approx_eq(labels[0].anchor.x, 0.0));
    assert!(approx_eq(labels[0].anchor.y, 2.0));
    assert!(approx_eq(labels[0].angle_deg, 90.0));
    assert!(approx_eq(labels[0].length, 4.0));
}
