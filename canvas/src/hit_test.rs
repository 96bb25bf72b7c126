#![allow(clippy::float_cmp)]

use super::*;

fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

fn square_handles() -> HandlePositions {
    HandlePositions {
        corners: vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)],
        edges: vec![Point::new(5.0, 0.0), Point::new(10.0, 5.0), Point::new(5.0, 10.0), Point::new(0.0, 5.0)],
        rotation: Some(Point::new(5.0, 12.0)),
    }
}

fn screen_of(world: Point) -> Point {
    Camera::top_down(Point::new(5.0, 5.0), 40.0).world_to_screen(world, viewport()).unwrap()
}

// =============================================================
// hit_handle
// =============================================================

#[test]
fn exact_hit_on_corner() {
    let cam = Camera::top_down(Point::new(5.0, 5.0), 40.0);
    let hit = hit_handle(screen_of(Point::new(10.0, 10.0)), &square_handles(), &cam, viewport());
    assert_eq!(hit, Some((HandleKind::Corner, 2)));
}

#[test]
fn near_miss_within_radius_hits() {
    let cam = Camera::top_down(Point::new(5.0, 5.0), 40.0);
    let s = screen_of(Point::new(10.0, 5.0));
    let hit = hit_handle(Point::new(s.x + 3.0, s.y - 2.0), &square_handles(), &cam, viewport());
    assert_eq!(hit, Some((HandleKind::Edge, 1)));
}

#[test]
fn rotation_handle_hits() {
    let cam = Camera::top_down(Point::new(5.0, 5.0), 40.0);
    let hit = hit_handle(screen_of(Point::new(5.0, 12.0)), &square_handles(), &cam, viewport());
    assert_eq!(hit, Some((HandleKind::Rotate, 0)));
}

#[test]
fn far_from_every_handle_misses() {
    let cam = Camera::top_down(Point::new(5.0, 5.0), 40.0);
    let hit = hit_handle(screen_of(Point::new(2.5, 2.5)), &square_handles(), &cam, viewport());
    assert_eq!(hit, None);
}

#[test]
fn empty_handles_never_hit() {
    let cam = Camera::default();
    assert_eq!(hit_handle(Point::new(640.0, 360.0), &HandlePositions::default(), &cam, viewport()), None);
}

// =============================================================
// cursor_for
// =============================================================

#[test]
fn rectangle_cursors_by_index() {
    assert_eq!(cursor_for(ShapeKind::Rectangle, HandleKind::Corner, 0), "nwse-resize");
    assert_eq!(cursor_for(ShapeKind::Rectangle, HandleKind::Corner, 1), "nesw-resize");
    assert_eq!(cursor_for(ShapeKind::Circle, HandleKind::Corner, 2), "nwse-resize");
    assert_eq!(cursor_for(ShapeKind::Rectangle, HandleKind::Edge, 0), "ns-resize");
    assert_eq!(cursor_for(ShapeKind::Rectangle, HandleKind::Edge, 3), "ew-resize");
}

#[test]
fn vertex_rotate_and_body_cursors() {
    assert_eq!(cursor_for(ShapeKind::Polygon, HandleKind::Corner, 5), "crosshair");
    assert_eq!(cursor_for(ShapeKind::Polyline, HandleKind::Corner, 0), "crosshair");
    assert_eq!(cursor_for(ShapeKind::Rectangle, HandleKind::Rotate, 0), "grab");
    assert_eq!(cursor_for(ShapeKind::Circle, HandleKind::Body, 0), "grabbing");
}
