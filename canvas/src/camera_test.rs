#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use glam::DVec3;

use super::*;

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

fn screen_center() -> Point {
    Point::new(640.0, 360.0)
}

/// Camera at eye height looking horizontally down -Z.
fn horizon_camera() -> Camera {
    Camera {
        position: DVec3::new(0.0, 10.0, 0.0),
        target: DVec3::new(0.0, 10.0, -100.0),
        up: DVec3::Y,
        ..Camera::default()
    }
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_arithmetic() {
    let a = Point::new(1.0, 2.0);
    let b = Point::new(4.0, 6.0);
    assert_eq!(a + b, Point::new(5.0, 8.0));
    assert_eq!(b - a, Point::new(3.0, 4.0));
    assert_eq!(a * 2.0, Point::new(2.0, 4.0));
}

#[test]
fn point_distance_and_midpoint() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(a.midpoint(b), Point::new(1.5, 2.0));
}

#[test]
fn point_finiteness() {
    assert!(Point::new(1.0, -1.0).is_finite());
    assert!(!Point::new(f64::NAN, 0.0).is_finite());
    assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
}

#[test]
fn point_serde_shape() {
    let json = serde_json::to_value(Point::new(1.5, -2.0)).unwrap();
    assert_eq!(json, serde_json::json!({"x": 1.5, "y": -2.0}));
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn viewport_validity() {
    assert!(viewport().is_valid());
    assert!(!Viewport::new(0.0, 720.0).is_valid());
    assert!(!Viewport::new(1280.0, f64::NAN).is_valid());
    assert!(approx_eq(Viewport::new(200.0, 100.0).aspect(), 2.0));
}

// =============================================================
// screen_to_world
// =============================================================

#[test]
fn screen_center_hits_camera_target() {
    let cam = Camera::default();
    let world = cam.screen_to_world(screen_center(), viewport()).unwrap();
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn top_down_center_hits_center() {
    let cam = Camera::top_down(Point::new(12.0, -7.0), 50.0);
    let world = cam.screen_to_world(screen_center(), viewport()).unwrap();
    assert!(point_approx_eq(world, Point::new(12.0, -7.0)));
}

#[test]
fn top_down_screen_axes() {
    let cam = Camera::top_down(Point::new(0.0, 0.0), 50.0);
    let right = cam.screen_to_world(Point::new(900.0, 360.0), viewport()).unwrap();
    let below = cam.screen_to_world(Point::new(640.0, 600.0), viewport()).unwrap();
    assert!(right.x > 0.0 && approx_eq(right.y, 0.0));
    assert!(below.y > 0.0 && approx_eq(below.x, 0.0));
}

#[test]
fn top_down_scale_matches_field_of_view() {
    let height = 40.0;
    let cam = Camera::top_down(Point::new(0.0, 0.0), height);
    let top_edge = cam.screen_to_world(Point::new(640.0, 0.0), viewport()).unwrap();
    let half_extent = height * (cam.fov_y_deg * 0.5).to_radians().tan();
    assert!(approx_eq(top_edge.y, -half_extent));
}

#[test]
fn ray_parallel_to_plane_misses() {
    let cam = horizon_camera();
    assert_eq!(cam.screen_to_world(screen_center(), viewport()), None);
}

#[test]
fn ray_pointing_away_from_plane_misses() {
    let cam = horizon_camera();
    assert_eq!(cam.screen_to_world(Point::new(640.0, 10.0), viewport()), None);
}

#[test]
fn ray_below_horizon_hits() {
    let cam = horizon_camera();
    let world = cam.screen_to_world(Point::new(640.0, 700.0), viewport()).unwrap();
    assert!(world.y < 0.0);
}

#[test]
fn degenerate_inputs_miss_without_panicking() {
    let cam = Camera::default();
    assert_eq!(cam.screen_to_world(screen_center(), Viewport::new(0.0, 0.0)), None);
    assert_eq!(cam.screen_to_world(Point::new(f64::NAN, 1.0), viewport()), None);
}

// =============================================================
// world_to_screen
// =============================================================

#[test]
fn world_to_screen_target_is_center() {
    let cam = Camera::default();
    let screen = cam.world_to_screen(Point::new(0.0, 0.0), viewport()).unwrap();
    assert!(point_approx_eq(screen, screen_center()));
}

#[test]
fn world_to_screen_behind_camera_is_none() {
    let cam = horizon_camera();
    assert_eq!(cam.world_to_screen(Point::new(0.0, 50.0), viewport()), None);
}

#[test]
fn round_trip_world_first() {
    let cam = Camera::default();
    for world in [Point::new(10.0, 5.0), Point::new(-30.0, 12.5), Point::new(3.0, -20.0)] {
        let screen = cam.world_to_screen(world, viewport()).unwrap();
        let back = cam.screen_to_world(screen, viewport()).unwrap();
        assert!(point_approx_eq(back, world), "{world:?} -> {back:?}");
    }
}

#[test]
fn round_trip_screen_first() {
    let cam = Camera::top_down(Point::new(5.0, 5.0), 30.0);
    let screen = Point::new(400.0, 300.0);
    let world = cam.screen_to_world(screen, viewport()).unwrap();
    let back = cam.world_to_screen(world, viewport()).unwrap();
    assert!(point_approx_eq(back, screen));
}
