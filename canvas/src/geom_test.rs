#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// =============================================================
// Rotation
// =============================================================

#[test]
fn rotate_point_quarter_turn_about_origin() {
    let p = rotate_point(Point::new(1.0, 0.0), Point::new(0.0, 0.0), 90.0);
    assert!(point_approx_eq(p, Point::new(0.0, 1.0)));
}

#[test]
fn rotate_point_about_offset_center() {
    let p = rotate_point(Point::new(3.0, 2.0), Point::new(2.0, 2.0), 180.0);
    assert!(point_approx_eq(p, Point::new(1.0, 2.0)));
}

#[test]
fn rotate_point_center_is_fixed() {
    let c = Point::new(5.0, -3.0);
    assert!(point_approx_eq(rotate_point(c, c, 123.0), c));
}

#[test]
fn local_to_world_without_rotation_is_identity() {
    let p = Point::new(4.0, 7.0);
    assert_eq!(local_to_world(p, None), p);
    let zero = Rotation::new(360.0, Point::new(1.0, 1.0));
    assert_eq!(local_to_world(p, Some(&zero)), p);
}

#[test]
fn world_to_local_inverts_local_to_world() {
    let r = Rotation::new(37.0, Point::new(2.0, -1.0));
    let p = Point::new(10.0, 4.0);
    let back = world_to_local(local_to_world(p, Some(&r)), Some(&r));
    assert!(point_approx_eq(back, p));
}

#[test]
fn rotation_identity_detection() {
    assert!(Rotation::new(0.0, Point::default()).is_identity());
    assert!(Rotation::new(-720.0, Point::default()).is_identity());
    assert!(!Rotation::new(1.0, Point::default()).is_identity());
}

#[test]
fn rotation_finiteness() {
    assert!(Rotation::new(10.0, Point::new(1.0, 2.0)).is_finite());
    assert!(!Rotation::new(f64::NAN, Point::default()).is_finite());
    assert!(!Rotation::new(0.0, Point::new(f64::INFINITY, 0.0)).is_finite());
}

// =============================================================
// Angles
// =============================================================

#[test]
fn angle_deg_cardinal_directions() {
    let c = Point::new(0.0, 0.0);
    assert!(approx_eq(angle_deg(c, Point::new(1.0, 0.0)), 0.0));
    assert!(approx_eq(angle_deg(c, Point::new(0.0, 1.0)), 90.0));
    assert!(approx_eq(angle_deg(c, Point::new(-1.0, 0.0)), 180.0));
    assert!(approx_eq(angle_deg(c, Point::new(0.0, -1.0)), -90.0));
}

#[test]
fn normalize_deg_maps_into_half_open_range() {
    assert_eq!(normalize_deg(180.0), 180.0);
    assert_eq!(normalize_deg(-180.0), 180.0);
    assert_eq!(normalize_deg(190.0), -170.0);
    assert_eq!(normalize_deg(540.0), 180.0);
    assert_eq!(normalize_deg(-90.0), -90.0);
    assert_eq!(normalize_deg(0.0), 0.0);
}

#[test]
fn normalize_deg_non_finite_is_zero() {
    assert_eq!(normalize_deg(f64::NAN), 0.0);
    assert_eq!(normalize_deg(f64::INFINITY), 0.0);
    assert_eq!(normalize_deg_360(f64::NEG_INFINITY), 0.0);
}

#[test]
fn normalize_deg_360_range() {
    assert_eq!(normalize_deg_360(-90.0), 270.0);
    assert_eq!(normalize_deg_360(360.0), 0.0);
    assert_eq!(normalize_deg_360(725.0), 5.0);
}

#[test]
fn signed_delta_takes_short_way_round() {
    assert!(approx_eq(signed_delta_deg(-170.0, 170.0), 20.0));
    assert!(approx_eq(signed_delta_deg(170.0, -170.0), -20.0));
    assert!(approx_eq(signed_delta_deg(10.0, 0.0), 10.0));
}

#[test]
fn snap_deg_rounds_to_increment() {
    assert_eq!(snap_deg(190.0, 45.0), 180.0);
    assert_eq!(snap_deg(23.0, 45.0), 45.0);
    assert_eq!(snap_deg(-67.0, 45.0), -45.0);
}

#[test]
fn snap_deg_disabled_by_bad_increment() {
    assert_eq!(snap_deg(33.0, 0.0), 33.0);
    assert_eq!(snap_deg(33.0, -45.0), 33.0);
    assert_eq!(snap_deg(33.0, f64::NAN), 33.0);
}

proptest! {
    #[test]
    fn normalize_is_idempotent_and_in_range(theta in -1.0e6f64..1.0e6) {
        let once = normalize_deg(theta);
        prop_assert!(once > -180.0 && once <= 180.0);
        prop_assert_eq!(normalize_deg(once), once);
    }

    #[test]
    fn rotate_then_unrotate_restores_point(
        x in -1.0e3f64..1.0e3,
        y in -1.0e3f64..1.0e3,
        cx in -1.0e3f64..1.0e3,
        cy in -1.0e3f64..1.0e3,
        theta in -720.0f64..720.0,
    ) {
        let p = Point::new(x, y);
        let c = Point::new(cx, cy);
        let back = rotate_point(rotate_point(p, c, theta), c, -theta);
        prop_assert!((back.x - p.x).abs() < 1e-6 && (back.y - p.y).abs() < 1e-6);
    }
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_from_corners_any_order() {
    let b = Bounds::from_corners(Point::new(4.0, 1.0), Point::new(0.0, 3.0));
    assert_eq!(b.min, Point::new(0.0, 1.0));
    assert_eq!(b.max, Point::new(4.0, 3.0));
    assert_eq!(b.width(), 4.0);
    assert_eq!(b.height(), 2.0);
    assert_eq!(b.area(), 8.0);
    assert_eq!(b.center(), Point::new(2.0, 2.0));
}

#[test]
fn bounds_from_points_empty_is_none() {
    assert!(Bounds::from_points(Vec::new()).is_none());
}

#[test]
fn bounds_centered_round_trips_center() {
    let b = Bounds::centered(Point::new(1.0, -1.0), 4.0, 2.0);
    assert_eq!(b.min, Point::new(-1.0, -2.0));
    assert_eq!(b.center(), Point::new(1.0, -1.0));
}

#[test]
fn bounds_union_covers_both() {
    let a = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let b = Bounds::from_corners(Point::new(3.0, -2.0), Point::new(4.0, 0.5));
    let u = a.union(&b);
    assert_eq!(u.min, Point::new(0.0, -2.0));
    assert_eq!(u.max, Point::new(4.0, 1.0));
}

#[test]
fn rect_corners_clockwise_from_top_left() {
    let corners = rect_corners(Point::new(2.0, 2.0), Point::new(0.0, 0.0));
    assert_eq!(
        corners,
        [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0), Point::new(0.0, 2.0)]
    );
}

#[test]
fn centroid_of_square() {
    let pts = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0), Point::new(0.0, 2.0)];
    assert_eq!(centroid(&pts), Some(Point::new(1.0, 1.0)));
    assert_eq!(centroid(&[]), None);
}

// =============================================================
// Edges and areas
// =============================================================

#[test]
fn edge_midpoints_closed_includes_closing_edge() {
    let tri = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
    let mids = edge_midpoints(&tri, true);
    assert_eq!(mids.len(), 3);
    assert_eq!(mids[2], Point::new(0.0, 2.0));
}

#[test]
fn edge_midpoints_open_skips_closing_edge() {
    let line = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 4.0)];
    let mids = edge_midpoints(&line, false);
    assert_eq!(mids, vec![Point::new(2.0, 0.0), Point::new(4.0, 2.0)]);
}

#[test]
fn edge_midpoints_two_points_never_doubles_back() {
    let seg = [Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
    assert_eq!(edge_midpoints(&seg, true).len(), 1);
}

#[test]
fn polygon_area_shoelace_either_winding() {
    let cw = [Point::new(0.0, 0.0), Point::new(0.0, 3.0), Point::new(4.0, 3.0), Point::new(4.0, 0.0)];
    let ccw: Vec<Point> = cw.iter().rev().copied().collect();
    assert!(approx_eq(polygon_area(&cw), 12.0));
    assert!(approx_eq(polygon_area(&ccw), 12.0));
    assert_eq!(polygon_area(&cw[..2]), 0.0);
}

// =============================================================
// Ellipse
// =============================================================

#[test]
fn ellipse_from_compact_form() {
    let e = Ellipse::from_points(&[Point::new(1.0, 1.0), Point::new(1.0, 4.0)]);
    assert_eq!(e, Some(Ellipse::circle(Point::new(1.0, 1.0), 3.0)));
}

#[test]
fn ellipse_from_perimeter_form() {
    let original = Ellipse { center: Point::new(2.0, -1.0), rx: 5.0, ry: 2.0 };
    let decoded = Ellipse::from_points(&original.perimeter(48)).unwrap();
    assert!(point_approx_eq(decoded.center, original.center));
    assert!(approx_eq(decoded.rx, 5.0));
    assert!(approx_eq(decoded.ry, 2.0));
}

#[test]
fn ellipse_decodes_any_segment_count() {
    let original = Ellipse { center: Point::new(-3.0, 4.0), rx: 10.0, ry: 4.0 };
    for segments in [3, 5, 7, 13, 50, 61] {
        let decoded = Ellipse::from_points(&original.perimeter(segments)).unwrap();
        assert!(point_approx_eq(decoded.center, original.center), "{segments}: {decoded:?}");
        assert!(approx_eq(decoded.rx, 10.0), "{segments}: rx {}", decoded.rx);
        assert!(approx_eq(decoded.ry, 4.0), "{segments}: ry {}", decoded.ry);
    }
}

#[test]
fn ellipse_ignores_closing_point() {
    let original = Ellipse { center: Point::new(0.0, 0.0), rx: 6.0, ry: 2.0 };
    let mut outline = original.perimeter(10);
    outline.push(outline[0]);
    let decoded = Ellipse::from_points(&outline).unwrap();
    assert!(point_approx_eq(decoded.center, original.center));
    assert!(approx_eq(decoded.rx, 6.0));
    assert!(approx_eq(decoded.ry, 2.0));
}

#[test]
fn ellipse_from_too_few_points_is_none() {
    assert!(Ellipse::from_points(&[]).is_none());
    assert!(Ellipse::from_points(&[Point::new(0.0, 0.0)]).is_none());
}

#[test]
fn ellipse_circle_encodes_compact() {
    let c = Ellipse::circle(Point::new(0.0, 0.0), 2.0);
    assert_eq!(c.to_points(48), vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
}

#[test]
fn ellipse_distorted_encodes_perimeter() {
    let e = Ellipse { center: Point::new(0.0, 0.0), rx: 2.0, ry: 1.0 };
    let pts = e.to_points(48);
    assert_eq!(pts.len(), 48);
    assert!(point_approx_eq(pts[0], Point::new(2.0, 0.0)));
}

#[test]
fn ellipse_point_at_cardinals() {
    let e = Ellipse { center: Point::new(1.0, 1.0), rx: 3.0, ry: 2.0 };
    assert!(point_approx_eq(e.point_at(0.0), Point::new(4.0, 1.0)));
    assert!(point_approx_eq(e.point_at(90.0), Point::new(1.0, 3.0)));
    assert!(point_approx_eq(e.point_at(-90.0), Point::new(1.0, -1.0)));
}

#[test]
fn ellipse_area_and_bounds() {
    let e = Ellipse { center: Point::new(0.0, 0.0), rx: 3.0, ry: 2.0 };
    assert!(approx_eq(e.area(), std::f64::consts::PI * 6.0));
    assert_eq!(e.bounds(), Bounds::from_corners(Point::new(-3.0, -2.0), Point::new(3.0, 2.0)));
}
