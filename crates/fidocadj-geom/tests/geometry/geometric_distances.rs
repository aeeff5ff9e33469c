use fidocadj_core::constants::MIN_DISTANCE;
use fidocadj_geom::geometric_distances::*;

#[test]
fn test_point_to_point_near() {
    assert_eq!(point_to_point(0, 0, 3, 4), 5);
    assert!((point_to_point_f64(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-12);
    assert_eq!(point_to_point(0, 0, 1, 1), 1);
}

#[test]
fn test_point_to_point_far_returns_sentinel() {
    assert_eq!(point_to_point(0, 0, 150, 10), MIN_DISTANCE);
    assert_eq!(point_to_point(0, 0, 10, -150), MIN_DISTANCE);
    assert_eq!(point_to_point_f64(0.0, 0.0, 100.0, 0.0), 100.0);
}

#[test]
fn test_point_to_segment_perpendicular() {
    let d = point_to_segment_f64(0.0, 0.0, 10.0, 0.0, 5.0, 100.0);
    assert!((d - 100.0).abs() < 1e-12);
    assert_eq!(point_to_segment(0, 0, 10, 0, 5, 100), 100);
    assert_eq!(point_to_segment(0, 0, 10, 0, 5, -7), 7);
}

#[test]
fn test_point_to_segment_beyond_end_points() {
    // Projection falls before A: distance to A.
    assert_eq!(point_to_segment(0, 0, 10, 0, -3, 4), 5);
    // Projection falls after B: distance to B.
    assert_eq!(point_to_segment(0, 0, 10, 0, 13, -4), 5);
}

#[test]
fn test_point_to_segment_outside_box_returns_sentinel() {
    assert_eq!(point_to_segment(0, 0, 10, 0, 5, 101), MIN_DISTANCE);
    assert_eq!(point_to_segment(0, 0, 10, 0, -120, 0), MIN_DISTANCE);
    assert_eq!(point_to_segment_f64(0.0, 0.0, 10.0, 0.0, 200.0, 0.0), 100.0);
}

#[test]
fn test_point_to_segment_degenerate() {
    assert_eq!(point_to_segment(5, 5, 5, 5, 8, 9), 5);
    let d = point_to_segment_f64(5.0, 5.0, 5.0, 5.0, 8.0, 9.0);
    assert!((d - 5.0).abs() < 1e-12);
}

#[test]
fn test_point_to_segment_symmetric() {
    let d1 = point_to_segment_f64(3.0, -7.0, 41.0, 19.0, 12.5, 30.25);
    let d2 = point_to_segment_f64(41.0, 19.0, 3.0, -7.0, 12.5, 30.25);
    assert_eq!(d1, d2);
}

#[test]
fn test_point_in_polygon_square() {
    let xs = [0, 10, 10, 0];
    let ys = [0, 0, 10, 10];
    assert!(point_in_polygon(&xs, &ys, 5.0, 5.0));
    assert!(!point_in_polygon(&xs, &ys, 15.0, 15.0));
}

#[test]
fn test_point_in_polygon_concave() {
    // U shape opening upwards.
    let xs = [0.0, 30.0, 30.0, 20.0, 20.0, 10.0, 10.0, 0.0];
    let ys = [0.0, 0.0, 30.0, 30.0, 10.0, 10.0, 30.0, 30.0];
    assert!(point_in_polygon(&xs, &ys, 5.0, 20.0));
    assert!(!point_in_polygon(&xs, &ys, 15.0, 20.0));
    assert!(point_in_polygon(&xs, &ys, 15.0, 5.0));
}

#[test]
fn test_point_in_polygon_degenerate() {
    let empty: [i32; 0] = [];
    assert!(!point_in_polygon(&empty, &empty, 0.0, 0.0));
    assert!(!point_in_polygon(&[1], &[1], 1.0, 1.0));
}

#[test]
fn test_point_in_ellipse() {
    assert!(point_in_ellipse(0, 0, 20, 10, 10, 5));
    assert!(point_in_ellipse(0, 0, 20, 10, 18, 5));
    assert!(!point_in_ellipse(0, 0, 20, 10, 19, 9));
    assert!(!point_in_ellipse(0, 0, 20, 10, 25, 5));
    assert!(point_in_ellipse_f64(0.0, 0.0, 20.0, 10.0, 10.0, 1.0));
}

#[test]
fn test_point_to_ellipse_zero_on_contour() {
    assert_eq!(point_to_ellipse_f64(0.0, 0.0, 20.0, 10.0, 20.0, 5.0), 0.0);
    assert_eq!(point_to_ellipse_f64(0.0, 0.0, 20.0, 10.0, 10.0, 0.0), 0.0);
    assert_eq!(point_to_ellipse(0, 0, 20, 10, 0, 5), 0);
}

#[test]
fn test_point_to_ellipse_grows_away_from_contour() {
    let outside: Vec<f64> = [20.0, 25.0, 30.0]
        .iter()
        .map(|&x| point_to_ellipse_f64(0.0, 0.0, 20.0, 10.0, x, 5.0))
        .collect();
    assert!(outside[0] < outside[1] && outside[1] < outside[2]);

    let inside: Vec<f64> = [20.0, 15.0, 10.0]
        .iter()
        .map(|&x| point_to_ellipse_f64(0.0, 0.0, 20.0, 10.0, x, 5.0))
        .collect();
    assert!(inside[0] < inside[1] && inside[1] < inside[2]);
    assert!((inside[2] - 2.5).abs() < 1e-12);
}

#[test]
fn test_point_to_ellipse_degenerate() {
    assert_eq!(point_to_ellipse(0, 0, 0, 10, 3, 5), 3);
    assert_eq!(point_to_ellipse(0, 0, 10, 0, 5, -4), 4);
}

#[test]
fn test_point_in_rectangle() {
    assert!(point_in_rectangle(0, 0, 10, 10, 5, 5));
    assert!(point_in_rectangle(0, 0, 10, 10, 10, 10));
    assert!(!point_in_rectangle(0, 0, 10, 10, 11, 5));
    assert!(point_in_rectangle_f64(0.0, 0.0, 10.0, 10.0, 0.0, 0.0));
    assert!(!point_in_rectangle_f64(0.0, 0.0, 10.0, 10.0, -0.5, 5.0));
}

#[test]
fn test_point_to_rectangle() {
    assert_eq!(point_to_rectangle(0, 0, 10, 10, 5, 5), 5);
    assert_eq!(point_to_rectangle(0, 0, 10, 10, 15, 5), 5);
    assert_eq!(point_to_rectangle(0, 0, 10, 10, 2, 9), 1);
    let d = point_to_rectangle_f64(0.0, 0.0, 10.0, 10.0, 13.0, 14.0);
    assert!((d - 5.0).abs() < 1e-12);
}

#[test]
fn test_point_to_bezier_straight() {
    assert_eq!(point_to_bezier(0, 0, 10, 0, 20, 0, 30, 0, 15, 7), 7);
    let d = point_to_bezier_f64(0.0, 0.0, 10.0, 0.0, 20.0, 0.0, 30.0, 0.0, 15.0, 7.0);
    assert!((d - 7.0).abs() < 1e-9);
}

#[test]
fn test_point_to_bezier_on_curve() {
    // u = 0.5 gives (20, 30).
    assert_eq!(point_to_bezier(0, 0, 10, 40, 30, 40, 40, 0, 20, 30), 0);
    assert_eq!(point_to_bezier(0, 0, 10, 40, 30, 40, 40, 0, 20, 34), 4);
}

#[test]
fn test_point_to_bezier_far() {
    assert_eq!(point_to_bezier(0, 0, 10, 40, 30, 40, 40, 0, 500, 500), MIN_DISTANCE);
}

#[test]
fn test_rectangle_queries_near_i32_limits() {
    // Far corner lies beyond i32::MAX.
    assert_eq!(point_to_rectangle(2_000_000_000, 0, 200_000_000, 10, 0, 0), MIN_DISTANCE);
    assert_eq!(
        point_to_rectangle(2_000_000_000, 0, 200_000_000, 10, 2_100_000_000, 13),
        3
    );
    assert!(point_in_rectangle(2_000_000_000, 0, 200_000_000, 10, 2_100_000_000, 5));
    assert!(!point_in_rectangle(2_000_000_000, 0, 200_000_000, 10, 0, 5));
}
