use super::*;

#[test]
fn lerp_rect_moves_both_corners() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 10.0, 30.0, 50.0);
    assert_eq!(lerp_rect(a, b, 0.5), Rect::new(5.0, 5.0, 20.0, 30.0));
    assert_eq!(lerp_rect(a, b, 0.0), a);
}

#[test]
fn finite_point_rejects_nan() {
    assert!(is_finite_point(Point::new(1.0, 2.0)));
    assert!(!is_finite_point(Point::new(f64::NAN, 2.0)));
    assert!(!is_finite_point(Point::new(1.0, f64::INFINITY)));
}
