use super::*;

fn end_points(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| el.end_point())
        .collect()
}

#[test]
fn every_outline_has_the_same_topology() {
    let oval = Outline::rounded(Rect::new(0.0, 0.0, 50.0, 50.0), Vec2::new(25.0, 25.0));
    let square = Outline::rounded(Rect::new(10.0, 10.0, 130.0, 50.0), Vec2::ZERO);
    assert_eq!(oval.path().elements().len(), OUTLINE_ELEMENTS);
    assert_eq!(square.path().elements().len(), OUTLINE_ELEMENTS);
    assert!(interpolate_paths(oval.path(), square.path(), 0.5).is_some());
}

#[test]
fn radii_are_clamped_to_half_extent() {
    let o = Outline::rounded(Rect::new(0.0, 0.0, 40.0, 20.0), Vec2::new(100.0, 100.0));
    // With ry clamped to 10 the right edge segment degenerates to the point (40, 10).
    let pts = end_points(o.path());
    assert!(pts.contains(&Point::new(40.0, 10.0)));
    assert!(pts.contains(&Point::new(0.0, 10.0)));
    // rx clamped to 20: the top edge collapses onto x = 20.
    assert!(pts.contains(&Point::new(20.0, 0.0)));
}

#[test]
fn negative_rect_is_normalized() {
    let o = Outline::rounded(Rect::new(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
    assert_eq!(o.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn contains_respects_rounded_corners() {
    let o = Outline::rounded(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(50.0, 50.0));
    assert!(o.contains(Point::new(50.0, 50.0)));
    assert!(o.contains(Point::new(50.0, 2.0)));
    assert!(!o.contains(Point::new(3.0, 3.0)));
    assert!(!o.contains(Point::new(150.0, 50.0)));
}

#[test]
fn interpolation_endpoints_match_inputs() {
    let a = Outline::rounded(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::new(5.0, 5.0));
    let b = Outline::rounded(Rect::new(100.0, 0.0, 140.0, 20.0), Vec2::new(2.0, 2.0));
    assert_eq!(&interpolate_paths(a.path(), b.path(), 0.0).unwrap(), a.path());
    assert_eq!(&interpolate_paths(a.path(), b.path(), 1.0).unwrap(), b.path());
}

#[test]
fn interpolation_rejects_mismatched_paths() {
    let a = Outline::rounded(Rect::new(0.0, 0.0, 10.0, 10.0), Vec2::ZERO);
    let mut b = BezPath::new();
    b.move_to((0.0, 0.0));
    b.line_to((1.0, 1.0));
    assert!(interpolate_paths(a.path(), &b, 0.5).is_none());
}
