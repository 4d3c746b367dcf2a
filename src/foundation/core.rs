pub use kurbo::{Affine, BezPath, PathEl, Point, Rect, Size, Vec2};

pub(crate) fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::from_points(
        a.origin().lerp(b.origin(), t),
        Point::new(a.x1, a.y1).lerp(Point::new(b.x1, b.y1), t),
    )
}

pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
