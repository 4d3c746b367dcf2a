use crate::foundation::core::{BezPath, PathEl, Point, Rect, Vec2};

/// Cubic Bezier handle length for a quarter ellipse of unit radius.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Number of path elements in every outline: one move, eight cubics, one close.
pub const OUTLINE_ELEMENTS: usize = 10;

/// Closed outline of a spotlight shape.
///
/// Every outline has the same topology (a rounded rectangle drawn as four edges and four corner
/// arcs, all as cubics), so any two outlines can be morphed point by point. An ellipse is the
/// rounded rectangle whose corner radii are half its width and height.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    path: BezPath,
    bounds: Rect,
}

impl Outline {
    /// Build an outline inscribed in `rect` with elliptical corner radii `radii`.
    ///
    /// Radii are clamped to `[0, width / 2]` and `[0, height / 2]`.
    pub fn rounded(rect: Rect, radii: Vec2) -> Self {
        let r = rect.abs();
        let rx = radii.x.max(0.0).min(r.width() / 2.0);
        let ry = radii.y.max(0.0).min(r.height() / 2.0);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);
        let (x0, y0, x1, y1) = (r.x0, r.y0, r.x1, r.y1);

        let mut path = BezPath::new();
        path.move_to((x0 + rx, y0));
        line_as_cubic(&mut path, Point::new(x0 + rx, y0), Point::new(x1 - rx, y0));
        path.curve_to((x1 - rx + kx, y0), (x1, y0 + ry - ky), (x1, y0 + ry));
        line_as_cubic(&mut path, Point::new(x1, y0 + ry), Point::new(x1, y1 - ry));
        path.curve_to((x1, y1 - ry + ky), (x1 - rx + kx, y1), (x1 - rx, y1));
        line_as_cubic(&mut path, Point::new(x1 - rx, y1), Point::new(x0 + rx, y1));
        path.curve_to((x0 + rx - kx, y1), (x0, y1 - ry + ky), (x0, y1 - ry));
        line_as_cubic(&mut path, Point::new(x0, y1 - ry), Point::new(x0, y0 + ry));
        path.curve_to((x0, y0 + ry - ky), (x0 + rx - kx, y0), (x0 + rx, y0));
        path.close_path();

        Self { path, bounds: r }
    }

    /// Outline path.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Bounding box the outline is inscribed in.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether `p` lies inside the outline (non-zero winding).
    pub fn contains(&self, p: Point) -> bool {
        kurbo::Shape::winding(&self.path, p) != 0
    }

    /// Consume the outline, returning its path.
    pub fn into_path(self) -> BezPath {
        self.path
    }
}

fn line_as_cubic(path: &mut BezPath, a: Point, b: Point) {
    path.curve_to(a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0), b);
}

/// Interpolate two paths element by element.
///
/// Returns `None` when the paths do not share the same sequence of element kinds. At `t >= 1`
/// the result is exactly `b`.
pub fn interpolate_paths(a: &BezPath, b: &BezPath, t: f64) -> Option<BezPath> {
    let (ea, eb) = (a.elements(), b.elements());
    if ea.len() != eb.len() {
        return None;
    }

    let mut out = BezPath::new();
    for (&x, &y) in ea.iter().zip(eb) {
        let el = match (x, y) {
            (PathEl::MoveTo(p), PathEl::MoveTo(q)) => PathEl::MoveTo(p.lerp(q, t)),
            (PathEl::LineTo(p), PathEl::LineTo(q)) => PathEl::LineTo(p.lerp(q, t)),
            (PathEl::QuadTo(p1, p2), PathEl::QuadTo(q1, q2)) => {
                PathEl::QuadTo(p1.lerp(q1, t), p2.lerp(q2, t))
            }
            (PathEl::CurveTo(p1, p2, p3), PathEl::CurveTo(q1, q2, q3)) => PathEl::CurveTo(
                p1.lerp(q1, t),
                p2.lerp(q2, t),
                p3.lerp(q3, t),
            ),
            (PathEl::ClosePath, PathEl::ClosePath) => PathEl::ClosePath,
            _ => return None,
        };
        out.push(el);
    }
    if t >= 1.0 {
        return Some(b.clone());
    }
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/outline.rs"]
mod tests;
