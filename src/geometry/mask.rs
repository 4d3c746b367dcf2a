use crate::foundation::core::{BezPath, PathEl, Point, Rect, lerp_rect};
use crate::geometry::outline::{Outline, interpolate_paths};

/// Fill rule a mask path must be rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FillRule {
    /// Non-zero winding.
    NonZero,
    /// Even-odd parity.
    EvenOdd,
}

/// Compound mask: the bounds rectangle followed by one sub-path per spotlight outline.
///
/// Filled with [`FillRule::EvenOdd`], each outline becomes a transparent hole and the rest of
/// the bounds stays opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskPath {
    path: BezPath,
    bounds: Rect,
    holes: usize,
}

impl MaskPath {
    /// Build the mask for `bounds` with `outlines` cut out.
    pub fn build<'a>(bounds: Rect, outlines: impl IntoIterator<Item = &'a Outline>) -> Self {
        let b = bounds.abs();
        let mut path = BezPath::new();
        path.move_to((b.x0, b.y0));
        path.line_to((b.x1, b.y0));
        path.line_to((b.x1, b.y1));
        path.line_to((b.x0, b.y1));
        path.close_path();

        let mut holes = 0;
        for outline in outlines {
            path.extend(outline.path().elements().iter().copied());
            holes += 1;
        }

        Self {
            path,
            bounds: b,
            holes,
        }
    }

    pub fn fill_rule(&self) -> FillRule {
        FillRule::EvenOdd
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of outlines cut out of the bounds.
    pub fn hole_count(&self) -> usize {
        self.holes
    }

    /// Number of closed sub-paths, including the bounds rectangle.
    pub fn subpath_count(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    /// Whether `p` is left unpainted when the mask is filled with the even-odd rule.
    pub fn is_transparent_at(&self, p: Point) -> bool {
        // Winding parity equals crossing parity, so this is the even-odd test.
        kurbo::Shape::winding(&self.path, p) % 2 == 0
    }

    /// Morph toward `other`; snaps to `other` when the two masks do not share a topology.
    pub fn interpolate(&self, other: &MaskPath, t: f64) -> MaskPath {
        match interpolate_paths(&self.path, &other.path, t) {
            Some(_) if t >= 1.0 => other.clone(),
            Some(path) if self.holes == other.holes => MaskPath {
                path,
                bounds: lerp_rect(self.bounds, other.bounds, t),
                holes: other.holes,
            },
            _ => other.clone(),
        }
    }

    /// SVG path data for the mask.
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mask.rs"]
mod tests;
