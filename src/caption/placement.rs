use crate::foundation::core::{Point, Rect, Size};
use crate::geometry::shape::Shape;

/// Caption text and where it is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: String,
    pub frame: Rect,
}

/// Frame for a caption of `text_size` under `shape`.
///
/// Centered horizontally on the shape, top edge `gap` below the shape's bottom edge. No clamping
/// to the view bounds is applied.
pub fn place_caption(shape: &Shape, text_size: Size, gap: f64) -> Rect {
    let center = shape.center();
    let distance_to_edge = shape.size().height / 2.0;
    let origin = Point::new(
        center.x - text_size.width / 2.0,
        center.y + distance_to_edge + gap,
    );
    Rect::from_origin_size(origin, text_size)
}

#[cfg(test)]
#[path = "../../tests/unit/caption/placement.rs"]
mod tests;
