use crate::foundation::core::{Point, Rect, Size, Vec2, is_finite_point};
use crate::foundation::error::{SpotlightError, SpotlightResult};
use crate::geometry::outline::Outline;

/// Extent (width and height) of a collapsed outline.
///
/// Collapsed outlines keep a tiny non-zero size so animated paths never degenerate to a point.
pub const COLLAPSED_EXTENT: f64 = 1e-3;

/// Region highlighted by a spotlight.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Circle of `diameter` centered at `center`.
    Oval {
        /// Center point.
        center: Point,
        /// Circle diameter.
        diameter: f64,
    },
    /// Rectangle of `size` centered at `center` with rounded corners.
    RoundedRect {
        /// Center point.
        center: Point,
        /// Width and height.
        size: Size,
        /// Corner radius; clamped to half the shorter side when outlined.
        radius: f64,
    },
}

impl Shape {
    /// Circle of `diameter` centered at `center`.
    pub fn oval(center: impl Into<Point>, diameter: f64) -> Self {
        Self::Oval {
            center: center.into(),
            diameter,
        }
    }

    /// Rounded rectangle of `size` centered at `center`.
    pub fn rounded_rect(center: impl Into<Point>, size: impl Into<Size>, radius: f64) -> Self {
        Self::RoundedRect {
            center: center.into(),
            size: size.into(),
            radius,
        }
    }

    pub fn center(&self) -> Point {
        match *self {
            Self::Oval { center, .. } | Self::RoundedRect { center, .. } => center,
        }
    }

    /// Bounding box size.
    pub fn size(&self) -> Size {
        match *self {
            Self::Oval { diameter, .. } => Size::new(diameter, diameter),
            Self::RoundedRect { size, .. } => size,
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center_size(self.center(), self.size())
    }

    /// Corner radii actually used when outlining this shape.
    pub fn corner_radii(&self) -> Vec2 {
        let size = self.size();
        match *self {
            Self::Oval { .. } => Vec2::new(size.width / 2.0, size.height / 2.0),
            Self::RoundedRect { radius, .. } => {
                let r = radius.max(0.0).min(size.min_side() / 2.0);
                Vec2::new(r, r)
            }
        }
    }

    /// Same shape shrunk to [`COLLAPSED_EXTENT`] around the same center.
    pub fn collapsed(&self) -> Self {
        match *self {
            Self::Oval { center, .. } => Self::Oval {
                center,
                diameter: COLLAPSED_EXTENT,
            },
            Self::RoundedRect { center, .. } => Self::RoundedRect {
                center,
                size: Size::new(COLLAPSED_EXTENT, COLLAPSED_EXTENT),
                radius: 0.0,
            },
        }
    }

    /// Outline at the declared size.
    pub fn outline(&self) -> Outline {
        Outline::rounded(self.bounding_rect(), self.corner_radii())
    }

    /// Outline of [`Shape::collapsed`].
    pub fn collapsed_outline(&self) -> Outline {
        self.collapsed().outline()
    }

    /// Check that the geometry is finite and non-negative.
    ///
    /// Outlining never calls this; it is for boundaries that accept external data.
    pub fn validate(&self) -> SpotlightResult<()> {
        if !is_finite_point(self.center()) {
            return Err(SpotlightError::validation("shape center must be finite"));
        }
        match *self {
            Self::Oval { diameter, .. } => {
                if !diameter.is_finite() || diameter < 0.0 {
                    return Err(SpotlightError::validation(
                        "oval diameter must be finite and >= 0",
                    ));
                }
            }
            Self::RoundedRect { size, radius, .. } => {
                if !size.is_finite() || size.width < 0.0 || size.height < 0.0 {
                    return Err(SpotlightError::validation(
                        "rounded_rect size must be finite and >= 0",
                    ));
                }
                if !radius.is_finite() || radius < 0.0 {
                    return Err(SpotlightError::validation(
                        "rounded_rect radius must be finite and >= 0",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shape.rs"]
mod tests;
