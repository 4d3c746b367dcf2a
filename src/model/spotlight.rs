use crate::geometry::outline::Outline;
use crate::geometry::shape::Shape;

/// A highlighted region plus an optional caption.
///
/// Spotlights are immutable snapshots; every highlight state is a new value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Spotlight {
    shape: Shape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Spotlight {
    pub fn new(shape: Shape) -> Self {
        Self { shape, text: None }
    }

    /// Attach caption text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..self
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn outline(&self) -> Outline {
        self.shape.outline()
    }

    pub fn collapsed_outline(&self) -> Outline {
        self.shape.collapsed_outline()
    }
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new(Shape::oval((0.0, 0.0), 100.0))
    }
}

impl From<Shape> for Spotlight {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/spotlight.rs"]
mod tests;
