/// Convenience result type used across the crate.
pub type SpotlightResult<T> = Result<T, SpotlightError>;

/// Errors surfaced by validation, text shaping, and rendering.
///
/// Shape math, mask building, and transitions never fail; only the boundaries that accept
/// untrusted input (scene files, font bytes, raster surfaces) report errors.
#[derive(thiserror::Error, Debug)]
pub enum SpotlightError {
    /// Input geometry or scene data is not well formed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Text could not be shaped or measured.
    #[error("layout error: {0}")]
    Layout(String),

    /// The overlay could not be rasterized.
    #[error("render error: {0}")]
    Render(String),

    /// Scene (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpotlightError {
    /// Build a [`SpotlightError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpotlightError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`SpotlightError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpotlightError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
