use crate::animation::ease::Ease;

/// Default duration, in seconds, of every spotlight transition.
pub const DEFAULT_ANIMATE_DURATION: f64 = 0.25;

/// Default vertical gap between a shape's bottom edge and its caption.
pub const DEFAULT_CAPTION_GAP: f64 = 12.0;

/// Presentation settings for a spotlight view.
///
/// The per-operation `duration` argument is the only runtime override of
/// [`SpotlightConfig::default_duration`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpotlightConfig {
    /// Transition duration in seconds used when an operation does not pass one.
    pub default_duration: f64,
    /// Timing curve for every mask animation.
    pub ease: Ease,
    /// Gap between the shape's bottom edge and the caption's top edge.
    pub caption_gap: f64,
    /// Overlay color (straight RGBA8).
    pub dim_rgba: [u8; 4],
    /// Caption text color (straight RGBA8).
    pub caption_rgba: [u8; 4],
    /// Caption font size in pixels.
    pub caption_font_px: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_ANIMATE_DURATION,
            ease: Ease::SPOTLIGHT,
            caption_gap: DEFAULT_CAPTION_GAP,
            dim_rgba: [0, 0, 0, 178],
            caption_rgba: [255, 255, 255, 255],
            caption_font_px: 16.0,
        }
    }
}

impl SpotlightConfig {
    /// Return a config with a different default duration.
    pub fn with_default_duration(mut self, secs: f64) -> Self {
        self.default_duration = secs;
        self
    }

    /// Return a config with a different timing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Return a config with a different caption gap.
    pub fn with_caption_gap(mut self, gap: f64) -> Self {
        self.caption_gap = gap;
        self
    }

    /// Return a config with a different overlay color.
    pub fn with_dim_rgba(mut self, rgba: [u8; 4]) -> Self {
        self.dim_rgba = rgba;
        self
    }

    pub(crate) fn validate(&self) -> crate::foundation::error::SpotlightResult<()> {
        use crate::foundation::error::SpotlightError;

        if !self.default_duration.is_finite() || self.default_duration < 0.0 {
            return Err(SpotlightError::validation(
                "default_duration must be finite and >= 0",
            ));
        }
        if !self.caption_gap.is_finite() {
            return Err(SpotlightError::validation("caption_gap must be finite"));
        }
        if !self.caption_font_px.is_finite() || self.caption_font_px <= 0.0 {
            return Err(SpotlightError::validation(
                "caption_font_px must be finite and > 0",
            ));
        }
        self.ease.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/config.rs"]
mod tests;
