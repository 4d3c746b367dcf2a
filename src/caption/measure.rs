use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::{SpotlightError, SpotlightResult};

/// Measures the natural (unwrapped) size of caption text.
pub trait TextMeasure {
    /// Natural size of `text` laid out on as many lines as it contains.
    fn measure(&mut self, text: &str) -> Size;
}

/// Font-free measurement with a constant advance per character.
///
/// Deterministic, which makes it the default for headless use and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    /// Horizontal advance of every character.
    pub advance: f64,
    /// Height of every line.
    pub line_height: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            advance: 9.0,
            line_height: 19.0,
        }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure(&mut self, text: &str) -> Size {
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.lines() {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        Size::new(
            widest as f64 * self.advance,
            lines.max(1) as f64 * self.line_height,
        )
    }
}

/// Parley brush color for caption glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptionBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<[u8; 4]> for CaptionBrush {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Text shaping and measurement backed by Parley and a single font.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<CaptionBrush>,
    family: String,
    font_bytes: Arc<Vec<u8>>,
    size_px: f32,
}

impl ParleyMeasure {
    /// Register `font_bytes` and measure at `size_px`.
    pub fn new(font_bytes: Vec<u8>, size_px: f32) -> SpotlightResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SpotlightError::layout(
                "caption font size must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            SpotlightError::layout("no font families registered from font bytes")
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SpotlightError::layout("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family, size_px, "caption font registered");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font_bytes: Arc::new(font_bytes),
            size_px,
        })
    }

    /// Font family name resolved from the font bytes.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Raw font bytes, shared with glyph rendering.
    pub fn font_bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.font_bytes)
    }

    /// Shape `text` without line wrapping.
    pub fn layout(&mut self, text: &str, brush: CaptionBrush) -> parley::Layout<CaptionBrush> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<CaptionBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure(&mut self, text: &str) -> Size {
        let layout = self.layout(text, CaptionBrush::default());
        Size::new(f64::from(layout.width()), f64::from(layout.height()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/measure.rs"]
mod tests;
