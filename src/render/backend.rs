use crate::foundation::core::Rect;
use crate::foundation::error::{SpotlightError, SpotlightResult};

/// A rendered overlay frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 value of the pixel at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Pixel size of the surface covering `bounds`, rounded up.
pub(crate) fn surface_size(bounds: Rect) -> SpotlightResult<(u16, u16)> {
    let w = bounds.x1.max(0.0).ceil();
    let h = bounds.y1.max(0.0).ceil();
    if !w.is_finite() || !h.is_finite() {
        return Err(SpotlightError::render("view bounds must be finite"));
    }
    if w < 1.0 || h < 1.0 {
        return Err(SpotlightError::render("view bounds must cover at least one pixel"));
    }
    if w > f64::from(u16::MAX) || h > f64::from(u16::MAX) {
        return Err(SpotlightError::render(format!(
            "view bounds {w}x{h} exceed the maximum surface size"
        )));
    }
    Ok((w as u16, h as u16))
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
