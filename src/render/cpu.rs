use crate::caption::measure::{CaptionBrush, ParleyMeasure};
use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::SpotlightResult;
use crate::render::backend::{FrameRGBA, surface_size};
use crate::view::spotlight_view::SpotlightView;

/// Caption font used for glyph rendering.
struct CaptionFont {
    shaper: ParleyMeasure,
    font: vello_cpu::peniko::FontData,
}

/// CPU rasterizer for a [`SpotlightView`], powered by `vello_cpu`.
///
/// The presented mask is filled with the configured dim color using the even-odd rule; the
/// caption is drawn on top when a caption font was supplied.
#[derive(Default)]
pub struct OverlayRenderer {
    ctx: Option<vello_cpu::RenderContext>,
    caption_font: Option<CaptionFont>,
    clear_rgba: Option<[u8; 4]>,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw captions with glyphs shaped by `shaper`.
    pub fn with_caption_font(mut self, shaper: ParleyMeasure) -> Self {
        let bytes = shaper.font_bytes();
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.to_vec()), 0);
        self.caption_font = Some(CaptionFont { shaper, font });
        self
    }

    /// Fill the frame with `clear` before drawing the overlay.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }

    /// Rasterize the view as presented at its current time.
    pub fn render(&mut self, view: &SpotlightView) -> SpotlightResult<FrameRGBA> {
        let (width, height) = surface_size(view.bounds())?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if let Some([r, g, b, a]) = self.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        if let Some(mask) = view.presented_mask() {
            let [r, g, b, a] = view.config().dim_rgba;
            ctx.set_fill_rule(vello_cpu::peniko::Fill::EvenOdd);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_path(&bezpath_to_cpu(mask.path()));
            ctx.set_fill_rule(vello_cpu::peniko::Fill::NonZero);
        }

        if let (Some(caption), Some(font)) = (view.caption(), self.caption_font.as_mut()) {
            let brush = CaptionBrush::from(view.config().caption_rgba);
            let layout = font.shaper.layout(&caption.text, brush);
            ctx.set_transform(affine_to_cpu(Affine::translate((
                caption.frame.x0,
                caption.frame.y0,
            ))));
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&font.font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);

        tracing::trace!(width, height, "overlay rendered");
        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data,
            premultiplied: true,
        })
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
