use ab_glyph::{Font, FontVec, Glyph, Point, PxScale, Rect, ScaleFont, point};
use domain::{
    layout::{FALLBACK_CHAR_WIDTH_PX, TextExtent, TextOrigin, centered_origin, target_font_size},
    raster::{PixelLayout, Raster},
    watermark::TextStyle,
};
use std::sync::Arc;
use tracing::{debug, instrument};
use watermark_application::{
    error::AppResult,
    infrastructure_config::FontConfig,
    ports::outgoing::text_overlay::{FontTier, TextOverlayPort},
};

use super::{
    bitmap_glyphs::for_each_lit_pixel,
    fonts::{FontChoice, resolve_font},
};

/// Renders centered text with a drop shadow using the font chosen at startup.
#[derive(Debug, Clone)]
pub struct ImageTextOverlayAdapter {
    font: Arc<FontChoice>,
}

impl ImageTextOverlayAdapter {
    pub fn new(font: FontChoice) -> Self {
        Self {
            font: Arc::new(font),
        }
    }

    pub fn from_config(config: &FontConfig) -> Self {
        Self::new(resolve_font(config))
    }

    fn painter(&self, image_width: u32, image_height: u32) -> Painter<'_> {
        match self.font.as_ref() {
            FontChoice::Scalable { font, .. } => Painter::Outline {
                font,
                scale: PxScale::from(to_f32(i64::from(target_font_size(
                    image_width,
                    image_height,
                )))),
            },
            FontChoice::Default { font, px, .. } => Painter::Outline {
                font,
                scale: PxScale::from(*px),
            },
            FontChoice::Bitmap => Painter::Bitmap,
        }
    }
}

impl TextOverlayPort for ImageTextOverlayAdapter {
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    fn overlay_text(&self, image: Raster, style: &TextStyle) -> AppResult<Raster> {
        let color = style.color.to_rgb()?;
        let base = image.into_rgba();
        let (width, height) = base.dimensions();

        let painter = self.painter(width, height);
        let extent = painter.measure(&style.text);
        let origin = centered_origin(width, height, extent);
        debug!(?extent, ?origin, "Placing watermark text");

        let mut layer = Layer::transparent(width, height);
        if painter.draws_shadow() {
            let shadow_ink = [0, 0, 0, style.opacity.shadow_alpha()];
            painter.draw(&mut layer, &style.text, origin.shadow(), shadow_ink);
        }
        let ink = [color.r, color.g, color.b, style.opacity.alpha()];
        painter.draw(&mut layer, &style.text, origin, ink);

        let mut data = base.into_data();
        composite_over(&mut data, &layer.data);
        Ok(Raster::new(width, height, PixelLayout::Rgba, data)?)
    }

    fn font_tier(&self) -> FontTier {
        self.font.tier()
    }
}

enum Painter<'a> {
    Outline { font: &'a FontVec, scale: PxScale },
    Bitmap,
}

impl Painter<'_> {
    fn draws_shadow(&self) -> bool {
        matches!(self, Self::Outline { .. })
    }

    /// Ink bounds of the laid-out line. Text without ink falls back to its
    /// advance width and the font's line height.
    fn measure(&self, text: &str) -> TextExtent {
        match self {
            Self::Outline { font, scale } => {
                let (glyphs, advance) = layout_line(font, *scale, text, point(0.0, 0.0));
                let ink = glyphs
                    .into_iter()
                    .filter_map(|glyph| font.outline_glyph(glyph))
                    .map(|outlined| outlined.px_bounds())
                    .reduce(|acc, bounds| Rect {
                        min: point(acc.min.x.min(bounds.min.x), acc.min.y.min(bounds.min.y)),
                        max: point(acc.max.x.max(bounds.max.x), acc.max.y.max(bounds.max.y)),
                    });
                let (width, height) = ink.map_or_else(
                    || (advance.ceil(), font.as_scaled(*scale).height()),
                    |bounds| {
                        (
                            bounds.max.x.ceil() - bounds.min.x.floor(),
                            bounds.max.y.ceil() - bounds.min.y.floor(),
                        )
                    },
                );
                TextExtent::new(width.max(0.0) as u32, height.max(0.0) as u32)
            }
            Self::Bitmap => TextExtent::estimated(text),
        }
    }

    fn draw(&self, layer: &mut Layer, text: &str, origin: TextOrigin, ink: [u8; 4]) {
        match self {
            Self::Outline { font, scale } => {
                let start = point(to_f32(i64::from(origin.x)), to_f32(i64::from(origin.y)));
                let (glyphs, _) = layout_line(font, *scale, text, start);
                for outlined in glyphs.into_iter().filter_map(|g| font.outline_glyph(g)) {
                    let bounds = outlined.px_bounds();
                    let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
                    outlined.draw(|x, y, coverage| {
                        layer.paint(left + x as i32, top + y as i32, ink, coverage);
                    });
                }
            }
            Self::Bitmap => {
                let cell = FALLBACK_CHAR_WIDTH_PX as i32;
                for (index, c) in text.chars().enumerate() {
                    let cell_x = origin.x.saturating_add(cell.saturating_mul(index as i32));
                    for_each_lit_pixel(c, |dx, dy| {
                        layer.paint(
                            cell_x.saturating_add(dx as i32),
                            origin.y.saturating_add(dy as i32),
                            ink,
                            1.0,
                        );
                    });
                }
            }
        }
    }
}

/// Positions each glyph on a single line with kerning. The line's top edge
/// is at `origin` and its baseline one ascent below. Returns the glyphs and
/// the total advance.
fn layout_line(
    font: &FontVec,
    scale: PxScale,
    text: &str,
    origin: Point,
) -> (Vec<Glyph>, f32) {
    let scaled = font.as_scaled(scale);
    let baseline = origin.y + scaled.ascent();

    let mut cursor = 0.0f32;
    let mut previous = None;
    let mut glyphs = Vec::with_capacity(text.len());

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            cursor += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(origin.x + cursor, baseline)));
        cursor += scaled.h_advance(id);
        previous = Some(id);
    }

    (glyphs, cursor)
}

/// Transparent RGBA layer the shadow and text are painted onto before it is
/// blended with the image.
struct Layer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Layer {
    fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Moves every channel of the pixel toward `ink` by `coverage`.
    /// Coordinates outside the layer are clipped.
    fn paint(&mut self, x: i32, y: i32, ink: [u8; 4], coverage: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width || y >= self.height || coverage <= 0.0 {
            return;
        }

        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let coverage = coverage.min(1.0);
        if let Some(pixel) = self.data.get_mut(offset..offset + 4) {
            for (channel, target) in pixel.iter_mut().zip(ink) {
                let current = f32::from(*channel);
                *channel = to_byte(current + (f32::from(target) - current) * coverage);
            }
        }
    }
}

/// Porter-Duff "over" of `overlay` onto `base`, both tightly packed RGBA.
fn composite_over(base: &mut [u8], overlay: &[u8]) {
    for (bottom, top) in base.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
        let (Some(&top_alpha), Some(&bottom_alpha)) = (top.get(3), bottom.get(3)) else {
            continue;
        };
        if top_alpha == 0 {
            continue;
        }

        let top_a = f32::from(top_alpha) / 255.0;
        let bottom_a = f32::from(bottom_alpha) / 255.0;
        let out_a = top_a + bottom_a * (1.0 - top_a);

        for (b, &t) in bottom.iter_mut().zip(top).take(3) {
            let blended = f32::from(t) * top_a + f32::from(*b) * bottom_a * (1.0 - top_a);
            *b = to_byte(blended / out_a);
        }
        if let Some(alpha) = bottom.get_mut(3) {
            *alpha = to_byte(out_a * 255.0);
        }
    }
}

fn to_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[allow(clippy::cast_precision_loss)]
fn to_f32(value: i64) -> f32 {
    value as f32
}
