//! Placement math for centered text watermarks.
//!
//! Everything here is independent of the font backend so the numbers can be
//! checked without rendering anything.

pub const MIN_FONT_SIZE_PX: u32 = 36;
pub const FONT_SIZE_DIVISOR: u32 = 8;

/// Per-character width used when no font is available.
pub const FALLBACK_CHAR_WIDTH_PX: u32 = 20;
/// Line height used when no font is available.
pub const FALLBACK_TEXT_HEIGHT_PX: u32 = 30;

/// Offset of the drop shadow from the main text, in both axes.
pub const SHADOW_OFFSET_PX: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

impl TextExtent {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size estimate for the fontless path: a fixed cell per character.
    #[must_use]
    pub fn estimated(text: &str) -> Self {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        Self {
            width: chars.saturating_mul(FALLBACK_CHAR_WIDTH_PX),
            height: FALLBACK_TEXT_HEIGHT_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOrigin {
    pub x: i32,
    pub y: i32,
}

impl TextOrigin {
    #[must_use]
    pub fn shadow(self) -> Self {
        Self {
            x: self.x.saturating_add(SHADOW_OFFSET_PX),
            y: self.y.saturating_add(SHADOW_OFFSET_PX),
        }
    }
}

/// `max(36, min(width, height) / 8)`
#[must_use]
pub fn target_font_size(image_width: u32, image_height: u32) -> u32 {
    (image_width.min(image_height) / FONT_SIZE_DIVISOR).max(MIN_FONT_SIZE_PX)
}

/// Top-left corner that centers `extent` inside the image.
///
/// Uses floor division, so text wider than the image gets a negative origin
/// and is clipped on both sides.
#[must_use]
pub fn centered_origin(image_width: u32, image_height: u32, extent: TextExtent) -> TextOrigin {
    let center = |outer: u32, inner: u32| {
        let offset = (i64::from(outer) - i64::from(inner)).div_euclid(2);
        i32::try_from(offset).unwrap_or(if offset < 0 { i32::MIN } else { i32::MAX })
    };

    TextOrigin {
        x: center(image_width, extent.width),
        y: center(image_height, extent.height),
    }
}
