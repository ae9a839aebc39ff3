use std::fmt;

use crate::action::WatermarkAction;
use crate::color::HexColor;
use crate::opacity::Opacity;

pub const DEFAULT_WATERMARK_TEXT: &str = "Watermark";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub text: String,
    pub color: HexColor,
    pub opacity: Opacity,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text: DEFAULT_WATERMARK_TEXT.to_string(),
            color: HexColor::default(),
            opacity: Opacity::default(),
        }
    }
}

/// A validated request whose image payload has been base64-decoded but not
/// yet parsed as a raster.
#[derive(Clone, PartialEq, Eq)]
pub struct WatermarkRequest {
    pub action: WatermarkAction,
    pub image_bytes: Vec<u8>,
    pub style: TextStyle,
}

impl WatermarkRequest {
    #[must_use]
    pub fn new(action: WatermarkAction, image_bytes: Vec<u8>, style: TextStyle) -> Self {
        Self {
            action,
            image_bytes,
            style,
        }
    }
}

impl fmt::Debug for WatermarkRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatermarkRequest")
            .field("action", &self.action)
            .field("image_bytes", &self.image_bytes.len())
            .field("style", &self.style)
            .finish()
    }
}
