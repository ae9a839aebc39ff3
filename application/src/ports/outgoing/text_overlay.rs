use crate::error::AppResult;
use domain::{raster::Raster, watermark::TextStyle};
use std::fmt;
use std::sync::Arc;

/// Which step of the font fallback chain an overlay renders with.
#[derive(Debug, Clone, PartialEq)]
pub enum FontTier {
    Scalable { source: String },
    Default { source: String, px: f32 },
    Bitmap,
}

impl fmt::Display for FontTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalable { source } => write!(f, "scalable font {source}"),
            Self::Default { source, px } => write!(f, "default font {source} at {px}px"),
            Self::Bitmap => f.write_str("built-in bitmap glyphs"),
        }
    }
}

pub trait TextOverlayPort: Send + Sync {
    /// Draws `style` centered on `image` and returns the composited RGBA result.
    fn overlay_text(&self, image: Raster, style: &TextStyle) -> AppResult<Raster>;

    fn font_tier(&self) -> FontTier;
}

pub type DynTextOverlayPort = Arc<dyn TextOverlayPort>;
