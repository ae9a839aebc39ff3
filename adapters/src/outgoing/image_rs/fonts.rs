use ab_glyph::FontVec;
use std::{fmt, fs, path::Path};
use tracing::{debug, info, instrument, warn};
use watermark_application::{
    error::{AppError, AppResult},
    infrastructure_config::FontConfig,
    ports::outgoing::text_overlay::FontTier,
};

/// The font an overlay renders with, resolved once at startup.
pub enum FontChoice {
    /// Sized from the image dimensions.
    Scalable { font: FontVec, source: String },
    /// Fixed pixel size regardless of image dimensions.
    Default {
        font: FontVec,
        source: String,
        px: f32,
    },
    /// Built-in 5x7 glyphs, no shadow.
    Bitmap,
}

impl fmt::Debug for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FontChoice").field(&self.tier()).finish()
    }
}

impl FontChoice {
    pub fn tier(&self) -> FontTier {
        match self {
            Self::Scalable { source, .. } => FontTier::Scalable {
                source: source.clone(),
            },
            Self::Default { source, px, .. } => FontTier::Default {
                source: source.clone(),
                px: *px,
            },
            Self::Bitmap => FontTier::Bitmap,
        }
    }
}

pub fn read_font(path: &Path) -> AppResult<FontVec> {
    let bytes = fs::read(path)?;
    FontVec::try_from_vec(bytes).map_err(|e| AppError::CodecError {
        message: format!("{} is not a usable font: {e}", path.display()),
    })
}

fn first_loadable(paths: &[String]) -> Option<(FontVec, String)> {
    paths.iter().find_map(|path| match read_font(Path::new(path)) {
        Ok(font) => Some((font, path.clone())),
        Err(AppError::IoError(e)) => {
            debug!(path = %path, error = %e, "Font not available");
            None
        }
        Err(e) => {
            warn!(path = %path, error = %e, "Skipping unreadable font");
            None
        }
    })
}

/// Walks the configured fallback chain: scalable fonts, then fixed-size
/// default fonts, then the bitmap glyphs.
#[instrument(skip_all)]
pub fn resolve_font(config: &FontConfig) -> FontChoice {
    if !config.enabled {
        info!("Font loading disabled; using built-in bitmap glyphs");
        return FontChoice::Bitmap;
    }

    let choice = if let Some((font, source)) = first_loadable(&config.scalable_font_paths) {
        FontChoice::Scalable { font, source }
    } else if let Some((font, source)) = first_loadable(&config.default_font_paths) {
        FontChoice::Default {
            font,
            source,
            px: config.default_font_px,
        }
    } else {
        warn!("No configured font could be loaded; falling back to bitmap glyphs");
        FontChoice::Bitmap
    };

    info!(tier = %choice.tier(), "Watermark font resolved");
    choice
}
