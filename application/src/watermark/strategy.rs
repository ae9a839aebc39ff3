use domain::{raster::Raster, watermark::TextStyle};
use tracing::info;

use crate::{error::AppResult, ports::outgoing::text_overlay::DynTextOverlayPort};

pub const ADDED_MESSAGE: &str = "Watermark added successfully";
pub const REMOVED_MESSAGE: &str = "Watermark removed successfully";

/// One way of transforming a decoded image for a watermark action.
pub trait WatermarkStrategy: Send + Sync {
    fn apply(&self, image: Raster, style: &TextStyle) -> AppResult<Raster>;

    fn success_message(&self) -> &'static str;
}

pub struct AddTextWatermark {
    overlay: DynTextOverlayPort,
}

impl AddTextWatermark {
    pub fn new(overlay: DynTextOverlayPort) -> Self {
        Self { overlay }
    }
}

impl WatermarkStrategy for AddTextWatermark {
    fn apply(&self, image: Raster, style: &TextStyle) -> AppResult<Raster> {
        info!(
            text_len = style.text.chars().count(),
            color = style.color.as_str(),
            opacity = style.opacity.percent(),
            "Adding text watermark"
        );
        self.overlay.overlay_text(image, style)
    }

    fn success_message(&self) -> &'static str {
        ADDED_MESSAGE
    }
}

/// Watermark removal is not implemented; the image is returned unmodified.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityRemoval;

impl WatermarkStrategy for IdentityRemoval {
    fn apply(&self, image: Raster, _style: &TextStyle) -> AppResult<Raster> {
        info!("Watermark removal requested; returning image unchanged");
        Ok(image)
    }

    fn success_message(&self) -> &'static str {
        REMOVED_MESSAGE
    }
}
