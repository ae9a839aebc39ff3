use domain::{action::WatermarkAction, watermark::WatermarkRequest};
use tracing::{debug, info, instrument};

use super::{
    data_uri::encode_png_data_uri,
    request::ProcessedImage,
    strategy::{AddTextWatermark, IdentityRemoval, WatermarkStrategy},
};
use crate::{
    error::AppResult,
    ports::outgoing::{image_codec::DynImageCodecPort, text_overlay::DynTextOverlayPort},
};

/// Synchronous decode → transform → encode flow for one request.
///
/// Independent of any async runtime or HTTP layer.
pub struct WatermarkPipeline {
    codec: DynImageCodecPort,
    add: AddTextWatermark,
    remove: IdentityRemoval,
}

impl WatermarkPipeline {
    pub fn new(codec: DynImageCodecPort, overlay: DynTextOverlayPort) -> Self {
        Self {
            codec,
            add: AddTextWatermark::new(overlay),
            remove: IdentityRemoval,
        }
    }

    #[must_use]
    pub fn strategy_for(&self, action: WatermarkAction) -> &dyn WatermarkStrategy {
        match action {
            WatermarkAction::Add => &self.add,
            WatermarkAction::Remove => &self.remove,
        }
    }

    #[instrument(skip_all, fields(action = %request.action))]
    pub fn run(&self, request: WatermarkRequest) -> AppResult<ProcessedImage> {
        let image = self.codec.decode(&request.image_bytes)?;
        let (width, height) = image.dimensions();
        info!("Processing image: {}x{}", width, height);

        let strategy = self.strategy_for(request.action);
        let result = strategy.apply(image, &request.style)?.into_opaque();

        let png = self.codec.encode_png(&result)?;
        debug!("Encoded result: {} PNG bytes", png.len());

        Ok(ProcessedImage {
            data_uri: encode_png_data_uri(&png),
            width: result.width(),
            height: result.height(),
            message: strategy.success_message(),
        })
    }
}
