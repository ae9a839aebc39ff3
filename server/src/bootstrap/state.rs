use std::sync::Arc;

use watermark_adapters::outgoing::{
    image_rs::{png_codec_image::ImagePngAdapter, text_overlay_image::ImageTextOverlayAdapter},
    tokio_spawn::processing_timeout_tokio::TokioProcessingTimeoutAdapter,
};
use watermark_adapters::shared::app_state::AppState as AdaptersAppState;
use watermark_application::infrastructure_config::Config;
use watermark_application::ports::outgoing::{
    image_codec::ImageCodecPort,
    text_overlay::{FontTier, TextOverlayPort},
    timeout::ProcessingTimeoutPort,
};
use watermark_application::watermark::service::{WatermarkService, WatermarkServiceDeps};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub watermark_service: Arc<WatermarkService>,
    font_tier: FontTier,
}

impl AppState {
    /// Wires the adapters. Fonts are read from disk here, once.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let text_overlay = ImageTextOverlayAdapter::from_config(&config.fonts);
        let font_tier = text_overlay.font_tier();
        let watermark_service = Self::create_watermark_service(&config, text_overlay);

        Self {
            config,
            watermark_service,
            font_tier,
        }
    }

    fn create_watermark_service(
        config: &Config,
        text_overlay: ImageTextOverlayAdapter,
    ) -> Arc<WatermarkService> {
        let codec_port: Arc<dyn ImageCodecPort> = Arc::new(ImagePngAdapter::new());
        let text_overlay_port: Arc<dyn TextOverlayPort> = Arc::new(text_overlay);
        let timeout_port: Arc<dyn ProcessingTimeoutPort> =
            Arc::new(TokioProcessingTimeoutAdapter::new());

        WatermarkService::new(
            config.processing_settings(),
            WatermarkServiceDeps {
                codec_port,
                text_overlay_port,
                timeout_port,
            },
        )
    }

    pub fn font_tier(&self) -> &FontTier {
        &self.font_tier
    }

    pub fn to_adapters_state(&self) -> AdaptersAppState {
        AdaptersAppState::new(
            Arc::clone(&self.config),
            Arc::clone(&self.watermark_service) as _,
        )
    }
}
