use std::sync::Arc;

use watermark_application::{
    infrastructure_config::Config, ports::incoming::watermark::ProcessImageUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub process_image_service: Arc<dyn ProcessImageUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        process_image_service: Arc<dyn ProcessImageUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            process_image_service,
        }
    }
}
