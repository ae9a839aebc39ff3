use std::sync::Arc;
use tracing::{error, info, instrument};

use super::{
    pipeline::WatermarkPipeline,
    request::{ProcessImageCommand, ProcessedImage, validate_command},
};
use crate::{
    config::ProcessingSettings,
    error::{AppError, AppResult},
    ports::{
        incoming::watermark::ProcessImageUseCase,
        outgoing::{
            blocking_task::BlockingJob,
            image_codec::DynImageCodecPort,
            text_overlay::DynTextOverlayPort,
            timeout::{DynProcessingTimeoutPort, TimeoutError},
        },
    },
};

pub struct WatermarkServiceDeps {
    pub codec_port: DynImageCodecPort,
    pub text_overlay_port: DynTextOverlayPort,
    pub timeout_port: DynProcessingTimeoutPort,
}

pub struct WatermarkService {
    settings: ProcessingSettings,
    pipeline: Arc<WatermarkPipeline>,
    timeout_port: DynProcessingTimeoutPort,
}

impl WatermarkService {
    pub fn new(settings: ProcessingSettings, deps: WatermarkServiceDeps) -> Arc<Self> {
        Arc::new(Self {
            settings,
            pipeline: Arc::new(WatermarkPipeline::new(
                deps.codec_port,
                deps.text_overlay_port,
            )),
            timeout_port: deps.timeout_port,
        })
    }
}

#[async_trait::async_trait]
impl ProcessImageUseCase for WatermarkService {
    #[instrument(skip_all)]
    async fn process_image(&self, command: ProcessImageCommand) -> AppResult<ProcessedImage> {
        info!("Received image processing request");

        let validated = validate_command(command)?;
        let pipeline = Arc::clone(&self.pipeline);
        let job: BlockingJob = Box::new(move || pipeline.run(validated.into_request()?));

        match self
            .timeout_port
            .run_with_timeout(job, self.settings.request_timeout)
            .await
        {
            Ok(result) => result,
            Err(TimeoutError::Elapsed(duration)) => {
                error!("Image processing exceeded {:?}", duration);
                Err(AppError::Timeout {
                    seconds: duration.as_secs(),
                })
            }
            Err(TimeoutError::Task(e)) => Err(AppError::TaskError { message: e.message }),
        }
    }
}
