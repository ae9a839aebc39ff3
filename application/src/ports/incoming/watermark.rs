use crate::{
    error::AppResult,
    watermark::request::{ProcessImageCommand, ProcessedImage},
};

#[async_trait::async_trait]
pub trait ProcessImageUseCase: Send + Sync {
    async fn process_image(&self, command: ProcessImageCommand) -> AppResult<ProcessedImage>;
}
