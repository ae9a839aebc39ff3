use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use super::blocking_task::{BlockingJob, BlockingTaskError};
use crate::{error::AppResult, watermark::request::ProcessedImage};

#[derive(Debug)]
pub enum TimeoutError {
    Elapsed(Duration),
    Task(BlockingTaskError),
}

pub type TimedJobFuture =
    Pin<Box<dyn Future<Output = Result<AppResult<ProcessedImage>, TimeoutError>> + Send + 'static>>;

pub trait ProcessingTimeoutPort: Send + Sync {
    fn run_with_timeout(&self, job: BlockingJob, duration: Duration) -> TimedJobFuture;
}

pub type DynProcessingTimeoutPort = Arc<dyn ProcessingTimeoutPort>;
