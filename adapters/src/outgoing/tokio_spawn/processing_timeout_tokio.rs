use std::time::Duration;
use tokio::{task::spawn_blocking, time::timeout};
use tracing::warn;

use watermark_application::ports::outgoing::{
    blocking_task::{BlockingJob, BlockingTaskError},
    timeout::{ProcessingTimeoutPort, TimedJobFuture, TimeoutError},
};

/// Runs image jobs on tokio's blocking pool under a deadline.
///
/// A job that misses the deadline keeps its blocking thread until it
/// finishes; only the caller stops waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessingTimeoutAdapter;

impl TokioProcessingTimeoutAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessingTimeoutPort for TokioProcessingTimeoutAdapter {
    fn run_with_timeout(&self, job: BlockingJob, duration: Duration) -> TimedJobFuture {
        Box::pin(async move {
            let task = spawn_blocking(job);

            match timeout(duration, task).await {
                Ok(Ok(result)) => Ok(result),
                Ok(Err(join_error)) => Err(TimeoutError::Task(BlockingTaskError {
                    message: join_error.to_string(),
                })),
                Err(_) => {
                    warn!("Blocking image job still running after {:?}", duration);
                    Err(TimeoutError::Elapsed(duration))
                }
            }
        })
    }
}
