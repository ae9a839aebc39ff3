use std::fmt;

use crate::{error::AppResult, watermark::request::ProcessedImage};

#[derive(Debug)]
pub struct BlockingTaskError {
    pub message: String,
}

impl fmt::Display for BlockingTaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// CPU-bound image work handed to a blocking pool.
pub type BlockingJob = Box<dyn FnOnce() -> AppResult<ProcessedImage> + Send + 'static>;
