use std::io;
use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{message}")]
    ValidationError { message: String },

    #[error("{message}")]
    DecodeError { message: String },

    #[error("Invalid opacity value: {message}")]
    InvalidOpacity { message: String },

    #[error("Codec error: {message}")]
    CodecError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Task error: {message}")]
    TaskError { message: String },

    #[error("Processing timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
