use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid raster: {0}")]
    InvalidRaster(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
