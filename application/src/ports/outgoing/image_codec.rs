use crate::error::AppResult;
use domain::raster::Raster;
use std::sync::Arc;

pub trait ImageCodecPort: Send + Sync {
    /// Sniffs the container format from the bytes themselves.
    fn decode(&self, image_bytes: &[u8]) -> AppResult<Raster>;
    fn encode_png(&self, raster: &Raster) -> AppResult<Vec<u8>>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
