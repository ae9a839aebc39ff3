use domain::raster::{PixelLayout, Raster};
use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;
use tracing::{debug, instrument};
use watermark_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_codec::ImageCodecPort,
};

/// Decodes any format the `image` crate was built with and always encodes PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImagePngAdapter;

impl ImagePngAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodecPort for ImagePngAdapter {
    #[instrument(skip(self, image_bytes), fields(len = image_bytes.len()))]
    fn decode(&self, image_bytes: &[u8]) -> AppResult<Raster> {
        let format = image::guess_format(image_bytes).ok();
        let img = image::load_from_memory(image_bytes)
            .map_err(|e| AppError::decode(format!("Cannot identify image file: {e}")))?;

        let (width, height) = (img.width(), img.height());
        let has_alpha = img.color().has_alpha();
        debug!(?format, width, height, has_alpha, "Decoded image");

        let raster = if has_alpha {
            Raster::new(width, height, PixelLayout::Rgba, img.into_rgba8().into_raw())?
        } else {
            Raster::new(width, height, PixelLayout::Rgb, img.into_rgb8().into_raw())?
        };
        Ok(raster)
    }

    #[instrument(skip(self, raster), fields(width = raster.width(), height = raster.height()))]
    fn encode_png(&self, raster: &Raster) -> AppResult<Vec<u8>> {
        let (width, height) = raster.dimensions();
        let data = raster.data().to_vec();

        let img = match raster.layout() {
            PixelLayout::Rgb => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
            PixelLayout::Rgba => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        }
        .ok_or_else(|| AppError::CodecError {
            message: "Failed to create image buffer from raster data".to_string(),
        })?;

        let mut png_bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| AppError::CodecError {
                message: format!("Failed to encode PNG: {e}"),
            })?;

        if png_bytes.is_empty() {
            return Err(AppError::CodecError {
                message: "PNG encoding produced empty output".to_string(),
            });
        }

        debug!("Encoded PNG: {} bytes", png_bytes.len());
        Ok(png_bytes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};

    fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn decodes_opaque_png_as_rgb() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(4, 3, Rgb([10, 20, 30])));
        let raster = ImagePngAdapter.decode(&encode(&img, ImageFormat::Png)).unwrap();

        assert_eq!(raster.dimensions(), (4, 3));
        assert_eq!(raster.layout(), PixelLayout::Rgb);
        assert_eq!(raster.data().get(..3), Some(&[10, 20, 30][..]));
    }

    #[test]
    fn keeps_alpha_channel_when_present() {
        let img = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(2, 2, Rgba([1, 2, 3, 4])));
        let raster = ImagePngAdapter.decode(&encode(&img, ImageFormat::Png)).unwrap();

        assert_eq!(raster.layout(), PixelLayout::Rgba);
        assert_eq!(raster.data().get(..4), Some(&[1, 2, 3, 4][..]));
    }

    #[test]
    fn decodes_jpeg_by_sniffing() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(8, 8, Rgb([200, 200, 200])));
        let raster = ImagePngAdapter.decode(&encode(&img, ImageFormat::Jpeg)).unwrap();
        assert_eq!(raster.dimensions(), (8, 8));
    }

    #[test]
    fn rejects_unknown_bytes() {
        let err = ImagePngAdapter.decode(b"hello").unwrap_err();
        assert!(matches!(err, AppError::DecodeError { .. }));
    }

    #[test]
    fn encoded_png_round_trips_pixels() {
        let raster = Raster::new(2, 1, PixelLayout::Rgb, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let png = ImagePngAdapter.encode_png(&raster).unwrap();

        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        assert_eq!(ImagePngAdapter.decode(&png).unwrap(), raster);
    }
}
