use std::fmt;

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    Rgb,
    Rgba,
}

impl PixelLayout {
    #[must_use]
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    #[must_use]
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }
}

/// Decoded 8-bit image owned by a single request.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, layout: PixelLayout, data: Vec<u8>) -> DomainResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(layout.channels()))
            .ok_or_else(|| {
                DomainError::InvalidRaster(format!("{width}x{height} image is too large"))
            })?;

        if data.len() != expected {
            return Err(DomainError::InvalidRaster(format!(
                "{width}x{height} {layout:?} image needs {expected} bytes, got {}",
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.layout.has_alpha()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Adds a fully opaque alpha channel if the image has none.
    #[must_use]
    pub fn into_rgba(self) -> Self {
        match self.layout {
            PixelLayout::Rgba => self,
            PixelLayout::Rgb => {
                let mut data = Vec::with_capacity(self.data.len() / 3 * 4);
                for pixel in self.data.chunks_exact(3) {
                    data.extend_from_slice(pixel);
                    data.push(u8::MAX);
                }
                Self {
                    width: self.width,
                    height: self.height,
                    layout: PixelLayout::Rgba,
                    data,
                }
            }
        }
    }

    /// Drops the alpha channel without compositing against a background.
    #[must_use]
    pub fn into_opaque(self) -> Self {
        match self.layout {
            PixelLayout::Rgb => self,
            PixelLayout::Rgba => {
                let mut data = Vec::with_capacity(self.data.len() / 4 * 3);
                for pixel in self.data.chunks_exact(4) {
                    data.extend(pixel.iter().take(3));
                }
                Self {
                    width: self.width,
                    height: self.height,
                    layout: PixelLayout::Rgb,
                    data,
                }
            }
        }
    }
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rgb_2x1() -> Raster {
        Raster::new(2, 1, PixelLayout::Rgb, vec![10, 20, 30, 40, 50, 60]).unwrap()
    }

    #[test]
    fn rejects_mismatched_buffer_length() {
        let err = Raster::new(2, 2, PixelLayout::Rgba, vec![0; 15]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRaster(_)));
    }

    #[test]
    fn into_rgba_adds_opaque_alpha() {
        let rgba = rgb_2x1().into_rgba();
        assert_eq!(rgba.layout(), PixelLayout::Rgba);
        assert_eq!(rgba.data(), &[10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn into_opaque_drops_alpha_without_blending() {
        let rgba = Raster::new(2, 1, PixelLayout::Rgba, vec![10, 20, 30, 0, 40, 50, 60, 128])
            .unwrap()
            .into_opaque();
        assert_eq!(rgba.layout(), PixelLayout::Rgb);
        assert_eq!(rgba.data(), &[10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn conversions_are_noops_when_layout_already_matches() {
        assert_eq!(rgb_2x1().into_opaque(), rgb_2x1());
        let rgba = rgb_2x1().into_rgba();
        assert_eq!(rgba.clone().into_rgba(), rgba);
    }

    #[test]
    fn zero_sized_images_are_valid() {
        let raster = Raster::new(0, 0, PixelLayout::Rgb, Vec::new()).unwrap();
        assert_eq!(raster.dimensions(), (0, 0));
    }
}
