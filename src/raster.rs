use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::ImageError;

/// Decoded source raster: row-major, interleaved R,G,B[,A] samples.
///
/// Construction validates the conversion preconditions (3 or 4 channels,
/// nonzero dimensions, enough samples), so a raster that exists is always
/// safe to convert. Pixels may be borrowed or owned.
#[derive(Clone, Debug)]
pub struct DecodedRaster<'a> {
    pixels: Cow<'a, [u8]>,
    width: u32,
    height: u32,
    channels: u8,
}

impl<'a> DecodedRaster<'a> {
    /// Wrap decoder output, rejecting rasters the engine cannot consume.
    pub fn new(
        pixels: impl Into<Cow<'a, [u8]>>,
        width: u32,
        height: u32,
        channels: u8,
    ) -> Result<Self, ImageError> {
        let pixels = pixels.into();
        if !matches!(channels, 3 | 4) {
            return Err(ImageError::InvalidRaster(alloc::format!(
                "expected 3 or 4 channels, got {channels}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidRaster(alloc::format!(
                "zero-sized raster {width}x{height}"
            )));
        }
        let needed = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(usize::from(channels)))
            .ok_or(ImageError::DimensionsTooLarge { width, height })?;
        if pixels.len() < needed {
            return Err(ImageError::InvalidRaster(alloc::format!(
                "need {needed} bytes for {width}x{height}x{channels}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
            channels,
        })
    }

    /// Convenience for owned decoder output.
    pub fn owned(pixels: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self, ImageError> {
        Self::new(pixels, width, height, channels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 3 for RGB888, 4 for RGBA8888.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Access the sample data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the sample data (copies if borrowed).
    pub fn into_owned(self) -> DecodedRaster<'static> {
        DecodedRaster {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Whether the sample data is borrowed.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// One source row of `width * channels` samples.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let len = self.width as usize * usize::from(self.channels);
        &self.pixels[y * len..(y + 1) * len]
    }
}
