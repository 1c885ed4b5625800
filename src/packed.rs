use alloc::vec::Vec;

use crate::convert::pack::{self, BinaryPacker};
use crate::pixel::{Color, PixelFormat};

/// Format-packed image buffer, sized exactly for `(width, height, format)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedImage {
    data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl PackedImage {
    pub(crate) fn new(data: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> Self {
        debug_assert_eq!(
            Some(data.len()),
            format.buffer_len(width as usize, height as usize)
        );
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /// Access the packed bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the packed bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per packed row.
    pub fn stride(&self) -> usize {
        // Fits: the buffer of stride * height bytes already exists.
        self.format.stride(self.width as usize).unwrap_or(0)
    }

    fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Color of the pixel at `(x, y)`, `None` when out of bounds.
    ///
    /// Binary pixels read back as white (on) or black (off).
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(pack::unpack(self.format, self.row(y), x as usize))
    }

    /// Whether the binary pixel at `(x, y)` is set.
    ///
    /// `None` when out of bounds or when the image is not [`PixelFormat::Binary`].
    pub fn is_on(&self, x: u32, y: u32) -> Option<bool> {
        if self.format != PixelFormat::Binary || x >= self.width || y >= self.height {
            return None;
        }
        Some(BinaryPacker::bit(self.row(y), x as usize))
    }

    /// Iterate all pixels row by row as `(x, y, color)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        (0..self.height).flat_map(move |y| {
            let row = self.row(y);
            (0..self.width).map(move |x| (x, y, pack::unpack(self.format, row, x as usize)))
        })
    }

    /// Expand into an [`imgref::ImgVec`] of RGB colors.
    #[cfg(feature = "imgref")]
    pub fn to_rgb_imgvec(&self) -> imgref::ImgVec<Color> {
        let buf: Vec<Color> = self.pixels().map(|(_, _, c)| c).collect();
        imgref::ImgVec::new(buf, self.width as usize, self.height as usize)
    }
}
