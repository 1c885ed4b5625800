//! Conversion engine: nearest-neighbor resampling and format packing.
//!
//! For destination pixel `(x, y)` of a `tw x th` target over a `sw x sh`
//! source, the sampled source pixel is `(x * sw / tw, y * sh / th)` with
//! truncating integer division. Nothing is interpolated.

pub(crate) mod pack;

use alloc::vec::Vec;
use enough::{Stop, Unstoppable};

use self::pack::{BinaryPacker, GrayPacker, Packer, Rgb565Packer, RgbPacker};
use crate::error::ImageError;
use crate::limits::Limits;
use crate::packed::PackedImage;
use crate::pixel::PixelFormat;
use crate::raster::DecodedRaster;

/// Convert `src` to `format`, resampled to `target_width x target_height`.
///
/// A zero target dimension keeps the source's size on that axis.
pub fn convert(
    src: &DecodedRaster<'_>,
    target_width: u32,
    target_height: u32,
    format: PixelFormat,
) -> Result<PackedImage, ImageError> {
    ConvertRequest::new(src)
        .with_resize(target_width, target_height)
        .convert(format, Unstoppable)
}

type ResampleFn =
    fn(&DecodedRaster<'_>, &mut [u8], u32, u32, &dyn Stop) -> Result<(), ImageError>;

/// Builder for a single conversion.
#[derive(Clone, Debug)]
pub struct ConvertRequest<'r, 'a> {
    src: &'r DecodedRaster<'a>,
    resize_width: u32,
    resize_height: u32,
    limits: Option<&'r Limits>,
}

impl<'r, 'a> ConvertRequest<'r, 'a> {
    pub fn new(src: &'r DecodedRaster<'a>) -> Self {
        Self {
            src,
            resize_width: 0,
            resize_height: 0,
            limits: None,
        }
    }

    /// Requested output size; `0` on an axis means the source size.
    pub fn with_resize(mut self, width: u32, height: u32) -> Self {
        self.resize_width = width;
        self.resize_height = height;
        self
    }

    pub fn with_limits(mut self, limits: &'r Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Effective output dimensions.
    pub fn target_size(&self) -> (u32, u32) {
        target_size(
            self.src.width(),
            self.src.height(),
            self.resize_width,
            self.resize_height,
        )
    }

    /// Run the conversion, allocating exactly one destination buffer.
    pub fn convert(self, format: PixelFormat, stop: impl Stop) -> Result<PackedImage, ImageError> {
        let (width, height) = self.target_size();
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
        }
        let len = format
            .buffer_len(width as usize, height as usize)
            .ok_or(ImageError::DimensionsTooLarge { width, height })?;
        if let Some(limits) = self.limits {
            limits.check_memory(len)?;
        }
        stop.check()?;

        let mut data = zeroed(len)?;
        let pack: ResampleFn = match format {
            PixelFormat::Binary => resample::<BinaryPacker>,
            PixelFormat::Grayscale => resample::<GrayPacker>,
            PixelFormat::Rgb565 => resample::<Rgb565Packer>,
            PixelFormat::Rgb => resample::<RgbPacker>,
        };
        pack(self.src, &mut data, width, height, &stop)?;
        Ok(PackedImage::new(data, width, height, format))
    }
}

/// Effective target size: zero on an axis falls back to the source.
pub fn target_size(
    src_width: u32,
    src_height: u32,
    resize_width: u32,
    resize_height: u32,
) -> (u32, u32) {
    let w = if resize_width > 0 { resize_width } else { src_width };
    let h = if resize_height > 0 { resize_height } else { src_height };
    (w, h)
}

/// Nearest-neighbor source coordinate for destination `dst` on one axis.
///
/// # Panics
///
/// Panics if `dst_len` is zero.
#[inline]
pub fn source_coord(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    (u64::from(dst) * u64::from(src_len) / u64::from(dst_len)) as u32
}

/// Zero-filled buffer, failing instead of aborting when memory is short.
pub(crate) fn zeroed(len: usize) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ImageError::AllocationFailure { bytes: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

fn resample<P: Packer>(
    src: &DecodedRaster<'_>,
    dst: &mut [u8],
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    let stride = P::FORMAT
        .stride(width as usize)
        .ok_or(ImageError::DimensionsTooLarge { width, height })?;
    let channels = usize::from(src.channels());
    let mut src_x = Vec::new();
    src_x
        .try_reserve_exact(width as usize)
        .map_err(|_| ImageError::AllocationFailure {
            bytes: width as usize * core::mem::size_of::<usize>(),
        })?;
    src_x.extend((0..width).map(|x| source_coord(x, src.width(), width) as usize * channels));

    for (y, row) in dst.chunks_exact_mut(stride).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let src_row = src.row(source_coord(y as u32, src.height(), height) as usize);
        for (x, &off) in src_x.iter().enumerate() {
            P::pack(row, x, [src_row[off], src_row[off + 1], src_row[off + 2]]);
        }
    }
    Ok(())
}
