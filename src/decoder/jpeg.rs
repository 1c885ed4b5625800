//! JPEG backend on top of zune-jpeg.

use alloc::format;

use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use crate::error::ImageError;
use crate::raster::DecodedRaster;

/// Decode a baseline or progressive JPEG to RGB888.
pub(crate) fn decode(data: &[u8]) -> Result<DecodedRaster<'static>, ImageError> {
    let options = DecoderOptions::default().jpeg_set_out_colorspace(ColorSpace::RGB);
    let mut decoder = JpegDecoder::new_with_options(ZCursor::new(data), options);

    decoder
        .decode_headers()
        .map_err(|e| ImageError::DecodeFailure(format!("jpeg header: {e:?}")))?;
    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| ImageError::DecodeFailure("jpeg: missing dimensions".into()))?;
    let pixels = decoder
        .decode()
        .map_err(|e| ImageError::DecodeFailure(format!("jpeg: {e:?}")))?;

    let width = u32::try_from(width)
        .map_err(|_| ImageError::DecodeFailure(format!("jpeg: width {width} out of range")))?;
    let height = u32::try_from(height)
        .map_err(|_| ImageError::DecodeFailure(format!("jpeg: height {height} out of range")))?;
    DecodedRaster::owned(pixels, width, height, 3)
}
