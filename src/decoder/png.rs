//! PNG backend on top of minipng.
//!
//! minipng only expands to RGBA8, so rasters from this backend carry four
//! channels; the engine drops alpha.

use alloc::format;

use crate::convert::zeroed;
use crate::error::ImageError;
use crate::raster::DecodedRaster;

/// Decode a PNG of any color type and bit depth to RGBA8888.
pub(crate) fn decode(data: &[u8]) -> Result<DecodedRaster<'static>, ImageError> {
    let header = minipng::decode_png_header(data)
        .map_err(|e| ImageError::DecodeFailure(format!("png header: {e:?}")))?;
    let width = header.width();
    let height = header.height();

    let mut scratch = zeroed(header.required_bytes_rgba8bpc())?;
    let mut image = minipng::decode_png(data, &mut scratch)
        .map_err(|e| ImageError::DecodeFailure(format!("png: {e:?}")))?;
    image
        .convert_to_rgba8bpc()
        .map_err(|e| ImageError::DecodeFailure(format!("png convert: {e:?}")))?;

    // The expanded pixels live somewhere inside the scratch buffer.
    let rgba = image.pixels();
    let mut pixels = zeroed(rgba.len())?;
    pixels.copy_from_slice(rgba);
    DecodedRaster::owned(pixels, width, height, 4)
}
