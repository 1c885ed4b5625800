//! Decoder adapters: compressed bytes in, RGB(A) raster out.
//!
//! The built-in adapter wraps [zune-jpeg](https://github.com/etemesi254/zune-image)
//! for JPEG and [minipng](https://github.com/pommicket/minipng) for PNG. Each
//! backend sits behind its own cargo feature; a compiled-out backend reports
//! [`ImageError::DecodeFailure`].

#[cfg(feature = "jpeg")]
mod jpeg;
#[cfg(feature = "png")]
mod png;

use crate::error::ImageError;
use crate::raster::DecodedRaster;
use crate::source::SourceFormat;

/// Turns a compressed image into a decoded raster.
///
/// Implementations return owned pixels with 3 (RGB888, preferred) or
/// 4 (RGBA8888) channels. The compressed input is only borrowed.
pub trait Decoder {
    fn decode(
        &self,
        format: SourceFormat,
        data: &[u8],
    ) -> Result<DecodedRaster<'static>, ImageError>;
}

impl<D: Decoder + ?Sized> Decoder for &D {
    fn decode(
        &self,
        format: SourceFormat,
        data: &[u8],
    ) -> Result<DecodedRaster<'static>, ImageError> {
        (**self).decode(format, data)
    }
}

/// Decoder backed by the crates enabled through the `jpeg` and `png` features.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinDecoder;

impl Decoder for BuiltinDecoder {
    fn decode(
        &self,
        format: SourceFormat,
        data: &[u8],
    ) -> Result<DecodedRaster<'static>, ImageError> {
        match format {
            #[cfg(feature = "jpeg")]
            SourceFormat::Jpeg => jpeg::decode(data),
            #[cfg(not(feature = "jpeg"))]
            SourceFormat::Jpeg => Err(ImageError::DecodeFailure(
                "JPEG decoding requires the `jpeg` feature".into(),
            )),
            #[cfg(feature = "png")]
            SourceFormat::Png => png::decode(data),
            #[cfg(not(feature = "png"))]
            SourceFormat::Png => Err(ImageError::DecodeFailure(
                "PNG decoding requires the `png` feature".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_a_decode_failure() {
        let data = [0x00u8, 0x01, 0x02, 0x03, 0x04];
        for format in [SourceFormat::Jpeg, SourceFormat::Png] {
            match BuiltinDecoder.decode(format, &data) {
                Err(ImageError::DecodeFailure(_)) => {}
                other => panic!("expected DecodeFailure for {format:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_input_is_a_decode_failure() {
        for format in [SourceFormat::Jpeg, SourceFormat::Png] {
            assert!(matches!(
                BuiltinDecoder.decode(format, &[]),
                Err(ImageError::DecodeFailure(_))
            ));
        }
    }
}
