//! Built-in decoder over real files in `tests/fixtures/`.

use sdimage::*;

const QUAD_PNG: &[u8] = include_bytes!("fixtures/quad.png");
const QUAD_RGBA_PNG: &[u8] = include_bytes!("fixtures/quad_rgba.png");
const QUAD_PALETTE_PNG: &[u8] = include_bytes!("fixtures/quad_palette.png");
/// 16x16 baseline YCbCr JPEG.
const PYTHON_JPG: &[u8] = include_bytes!("fixtures/python16.jpg");

/// 2x2 red, green / blue, white.
const QUAD: [u8; 12] = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];

fn decode(format: SourceFormat, data: &[u8]) -> DecodedRaster<'static> {
    BuiltinDecoder.decode(format, data).unwrap()
}

// ── PNG ──────────────────────────────────────────────────────────────

#[cfg(feature = "png")]
#[test]
fn png_rgb_expands_to_rgba() {
    let raster = decode(SourceFormat::Png, QUAD_PNG);
    assert_eq!((raster.width(), raster.height(), raster.channels()), (2, 2, 4));
    assert_eq!(
        raster.pixels(),
        &[255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255]
    );
    let out = convert(&raster, 0, 0, PixelFormat::Rgb).unwrap();
    assert_eq!(out.data(), &QUAD[..]);
}

#[cfg(feature = "png")]
#[test]
fn png_alpha_is_dropped() {
    let raster = decode(SourceFormat::Png, QUAD_RGBA_PNG);
    assert_eq!(raster.channels(), 4);
    assert_eq!(raster.pixels()[7], 64);
    let out = convert(&raster, 0, 0, PixelFormat::Rgb).unwrap();
    assert_eq!(out.data(), &QUAD[..]);
}

#[cfg(feature = "png")]
#[test]
fn png_palette_is_expanded() {
    let raster = decode(SourceFormat::Png, QUAD_PALETTE_PNG);
    let out = convert(&raster, 0, 0, PixelFormat::Rgb565).unwrap();
    let words: Vec<u16> = out
        .data()
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(words, [0xF800, 0x07E0, 0x001F, 0xFFFF]);
}

#[cfg(feature = "png")]
#[test]
fn truncated_png_is_a_decode_failure() {
    let cut = &QUAD_PNG[..QUAD_PNG.len() - 20];
    assert!(matches!(
        BuiltinDecoder.decode(SourceFormat::Png, cut),
        Err(ImageError::DecodeFailure(_))
    ));
}

// ── JPEG ─────────────────────────────────────────────────────────────

#[cfg(feature = "jpeg")]
#[test]
fn jpeg_decodes_to_rgb() {
    let raster = decode(SourceFormat::Jpeg, PYTHON_JPG);
    assert_eq!((raster.width(), raster.height(), raster.channels()), (16, 16, 3));
    assert_eq!(raster.pixels().len(), 16 * 16 * 3);

    let out = convert(&raster, 0, 0, PixelFormat::Rgb).unwrap();
    assert_eq!(out.data(), raster.pixels());
}

#[cfg(feature = "jpeg")]
#[test]
fn jpeg_downscales_to_rgb565() {
    let raster = decode(SourceFormat::Jpeg, PYTHON_JPG);
    let packed = convert(&raster, 8, 8, PixelFormat::Rgb565).unwrap();
    assert_eq!(packed.data().len(), 128);

    let rgb = convert(&raster, 8, 8, PixelFormat::Rgb).unwrap();
    for (x, y, c) in rgb.pixels() {
        let truncated = Color::new(c.r & 0xF8, c.g & 0xFC, c.b & 0xF8);
        assert_eq!(packed.pixel(x, y), Some(truncated), "({x},{y})");
    }
}

#[cfg(feature = "jpeg")]
#[test]
fn png_bytes_are_not_a_jpeg() {
    assert!(matches!(
        BuiltinDecoder.decode(SourceFormat::Jpeg, QUAD_PNG),
        Err(ImageError::DecodeFailure(_))
    ));
}

// ── Through the handle ───────────────────────────────────────────────

#[cfg(all(feature = "std", feature = "png", feature = "jpeg"))]
mod handle {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn handle_loads_real_png() {
        let config = ImageConfig::new(fixture("quad_rgba.png").to_string_lossy())
            .with_format(PixelFormat::Grayscale)
            .with_resize(4, 4);
        let mut handle = ImageHandle::new(config);
        handle.ensure_loaded().unwrap();
        assert!(handle.is_loaded());
        assert_eq!((handle.width(), handle.height()), (4, 4));
        let image = handle.image().unwrap();
        assert_eq!(image.data()[0], 85);
        assert_eq!(image.data()[15], 255);
    }

    #[test]
    fn handle_loads_real_jpeg() {
        let config = ImageConfig::new(fixture("python16.jpg").to_string_lossy())
            .with_format(PixelFormat::Binary);
        let mut handle = ImageHandle::new(config);
        handle.ensure_loaded().unwrap();
        assert_eq!((handle.width(), handle.height()), (16, 16));
        assert_eq!(handle.image().unwrap().data().len(), 2 * 16);
    }
}
