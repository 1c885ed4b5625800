//! Per-format pixel packers.
//!
//! Each packer writes one resampled source pixel into a destination row and
//! reads it back as a display color. Rows are `PixelFormat::stride` bytes and
//! start zero-filled.

use crate::pixel::{Color, PixelFormat, gray_level, rgb565_pack, rgb565_unpack};

/// Gray level above which a binary pixel is on.
pub(crate) const BINARY_THRESHOLD: u8 = 128;

pub(crate) trait Packer {
    const FORMAT: PixelFormat;

    fn pack(row: &mut [u8], x: usize, rgb: [u8; 3]);

    fn unpack(row: &[u8], x: usize) -> Color;
}

pub(crate) struct BinaryPacker;

impl BinaryPacker {
    #[inline]
    pub(crate) fn bit(row: &[u8], x: usize) -> bool {
        row[x / 8] & (0x80 >> (x % 8)) != 0
    }
}

impl Packer for BinaryPacker {
    const FORMAT: PixelFormat = PixelFormat::Binary;

    #[inline]
    fn pack(row: &mut [u8], x: usize, [r, g, b]: [u8; 3]) {
        if gray_level(r, g, b) > BINARY_THRESHOLD {
            row[x / 8] |= 0x80 >> (x % 8);
        }
    }

    #[inline]
    fn unpack(row: &[u8], x: usize) -> Color {
        let v = if Self::bit(row, x) { 0xFF } else { 0 };
        Color::new(v, v, v)
    }
}

pub(crate) struct GrayPacker;

impl Packer for GrayPacker {
    const FORMAT: PixelFormat = PixelFormat::Grayscale;

    #[inline]
    fn pack(row: &mut [u8], x: usize, [r, g, b]: [u8; 3]) {
        row[x] = gray_level(r, g, b);
    }

    #[inline]
    fn unpack(row: &[u8], x: usize) -> Color {
        let g = row[x];
        Color::new(g, g, g)
    }
}

pub(crate) struct Rgb565Packer;

impl Packer for Rgb565Packer {
    const FORMAT: PixelFormat = PixelFormat::Rgb565;

    #[inline]
    fn pack(row: &mut [u8], x: usize, [r, g, b]: [u8; 3]) {
        row[x * 2..x * 2 + 2].copy_from_slice(&rgb565_pack(r, g, b).to_le_bytes());
    }

    #[inline]
    fn unpack(row: &[u8], x: usize) -> Color {
        rgb565_unpack(u16::from_le_bytes([row[x * 2], row[x * 2 + 1]]))
    }
}

pub(crate) struct RgbPacker;

impl Packer for RgbPacker {
    const FORMAT: PixelFormat = PixelFormat::Rgb;

    #[inline]
    fn pack(row: &mut [u8], x: usize, rgb: [u8; 3]) {
        row[x * 3..x * 3 + 3].copy_from_slice(&rgb);
    }

    #[inline]
    fn unpack(row: &[u8], x: usize) -> Color {
        Color::new(row[x * 3], row[x * 3 + 1], row[x * 3 + 2])
    }
}

/// Read one packed pixel back as a color, dispatching on format.
#[inline]
pub(crate) fn unpack(format: PixelFormat, row: &[u8], x: usize) -> Color {
    match format {
        PixelFormat::Binary => BinaryPacker::unpack(row, x),
        PixelFormat::Grayscale => GrayPacker::unpack(row, x),
        PixelFormat::Rgb565 => Rgb565Packer::unpack(row, x),
        PixelFormat::Rgb => RgbPacker::unpack(row, x),
    }
}
