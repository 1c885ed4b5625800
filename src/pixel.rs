use core::fmt;
use core::str::FromStr;

use crate::error::ImageError;

/// Color handed to a display for one pixel.
pub type Color = rgb::RGB8;

/// Packed destination pixel format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum PixelFormat {
    /// 1 bit per pixel, MSB-first, rows padded to a whole byte.
    Binary,
    /// 8-bit gray, unweighted channel average.
    Grayscale,
    /// 16-bit `RRRRRGGGGGGBBBBB`, little-endian in memory.
    #[default]
    Rgb565,
    /// 3 bytes per pixel, R,G,B.
    Rgb,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 4] = [
        PixelFormat::Binary,
        PixelFormat::Grayscale,
        PixelFormat::Rgb565,
        PixelFormat::Rgb,
    ];

    /// Bits per packed pixel.
    pub fn bits_per_pixel(&self) -> usize {
        match self {
            Self::Binary => 1,
            Self::Grayscale => 8,
            Self::Rgb565 => 16,
            Self::Rgb => 24,
        }
    }

    /// Bytes per packed row for an image `width` pixels wide.
    pub fn stride(&self, width: usize) -> Option<usize> {
        match self {
            Self::Binary => Some(width.div_ceil(8)),
            _ => width.checked_mul(self.bits_per_pixel() / 8),
        }
    }

    /// Exact packed buffer size for `width x height`, `None` on overflow.
    pub fn buffer_len(&self, width: usize, height: usize) -> Option<usize> {
        self.stride(width)?.checked_mul(height)
    }

    /// Upper-case name used by the configuration surface.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Grayscale => "GRAYSCALE",
            Self::Rgb565 => "RGB565",
            Self::Rgb => "RGB",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ImageError::InvalidConfig(alloc::format!("unknown image type {s:?}")))
    }
}

/// Unweighted gray level: `(R + G + B) / 3`, truncating.
#[inline]
pub fn gray_level(r: u8, g: u8, b: u8) -> u8 {
    ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
}

/// Truncating 5-6-5 pack, red in the high bits.
#[inline]
pub fn rgb565_pack(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(b >> 3)
}

/// Expand a 5-6-5 value by shifting; low bits stay zero.
#[inline]
pub fn rgb565_unpack(v: u16) -> Color {
    Color {
        r: (((v >> 11) & 0x1F) << 3) as u8,
        g: (((v >> 5) & 0x3F) << 2) as u8,
        b: ((v & 0x1F) << 3) as u8,
    }
}
