//! # sdimage
//!
//! Load a JPEG or PNG from storage and turn it into a display-ready packed
//! buffer: 1-bit monochrome, 8-bit grayscale, RGB565 or RGB888, optionally
//! resized with nearest-neighbor sampling.
//!
//! ## Pieces
//!
//! - [`Decoder`] — compressed bytes to an RGB(A) [`DecodedRaster`]. The
//!   [`BuiltinDecoder`] uses zune-jpeg (`jpeg` feature) and minipng (`png`
//!   feature).
//! - [`convert`] / [`ConvertRequest`] — resample a raster to a target size and
//!   pack it into a [`PixelFormat`], producing an owned [`PackedImage`].
//! - [`ImageHandle`] (`std`) — owns an [`ImageConfig`], decodes once, caches
//!   the packed buffer and paints it onto a [`DrawTarget`].
//!
//! ## Packed layouts
//!
//! | Format | Bytes | Layout |
//! |---|---|---|
//! | `Binary` | `ceil(w/8) * h` | 1 bit/pixel, MSB first, on when gray > 128 |
//! | `Grayscale` | `w * h` | `(R + G + B) / 3` |
//! | `Rgb565` | `w * h * 2` | little-endian `RRRRRGGGGGGBBBBB` |
//! | `Rgb` | `w * h * 3` | R, G, B |
//!
//! ## Non-Goals
//!
//! - Filtered resampling (bilinear, bicubic)
//! - Dithering, alpha compositing, color management. The `dither`,
//!   `transparency`, `invert_alpha` and `big_endian` options are accepted
//!   for compatibility and reported by [`ImageConfig::ignored_options`].
//! - Streaming or progressive decode
//!
//! ## Usage
//!
//! ```no_run
//! # #[cfg(feature = "std")]
//! # {
//! use sdimage::{Color, DrawTarget, ImageConfig, ImageHandle, PixelFormat};
//!
//! struct Panel;
//! impl DrawTarget for Panel {
//!     fn draw_pixel_at(&mut self, _x: i32, _y: i32, _color: Color) {
//!         // push to the display controller
//!     }
//! }
//!
//! let config = ImageConfig::new("/sdcard/logo.png")
//!     .with_format(PixelFormat::Rgb565)
//!     .with_resize(128, 64);
//! let mut image = ImageHandle::new(config);
//! image.draw(&mut Panel, 0, 0)?;
//! # }
//! # Ok::<(), sdimage::ImageError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod config;
mod convert;
mod decoder;
mod display;
mod error;
mod limits;
mod packed;
mod pixel;
mod raster;
mod source;

#[cfg(feature = "std")]
mod handle;
#[cfg(feature = "std")]
mod load;

// Re-exports
pub use config::{Dither, ImageConfig, ImageOptions, Transparency};
pub use convert::{ConvertRequest, convert, source_coord, target_size};
pub use decoder::{BuiltinDecoder, Decoder};
pub use display::DrawTarget;
pub use enough::{Stop, Unstoppable};
pub use error::ImageError;
pub use limits::Limits;
pub use packed::PackedImage;
pub use pixel::{Color, PixelFormat, gray_level, rgb565_pack, rgb565_unpack};
pub use raster::DecodedRaster;
pub use source::SourceFormat;

#[cfg(feature = "std")]
pub use handle::ImageHandle;
#[cfg(feature = "std")]
pub use load::load_and_convert;
