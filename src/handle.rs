//! Load-once image handle.
//!
//! An [`ImageHandle`] is `Unloaded` until [`ImageHandle::ensure_loaded`]
//! fully succeeds, then `Loaded` until [`ImageHandle::invalidate`]. The
//! packed buffer is swapped only after a replacement has been produced, so a
//! failed reload never leaves a half-built buffer behind, and pixels are only
//! served while `Loaded`.

use enough::Unstoppable;

use crate::config::ImageConfig;
use crate::decoder::{BuiltinDecoder, Decoder};
use crate::display::DrawTarget;
use crate::error::ImageError;
use crate::load::load_and_convert;
use crate::packed::PackedImage;
use crate::pixel::{Color, PixelFormat};

/// An image in storage, decoded on first use and cached.
#[derive(Debug)]
pub struct ImageHandle<D = BuiltinDecoder> {
    config: ImageConfig,
    decoder: D,
    image: Option<PackedImage>,
    loaded: bool,
}

impl ImageHandle<BuiltinDecoder> {
    /// Handle using the built-in JPEG/PNG decoders.
    pub fn new(config: ImageConfig) -> Self {
        Self::with_decoder(config, BuiltinDecoder)
    }
}

impl<D: Decoder> ImageHandle<D> {
    pub fn with_decoder(config: ImageConfig, decoder: D) -> Self {
        Self {
            config,
            decoder,
            image: None,
            loaded: false,
        }
    }

    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn format(&self) -> PixelFormat {
        self.config.format
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Width of the last successful load, `0` if there was none.
    pub fn width(&self) -> u32 {
        self.image.as_ref().map_or(0, |img| img.width)
    }

    /// Height of the last successful load, `0` if there was none.
    pub fn height(&self) -> u32 {
        self.image.as_ref().map_or(0, |img| img.height)
    }

    /// The packed buffer, only while loaded.
    pub fn image(&self) -> Option<&PackedImage> {
        if self.loaded { self.image.as_ref() } else { None }
    }

    /// Decode and convert the image unless it is already loaded.
    pub fn ensure_loaded(&mut self) -> Result<(), ImageError> {
        if self.loaded {
            return Ok(());
        }

        log::info!("loading image from {}", self.config.path);
        let ignored = self.config.ignored_options();
        if !ignored.is_empty() {
            log::warn!("options {ignored:?} are accepted but have no effect");
        }

        match load_and_convert(&self.config, &self.decoder, Unstoppable) {
            Ok(image) => {
                log::info!(
                    "loaded {}x{} {} image from {}",
                    image.width,
                    image.height,
                    image.format,
                    self.config.path
                );
                self.image = Some(image);
                self.loaded = true;
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", self.config.path);
                Err(e)
            }
        }
    }

    /// Force the next [`ensure_loaded`](Self::ensure_loaded) to decode again.
    ///
    /// The current buffer is kept until a replacement succeeds but is no
    /// longer served.
    pub fn invalidate(&mut self) {
        self.loaded = false;
    }

    /// Color at `(x, y)`; `None` when not loaded or out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image()?.pixel(x, y)
    }

    /// Load if needed, then paint every pixel with its top-left at `(x, y)`.
    ///
    /// Binary images paint white for set bits and black otherwise. When the
    /// image cannot be loaded nothing is painted and the load error is
    /// returned.
    pub fn draw<T: DrawTarget + ?Sized>(
        &mut self,
        target: &mut T,
        x: i32,
        y: i32,
    ) -> Result<(), ImageError> {
        self.ensure_loaded()?;
        let image = self.image().ok_or(ImageError::NotLoaded)?;
        for (dx, dy, color) in image.pixels() {
            target.draw_pixel_at(offset(x, dx), offset(y, dy), color);
        }
        Ok(())
    }

    /// Like [`draw`](Self::draw), but binary images use `color_on` for set
    /// bits and `color_off` for clear ones. Other formats ignore both colors.
    pub fn draw_binary<T: DrawTarget + ?Sized>(
        &mut self,
        target: &mut T,
        x: i32,
        y: i32,
        color_on: Color,
        color_off: Color,
    ) -> Result<(), ImageError> {
        if self.format() != PixelFormat::Binary {
            return self.draw(target, x, y);
        }
        self.ensure_loaded()?;
        let image = self.image().ok_or(ImageError::NotLoaded)?;
        for dy in 0..image.height {
            for dx in 0..image.width {
                let color = if image.is_on(dx, dy) == Some(true) {
                    color_on
                } else {
                    color_off
                };
                target.draw_pixel_at(offset(x, dx), offset(y, dy), color);
            }
        }
        Ok(())
    }

    /// Dump the configuration and load state to the log.
    pub fn log_config(&self) {
        log::info!("SD image:");
        log::info!("  path: {}", self.config.path);
        log::info!("  type: {}", self.config.format);
        log::info!("  transparency: {}", self.config.transparency);
        log::info!("  dither: {}", self.config.dither);
        log::info!("  invert alpha: {}", yes_no(self.config.invert_alpha));
        log::info!("  big endian: {}", yes_no(self.config.big_endian));
        log::info!("  size: {}x{}", self.width(), self.height());
        log::info!("  loaded: {}", yes_no(self.loaded));
    }
}

fn offset(origin: i32, d: u32) -> i32 {
    origin.saturating_add(i32::try_from(d).unwrap_or(i32::MAX))
}

fn yes_no(b: bool) -> &'static str {
    if b { "YES" } else { "NO" }
}
