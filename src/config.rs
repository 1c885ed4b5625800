//! Image configuration.
//!
//! [`ImageConfig`] is what the loader consumes. [`ImageOptions`] mirrors the
//! declarative component schema (`path`, `type`, `width`/`height`, `resize`,
//! cosmetic options) and validates into an `ImageConfig`.
//!
//! `transparency`, `dither`, `invert_alpha` and `big_endian` are accepted and
//! reported but do not change conversion output. Use
//! [`ImageConfig::ignored_options`] to surface that.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::ImageError;
use crate::limits::Limits;
use crate::pixel::PixelFormat;

/// Transparency handling. Accepted for compatibility; has no effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Transparency {
    #[default]
    Opaque,
    ChromaKey,
    AlphaChannel,
}

/// Dithering mode. Accepted for compatibility; no dithering is performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dither {
    #[default]
    None,
    FloydSteinberg,
}

impl fmt::Display for Transparency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Opaque => "opaque",
            Self::ChromaKey => "chroma_key",
            Self::AlphaChannel => "alpha_channel",
        })
    }
}

impl fmt::Display for Dither {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::FloydSteinberg => "floyd_steinberg",
        })
    }
}

/// Load and conversion settings for one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageConfig {
    /// Path of the compressed image in storage.
    pub path: String,
    /// Packed output format. Defaults to [`PixelFormat::Rgb565`].
    pub format: PixelFormat,
    /// Output width; `0` keeps the decoded width.
    pub resize_width: u32,
    /// Output height; `0` keeps the decoded height.
    pub resize_height: u32,
    pub transparency: Transparency,
    pub dither: Dither,
    pub invert_alpha: bool,
    pub big_endian: bool,
    pub limits: Limits,
}

impl ImageConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: PixelFormat::default(),
            resize_width: 0,
            resize_height: 0,
            transparency: Transparency::default(),
            dither: Dither::default(),
            invert_alpha: false,
            big_endian: false,
            limits: Limits::default(),
        }
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Resize target; `0` on an axis keeps the decoded size on that axis.
    pub fn with_resize(mut self, width: u32, height: u32) -> Self {
        self.resize_width = width;
        self.resize_height = height;
        self
    }

    pub fn with_transparency(mut self, transparency: Transparency) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_dither(mut self, dither: Dither) -> Self {
        self.dither = dither;
        self
    }

    pub fn with_invert_alpha(mut self, invert: bool) -> Self {
        self.invert_alpha = invert;
        self
    }

    pub fn with_big_endian(mut self, big_endian: bool) -> Self {
        self.big_endian = big_endian;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Names of options set away from their defaults that have no effect.
    pub fn ignored_options(&self) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if self.transparency != Transparency::Opaque {
            ignored.push("transparency");
        }
        if self.dither != Dither::None {
            ignored.push("dither");
        }
        if self.invert_alpha {
            ignored.push("invert_alpha");
        }
        if self.big_endian {
            ignored.push("big_endian");
        }
        ignored
    }

    pub fn validate(&self) -> Result<(), ImageError> {
        if self.path.trim().is_empty() {
            return Err(ImageError::InvalidConfig("path is required".into()));
        }
        Ok(())
    }
}

/// Declarative image options, as written in a device configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ImageOptions {
    pub path: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub format: PixelFormat,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `[width, height]`; takes precedence over `width`/`height`.
    pub resize: Option<[u32; 2]>,
    pub transparency: Transparency,
    pub dither: Dither,
    pub invert_alpha: bool,
    pub big_endian: bool,
    pub limits: Limits,
}

impl ImageOptions {
    /// Effective resize target: `resize` wins, then `width` + `height` when
    /// both are given, otherwise native size.
    pub fn resize_target(&self) -> (u32, u32) {
        match (self.resize, self.width, self.height) {
            (Some([w, h]), _, _) => (w, h),
            (None, Some(w), Some(h)) => (w, h),
            _ => (0, 0),
        }
    }
}

impl TryFrom<ImageOptions> for ImageConfig {
    type Error = ImageError;

    fn try_from(options: ImageOptions) -> Result<Self, Self::Error> {
        let (w, h) = options.resize_target();
        let config = ImageConfig::new(options.path)
            .with_format(options.format)
            .with_resize(w, h)
            .with_transparency(options.transparency)
            .with_dither(options.dither)
            .with_invert_alpha(options.invert_alpha)
            .with_big_endian(options.big_endian)
            .with_limits(options.limits);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn defaults_match_component() {
        let config = ImageConfig::new("/sd/a.jpg");
        assert_eq!(config.format, PixelFormat::Rgb565);
        assert_eq!((config.resize_width, config.resize_height), (0, 0));
        assert!(config.ignored_options().is_empty());
    }

    #[test]
    fn resize_beats_width_height() {
        let options = ImageOptions {
            path: "/sd/a.png".into(),
            width: Some(10),
            height: Some(20),
            resize: Some([64, 32]),
            ..Default::default()
        };
        assert_eq!(options.resize_target(), (64, 32));

        let options = ImageOptions {
            resize: None,
            ..options
        };
        assert_eq!(options.resize_target(), (10, 20));
    }

    #[test]
    fn width_alone_is_ignored() {
        let options = ImageOptions {
            path: "/sd/a.png".into(),
            width: Some(10),
            ..Default::default()
        };
        assert_eq!(options.resize_target(), (0, 0));
    }

    #[test]
    fn empty_path_is_rejected() {
        let options = ImageOptions::default();
        assert!(matches!(
            ImageConfig::try_from(options),
            Err(ImageError::InvalidConfig(_))
        ));
    }

    #[test]
    fn no_op_options_are_reported() {
        let config = ImageConfig::new("/sd/a.png")
            .with_dither(Dither::FloydSteinberg)
            .with_big_endian(true);
        assert_eq!(config.ignored_options(), vec!["dither", "big_endian"]);
    }

    #[test]
    fn pixel_format_parses_any_case() {
        assert_eq!("rgb565".parse::<PixelFormat>().unwrap(), PixelFormat::Rgb565);
        assert_eq!("BINARY".parse::<PixelFormat>().unwrap(), PixelFormat::Binary);
        assert_eq!("Grayscale".parse::<PixelFormat>().unwrap(), PixelFormat::Grayscale);
        assert!("rgba".parse::<PixelFormat>().is_err());
    }
}
