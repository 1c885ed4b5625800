//! Storage-to-packed-buffer pipeline.
//!
//! [`load_and_convert`] is pure apart from reading the file: it never logs
//! and never touches caller state. Every intermediate buffer is owned by a
//! local and released on return, on success and on every error path.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use enough::Stop;

use crate::config::ImageConfig;
use crate::convert::{ConvertRequest, zeroed};
use crate::decoder::Decoder;
use crate::error::ImageError;
use crate::packed::PackedImage;
use crate::source::SourceFormat;

/// Read, decode and convert the image described by `config`.
pub fn load_and_convert<D: Decoder + ?Sized>(
    config: &ImageConfig,
    decoder: &D,
    stop: impl Stop,
) -> Result<PackedImage, ImageError> {
    config.validate()?;
    let path = Path::new(&config.path);
    if !path.is_file() {
        return Err(ImageError::FileNotFound(config.path.clone()));
    }
    let format = SourceFormat::from_path(&config.path)?;
    stop.check()?;

    let compressed = read_source(path, config)?;
    stop.check()?;
    let raster = decoder.decode(format, &compressed)?;
    drop(compressed);

    ConvertRequest::new(&raster)
        .with_resize(config.resize_width, config.resize_height)
        .with_limits(&config.limits)
        .convert(config.format, stop)
}

fn read_source(path: &Path, config: &ImageConfig) -> Result<Vec<u8>, ImageError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ImageError::FileNotFound(config.path.clone()),
        _ => ImageError::Io(e),
    })?;
    let len = file.metadata()?.len();
    config.limits.check_input(len)?;
    let len = usize::try_from(len).map_err(|_| ImageError::AllocationFailure {
        bytes: usize::MAX,
    })?;

    let mut buf = zeroed(len)?;
    file.read_exact(&mut buf)?;
    Ok(buf)
}
