use crate::error::ImageError;

/// Compressed source format, picked by file extension.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// `.jpg` / `.jpeg`
    Jpeg,
    /// `.png`
    Png,
}

impl SourceFormat {
    /// Map an extension (without the dot), ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Some(Self::Jpeg)
        } else if ext.eq_ignore_ascii_case("png") {
            Some(Self::Png)
        } else {
            None
        }
    }

    /// Detect the format from the text after the last `.` in `path`.
    pub fn from_path(path: &str) -> Result<Self, ImageError> {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| {
            ImageError::UnsupportedFormat(alloc::format!(
                "{:?} (expected jpg, jpeg or png)",
                ext.to_ascii_lowercase()
            ))
        })
    }
}
