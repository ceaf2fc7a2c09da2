//! Validated image files handed to the canvas stage.

use std::fmt;

use image::ImageFormat;

/// Allowed file extensions for image selections, paired with the MIME
/// type used when the content itself cannot be sniffed.
const ALLOWED_EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
];

/// Value for the `accept` attribute of a file input.
pub const ACCEPT_ATTRIBUTE: &str = ".png,.jpg,.jpeg,.bmp,.webp,.gif";

/// Errors that can occur when validating a selected file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileError {
    /// The file contained no bytes.
    #[error("file is empty")]
    Empty,

    /// The filename does not carry an allowed image extension.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
}

/// Check whether a filename has an allowed image extension.
///
/// Lets callers reject a selection before reading its contents.
#[must_use]
pub fn has_allowed_extension(name: &str) -> bool {
    extension_mime(name).is_some()
}

/// Look up the fallback MIME type for a filename's extension.
fn extension_mime(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    ALLOWED_EXTENSIONS
        .iter()
        .find(|(allowed, _)| allowed.eq_ignore_ascii_case(ext))
        .map(|&(_, mime)| mime)
}

/// A local image file picked by the user.
///
/// Only constructible through [`SelectedFile::new`], so holders can
/// rely on the name having an allowed extension and the bytes being
/// non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Validate a picked file.
    ///
    /// The MIME type is taken from the content when it is a recognized
    /// image format, otherwise from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::UnsupportedType`] if the extension is not one
    /// of PNG, JPEG, BMP, WebP, or GIF.
    /// Returns [`FileError::Empty`] if `bytes` is empty.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, FileError> {
        let name = name.into();
        let Some(fallback) = extension_mime(&name) else {
            return Err(FileError::UnsupportedType(name));
        };
        if bytes.is_empty() {
            return Err(FileError::Empty);
        }
        let mime = image::guess_format(&bytes).map_or(fallback, |format| mime_for(format, fallback));
        Ok(Self { name, mime, bytes })
    }

    /// Original filename, including extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// MIME type for the blob backing the preview.
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// Raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// File size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; empty files are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Bytes are elided so logging a selection does not dump the image.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn mime_for(format: ImageFormat, fallback: &'static str) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Gif => "image/gif",
        _ => fallback,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        for name in ["a.png", "b.JPG", "c.jpeg", "d.Bmp", "e.webp", "f.GIF"] {
            assert!(
                SelectedFile::new(name, vec![1, 2, 3]).is_ok(),
                "{name} should be accepted"
            );
        }
    }

    #[test]
    fn rejects_unknown_or_missing_extension() {
        assert_eq!(
            SelectedFile::new("notes.txt", vec![1]),
            Err(FileError::UnsupportedType("notes.txt".into()))
        );
        assert_eq!(
            SelectedFile::new("png", vec![1]),
            Err(FileError::UnsupportedType("png".into()))
        );
    }

    #[test]
    fn extension_check_matches_constructor() {
        assert!(has_allowed_extension("holiday.final.JPEG"));
        assert!(!has_allowed_extension("archive.png.zip"));
        assert!(!has_allowed_extension("README"));
    }

    #[test]
    fn rejects_empty_file() {
        assert_eq!(SelectedFile::new("a.png", Vec::new()), Err(FileError::Empty));
    }

    #[test]
    fn mime_is_sniffed_from_content() {
        // PNG bytes behind a .jpg name: the content wins.
        let file = SelectedFile::new("mislabelled.jpg", PNG_MAGIC.to_vec()).unwrap();
        assert_eq!(file.mime(), "image/png");
    }

    #[test]
    fn mime_falls_back_to_extension() {
        let file = SelectedFile::new("photo.webp", vec![0, 1, 2, 3]).unwrap();
        assert_eq!(file.mime(), "image/webp");
    }

    #[test]
    fn debug_omits_bytes() {
        let file = SelectedFile::new("a.png", vec![42; 64]).unwrap();
        let dbg = format!("{file:?}");
        assert!(dbg.contains("len: 64"), "{dbg}");
        assert!(!dbg.contains("42, 42"), "{dbg}");
    }
}
