//! Program image loading.
//!
//! An image is an ordered sequence of little-endian 32-bit words read
//! from a byte source and used verbatim as the read-only store's
//! contents. The whole file is taken as-is; a trailing partial word is
//! an error rather than being silently dropped.

use std::path::Path;

/// Errors that can occur when loading a program image.
#[derive(Debug)]
pub enum ImageLoadError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),

    /// The byte source does not divide into whole 32-bit words.
    TruncatedWord { len: usize },
}

impl std::fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TruncatedWord { len } => write!(
                f,
                "image is {len} bytes, not a whole number of 32-bit words"
            ),
        }
    }
}

impl std::error::Error for ImageLoadError {}

impl From<std::io::Error> for ImageLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Decode an image from raw bytes, little-endian word by word.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>, ImageLoadError> {
    if bytes.len() % 4 != 0 {
        return Err(ImageLoadError::TruncatedWord { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Read an image file from disk.
pub fn load_file(path: &Path) -> Result<Vec<u32>, ImageLoadError> {
    let bytes = std::fs::read(path)?;
    words_from_bytes(&bytes)
}
