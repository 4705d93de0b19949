//! Crate-level error types.

use std::fmt;

/// Errors produced by the vitrine crate.
#[derive(Debug)]
pub enum GalleryError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// The model manifest could not be parsed (bad JSON or not an array).
    ManifestParse(String),
    /// The manifest parsed but contained no usable models.
    EmptyManifest,
    /// The model info file could not be parsed.
    InfoParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ManifestParse(msg) => {
                write!(f, "manifest parse error: {msg}")
            }
            Self::EmptyManifest => write!(f, "manifest contains no models"),
            Self::InfoParse(msg) => write!(f, "model info parse error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
