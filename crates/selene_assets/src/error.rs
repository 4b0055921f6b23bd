//! Error types for frame asset loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors from locating or reading a frame image.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AssetError {
    /// The frame file does not exist.
    Missing(PathBuf),
    /// Reading the frame file failed.
    Io { path: PathBuf, message: String },
    /// Image format name not recognised.
    UnknownFormat(String),
}

impl Display for AssetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "frame image not found: {}", path.display()),
            Self::Io { path, message } => {
                write!(f, "failed to read {}: {message}", path.display())
            }
            Self::UnknownFormat(name) => {
                write!(f, "unknown image format {name:?} (expected jpeg, png or webp)")
            }
        }
    }
}

impl Error for AssetError {}

impl AssetError {
    pub(crate) fn from_io(path: PathBuf, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            Self::Missing(path)
        } else {
            Self::Io {
                path,
                message: e.to_string(),
            }
        }
    }
}
