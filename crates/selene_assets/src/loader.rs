//! Pluggable frame loaders.
//!
//! Callers choose how a frame index becomes image data by passing any
//! [`ImageLoader`]: the bundled [`DirectoryLoader`], a closure, or their own
//! type.

use std::path::{Path, PathBuf};

use selene_phase::ImageIndex;
use tracing::debug;

use crate::error::AssetError;
use crate::table::{ImageFormat, frame_file_name, resolve_key};

/// Encoded bytes of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImage {
    pub index: ImageIndex,
    pub format: ImageFormat,
    /// Where the bytes came from, if they came from a file.
    pub path: Option<PathBuf>,
    pub bytes: Vec<u8>,
}

impl FrameImage {
    pub fn media_type(&self) -> &'static str {
        self.format.media_type()
    }
}

/// Turns a frame index into image data.
pub trait ImageLoader {
    fn load(&self, index: ImageIndex) -> Result<FrameImage, AssetError>;
}

impl<F> ImageLoader for F
where
    F: Fn(ImageIndex) -> Result<FrameImage, AssetError>,
{
    fn load(&self, index: ImageIndex) -> Result<FrameImage, AssetError> {
        self(index)
    }
}

/// Reads `moon-{n}.{ext}` files from one directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
    format: ImageFormat,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>, format: ImageFormat) -> Self {
        Self {
            root: root.into(),
            format,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Path the frame would be read from.
    pub fn path_for(&self, index: ImageIndex) -> PathBuf {
        self.root.join(frame_file_name(self.format, index))
    }
}

impl ImageLoader for DirectoryLoader {
    fn load(&self, index: ImageIndex) -> Result<FrameImage, AssetError> {
        let path = self.path_for(index);
        debug!(index = index.get(), path = %path.display(), "reading frame");
        let bytes = std::fs::read(&path).map_err(|e| AssetError::from_io(path.clone(), e))?;
        Ok(FrameImage {
            index,
            format: self.format,
            path: Some(path),
            bytes,
        })
    }
}

/// Load a frame by raw key, substituting frame 2 for keys outside 2..=28.
pub fn load_frame_for_key<L>(loader: &L, key: u32) -> Result<FrameImage, AssetError>
where
    L: ImageLoader + ?Sized,
{
    loader.load(resolve_key(key))
}
