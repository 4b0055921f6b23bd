//! Fixed tables mapping each frame index to its file name.
//!
//! There is one table per image format. Frame `n` lives in slot `n - 2`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use selene_phase::ImageIndex;
use tracing::warn;

use crate::error::AssetError;

/// Encoding of the pre-rendered frame files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    /// File extension without the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }

    /// IANA media type.
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }

    const fn table(self) -> &'static [&'static str; ImageIndex::COUNT] {
        match self {
            Self::Jpeg => &JPEG_FRAMES,
            Self::Png => &PNG_FRAMES,
            Self::Webp => &WEBP_FRAMES,
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
        };
        f.write_str(name)
    }
}

impl FromStr for ImageFormat {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::Webp),
            _ => Err(AssetError::UnknownFormat(s.to_string())),
        }
    }
}

const JPEG_FRAMES: [&str; ImageIndex::COUNT] = [
    "moon-2.jpg",
    "moon-3.jpg",
    "moon-4.jpg",
    "moon-5.jpg",
    "moon-6.jpg",
    "moon-7.jpg",
    "moon-8.jpg",
    "moon-9.jpg",
    "moon-10.jpg",
    "moon-11.jpg",
    "moon-12.jpg",
    "moon-13.jpg",
    "moon-14.jpg",
    "moon-15.jpg",
    "moon-16.jpg",
    "moon-17.jpg",
    "moon-18.jpg",
    "moon-19.jpg",
    "moon-20.jpg",
    "moon-21.jpg",
    "moon-22.jpg",
    "moon-23.jpg",
    "moon-24.jpg",
    "moon-25.jpg",
    "moon-26.jpg",
    "moon-27.jpg",
    "moon-28.jpg",
];

const PNG_FRAMES: [&str; ImageIndex::COUNT] = [
    "moon-2.png",
    "moon-3.png",
    "moon-4.png",
    "moon-5.png",
    "moon-6.png",
    "moon-7.png",
    "moon-8.png",
    "moon-9.png",
    "moon-10.png",
    "moon-11.png",
    "moon-12.png",
    "moon-13.png",
    "moon-14.png",
    "moon-15.png",
    "moon-16.png",
    "moon-17.png",
    "moon-18.png",
    "moon-19.png",
    "moon-20.png",
    "moon-21.png",
    "moon-22.png",
    "moon-23.png",
    "moon-24.png",
    "moon-25.png",
    "moon-26.png",
    "moon-27.png",
    "moon-28.png",
];

const WEBP_FRAMES: [&str; ImageIndex::COUNT] = [
    "moon-2.webp",
    "moon-3.webp",
    "moon-4.webp",
    "moon-5.webp",
    "moon-6.webp",
    "moon-7.webp",
    "moon-8.webp",
    "moon-9.webp",
    "moon-10.webp",
    "moon-11.webp",
    "moon-12.webp",
    "moon-13.webp",
    "moon-14.webp",
    "moon-15.webp",
    "moon-16.webp",
    "moon-17.webp",
    "moon-18.webp",
    "moon-19.webp",
    "moon-20.webp",
    "moon-21.webp",
    "moon-22.webp",
    "moon-23.webp",
    "moon-24.webp",
    "moon-25.webp",
    "moon-26.webp",
    "moon-27.webp",
    "moon-28.webp",
];

/// File name of a validated frame.
pub fn frame_file_name(format: ImageFormat, index: ImageIndex) -> &'static str {
    format.table()[index.slot()]
}

/// Resolve a raw table key to a frame, falling back to the new-moon frame
/// (2) for keys outside 2..=28.
pub fn resolve_key(key: u32) -> ImageIndex {
    ImageIndex::new(key).unwrap_or_else(|| {
        warn!(key, fallback = ImageIndex::NEW_MOON.get(), "frame key out of range");
        ImageIndex::NEW_MOON
    })
}

/// File name for a raw table key, with the same fallback as [`resolve_key`].
pub fn frame_file_name_for_key(format: ImageFormat, key: u32) -> &'static str {
    frame_file_name(format, resolve_key(key))
}
