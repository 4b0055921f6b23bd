//! Frame asset lookup for the 27 pre-rendered moon images.
//!
//! This crate provides:
//! - Per-format tables from frame index to file name
//! - Fallback to frame 2 for keys outside 2..=28
//! - The [`ImageLoader`] strategy trait and a directory-backed loader
//!
//! Encoding, format conversion and caching are left to callers.

pub mod error;
pub mod loader;
pub mod table;

pub use error::AssetError;
pub use loader::{DirectoryLoader, FrameImage, ImageLoader, load_frame_for_key};
pub use table::{ImageFormat, frame_file_name, frame_file_name_for_key, resolve_key};
