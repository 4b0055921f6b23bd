//! Convenience wrapper for selene moon phase computation.
//!
//! Accepts optional dates (defaulting to now) and optional phase overrides,
//! and returns phase data together with the frame index that depicts it.
//!
//! # Quick start
//!
//! ```rust
//! use selene_rs::*;
//!
//! let date: UtcTime = "2024-12-25T00:00:00Z".parse().unwrap();
//! let moon = moon_phase(Some(date)).unwrap();
//! let frame = image_index(moon.phase).unwrap();
//! println!("{} ({:.0}% lit), frame {frame}", moon.name, moon.illumination * 100.0);
//! ```

pub mod convenience;
pub mod error;
pub mod request;

pub use convenience::{daily_phases, image_index, moon_phase, render_data, render_with_loader};
pub use error::SeleneError;
pub use request::{PhaseRequest, RenderData};

pub use selene_assets::{
    AssetError, DirectoryLoader, FrameImage, ImageFormat, ImageLoader, load_frame_for_key,
};
pub use selene_phase::{
    ALL_PHASE_NAMES, ImageIndex, MoonPhase, PhaseError, PhaseName, REFERENCE_NEW_MOON_JD,
    RotationFrame, SYNODIC_PERIOD_DAYS, rotation_frames,
};
pub use selene_time::{TimeError, UtcTime};
