//! Mean lunar phase, illumination and reference-frame selection.
//!
//! This crate provides:
//! - Phase fraction and illumination from a UTC date or Julian Day
//! - Classification into the eight named phases
//! - Mapping of a phase onto one of 27 pre-rendered frames (2..=28)
//! - The frame sequence for a rotating-moon loop
//!
//! Everything here is a pure function of its arguments.

pub mod error;
pub mod image;
pub mod phase;
pub mod phase_name;
pub mod rotation;

pub use error::PhaseError;
pub use image::{ImageIndex, image_index};
pub use phase::{
    MoonPhase, REFERENCE_NEW_MOON_JD, SYNODIC_PERIOD_DAYS, illumination, moon_phase,
    moon_phase_from_jd, moon_phase_from_override, normalize_phase, phase_fraction,
};
pub use phase_name::{ALL_PHASE_NAMES, PhaseName, phase_name};
pub use rotation::{RotationFrame, WAXING_INDICES, rotation_frames};
