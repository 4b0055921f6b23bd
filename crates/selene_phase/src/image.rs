//! Quantization of the phase cycle onto 27 reference frames.
//!
//! Frames are numbered 2 through 28. Frame 2 shows the new moon, frame 15
//! the full moon, and frame 28 the last sliver before the next new moon.
//! Frames 3..=27 each own a band of width 1/26 centred on `(index - 2) / 26`;
//! frames 2 and 28 split the band around phase 0 between them.

use std::fmt::{Display, Formatter};

use crate::error::{PhaseError, require_finite};
use crate::phase::normalize_phase;

/// Number of distinct steps between the first and last frame.
const STEPS: f64 = 26.0;

/// A frame number in [`ImageIndex::MIN`, `ImageIndex::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageIndex(u32);

impl ImageIndex {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 28;
    /// Number of frames.
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;
    /// Frame used for the new moon and as the fallback for unknown keys.
    pub const NEW_MOON: Self = Self(Self::MIN);
    /// Frame used for the full moon.
    pub const FULL_MOON: Self = Self(15);

    /// Validate a raw frame number.
    pub const fn new(raw: u32) -> Option<Self> {
        if raw >= Self::MIN && raw <= Self::MAX {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Validate a raw frame number, substituting the new-moon frame when it
    /// is out of range.
    pub const fn new_or_fallback(raw: u32) -> Self {
        match Self::new(raw) {
            Some(idx) => idx,
            None => Self::NEW_MOON,
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// 0-based offset into a frame table (frame 2 = slot 0).
    pub const fn slot(self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    /// Iterate every frame in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Display for ImageIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ImageIndex> for u32 {
    fn from(idx: ImageIndex) -> Self {
        idx.0
    }
}

/// Frame index for a phase fraction.
///
/// Any finite value is accepted and wrapped into [0, 1) first. Rounding
/// (not truncation) gives each frame an equal-width band; a result past the
/// last frame wraps back to the new-moon frame.
pub fn image_index(phase: f64) -> Result<ImageIndex, PhaseError> {
    let phase = require_finite("phase", phase)?;
    let p = normalize_phase(phase);
    Ok(wrap_frame(ImageIndex::MIN + (p * STEPS).round() as u32))
}

fn wrap_frame(raw: u32) -> ImageIndex {
    if raw > ImageIndex::MAX {
        ImageIndex::NEW_MOON
    } else {
        ImageIndex(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(phase: f64) -> u32 {
        image_index(phase).unwrap().get()
    }

    #[test]
    fn principal_phases() {
        assert_eq!(idx(0.0), 2);
        assert_eq!(idx(0.25), 9);
        assert_eq!(idx(0.5), 15);
        assert_eq!(idx(0.75), 22);
    }

    #[test]
    fn rounds_to_nearest_frame() {
        // 0.019 * 26 = 0.494 -> frame 2; 0.020 * 26 = 0.52 -> frame 3
        assert_eq!(idx(0.019), 2);
        assert_eq!(idx(0.020), 3);
    }

    #[test]
    fn top_of_cycle() {
        assert_eq!(idx(0.999_999), 28);
        assert_eq!(idx(1.0), 2);
    }

    #[test]
    fn overflow_wraps_to_new_moon() {
        assert_eq!(wrap_frame(29), ImageIndex::NEW_MOON);
        assert_eq!(wrap_frame(28).get(), 28);
    }

    #[test]
    fn negative_and_large_inputs() {
        assert_eq!(idx(-0.5), 15);
        assert_eq!(idx(-0.75), 9);
        assert_eq!(idx(7.5), 15);
    }

    #[test]
    fn non_finite_rejected() {
        assert!(image_index(f64::NAN).is_err());
        assert!(image_index(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn validation_and_fallback() {
        assert_eq!(ImageIndex::new(1), None);
        assert_eq!(ImageIndex::new(29), None);
        assert_eq!(ImageIndex::new(15), Some(ImageIndex::FULL_MOON));
        assert_eq!(ImageIndex::new_or_fallback(0), ImageIndex::NEW_MOON);
        assert_eq!(ImageIndex::new_or_fallback(27).get(), 27);
    }

    #[test]
    fn all_covers_every_frame() {
        let frames: Vec<u32> = ImageIndex::all().map(ImageIndex::get).collect();
        assert_eq!(frames.len(), ImageIndex::COUNT);
        assert_eq!(frames.first(), Some(&2));
        assert_eq!(frames.last(), Some(&28));
    }

    #[test]
    fn band_centres_map_back() {
        for step in 0..26u32 {
            assert_eq!(idx(step as f64 / STEPS), ImageIndex::MIN + step);
        }
    }
}
