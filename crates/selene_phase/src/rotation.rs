//! Frame sequence for a continuously rotating moon.
//!
//! The loop plays the waxing frames from new to full, then replays them
//! backwards mirrored left-to-right so the terminator keeps sweeping in one
//! direction. Only the waxing half of the frame set is needed.

use std::ops::RangeInclusive;

use crate::image::ImageIndex;

/// Frames from new moon (2) to full moon (15).
pub const WAXING_INDICES: RangeInclusive<u32> = ImageIndex::MIN..=15;

/// One step of the rotation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RotationFrame {
    pub index: ImageIndex,
    /// Draw the frame flipped horizontally.
    pub mirrored: bool,
}

/// The full loop: 2..=15 as-is, then 14 down to 3 mirrored.
///
/// Frames 15 and 2 are not repeated at the turn, so the loop closes
/// seamlessly when it restarts.
pub fn rotation_frames() -> Vec<RotationFrame> {
    let forward = WAXING_INDICES.map(|i| (i, false));
    let back = (ImageIndex::MIN + 1..*WAXING_INDICES.end()).rev().map(|i| (i, true));
    forward
        .chain(back)
        .filter_map(|(i, mirrored)| ImageIndex::new(i).map(|index| RotationFrame { index, mirrored }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_length() {
        assert_eq!(rotation_frames().len(), 26);
    }

    #[test]
    fn forward_then_mirrored() {
        let frames = rotation_frames();
        assert_eq!(frames[0].index.get(), 2);
        assert!(!frames[0].mirrored);
        assert_eq!(frames[13].index.get(), 15);
        assert!(!frames[13].mirrored);
        assert_eq!(frames[14].index.get(), 14);
        assert!(frames[14].mirrored);
        assert_eq!(frames[25].index.get(), 3);
        assert!(frames[25].mirrored);
    }

    #[test]
    fn only_waxing_frames_used() {
        assert!(
            rotation_frames()
                .iter()
                .all(|f| WAXING_INDICES.contains(&f.index.get()))
        );
    }
}
