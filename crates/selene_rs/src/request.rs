//! Request and result types for combined phase + frame lookups.

use selene_phase::{ImageIndex, MoonPhase};
use selene_time::UtcTime;

/// What to compute the Moon for.
///
/// With neither field set, the current time is used. A `phase` override
/// takes precedence over `date`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseRequest {
    pub date: Option<UtcTime>,
    /// Phase fraction override; 0 = new, 0.5 = full.
    pub phase: Option<f64>,
}

impl PhaseRequest {
    /// Request for the current moment.
    pub fn now() -> Self {
        Self::default()
    }

    pub fn at(date: UtcTime) -> Self {
        Self {
            date: Some(date),
            phase: None,
        }
    }

    pub fn with_phase(phase: f64) -> Self {
        Self {
            date: None,
            phase: Some(phase),
        }
    }
}

/// Phase data together with the frame that depicts it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderData {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub moon: MoonPhase,
    pub image_index: ImageIndex,
}
