//! The eight named phases of the synodic cycle.
//!
//! Bands are not equal width: the four principal phases (new, first
//! quarter, full, last quarter) each own a narrow window around their exact
//! instant, and the intermediate phases fill the gaps.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::PhaseError;
use crate::phase::normalize_phase;

/// Named lunar phase, in cycle order starting at New Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str"))]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All eight phase names in cycle order (index 0 = New Moon).
pub const ALL_PHASE_NAMES: [PhaseName; 8] = [
    PhaseName::NewMoon,
    PhaseName::WaxingCrescent,
    PhaseName::FirstQuarter,
    PhaseName::WaxingGibbous,
    PhaseName::FullMoon,
    PhaseName::WaningGibbous,
    PhaseName::LastQuarter,
    PhaseName::WaningCrescent,
];

/// Exclusive upper bound of each band, paired with its name. Anything at or
/// above the last bound is Waning Crescent.
const BANDS: [(f64, PhaseName); 7] = [
    (0.033, PhaseName::NewMoon),
    (0.243, PhaseName::WaxingCrescent),
    (0.277, PhaseName::FirstQuarter),
    (0.493, PhaseName::WaxingGibbous),
    (0.533, PhaseName::FullMoon),
    (0.743, PhaseName::WaningGibbous),
    (0.777, PhaseName::LastQuarter),
];

impl PhaseName {
    /// Display name, e.g. "Waxing Gibbous".
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// 0-based position in the cycle (New Moon = 0 .. Waning Crescent = 7).
    pub const fn index(self) -> u8 {
        match self {
            Self::NewMoon => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::FullMoon => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// True for the phases between New Moon and Full Moon (exclusive).
    pub const fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }

    /// True for the phases between Full Moon and New Moon (exclusive).
    pub const fn is_waning(self) -> bool {
        matches!(
            self,
            Self::WaningGibbous | Self::LastQuarter | Self::WaningCrescent
        )
    }

    /// Classify a phase fraction. The input is wrapped into [0, 1) first,
    /// so -0.25 classifies the same as 0.75.
    ///
    /// NaN falls through every band and classifies as Waning Crescent;
    /// callers that need to reject it use [`crate::moon_phase_from_override`].
    pub fn from_phase(phase: f64) -> Self {
        let p = normalize_phase(phase);
        BANDS
            .iter()
            .find(|(upper, _)| p < *upper)
            .map_or(Self::WaningCrescent, |(_, name)| *name)
    }
}

/// Classify a phase fraction into one of the eight names.
pub fn phase_name(phase: f64) -> PhaseName {
    PhaseName::from_phase(phase)
}

impl Display for PhaseName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PhaseName> for &'static str {
    fn from(name: PhaseName) -> Self {
        name.name()
    }
}

impl FromStr for PhaseName {
    type Err = PhaseError;

    /// Case-insensitive; words may be separated by spaces, hyphens or underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        ALL_PHASE_NAMES
            .iter()
            .find(|n| n.name().replace(' ', "").to_lowercase() == key)
            .copied()
            .ok_or_else(|| PhaseError::UnknownName(s.to_string()))
    }
}
