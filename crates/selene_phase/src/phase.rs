//! Mean lunar phase from a Julian Day.
//!
//! The model counts days since a known new moon and divides by the mean
//! synodic month. It ignores the variation in the length of individual
//! lunations, so instants of true new and full moon can differ from the
//! computed ones by up to about half a day.

use std::f64::consts::TAU;

use selene_time::UtcTime;

use crate::error::{PhaseError, require_finite};
use crate::phase_name::PhaseName;

/// Mean length of the synodic month in days.
pub const SYNODIC_PERIOD_DAYS: f64 = 29.53059;

/// Julian Day of the reference new moon (2000-Jan-06).
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_549.5;

/// Phase, name and illumination of the Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonPhase {
    /// Fraction of the synodic cycle in [0, 1). 0 = new, 0.5 = full.
    pub phase: f64,
    /// Named phase band containing `phase`.
    pub name: PhaseName,
    /// Lit fraction of the visible disk in [0, 1].
    pub illumination: f64,
}

impl MoonPhase {
    /// Build from a phase fraction, wrapping it into [0, 1).
    fn from_fraction(phase: f64) -> Self {
        let phase = normalize_phase(phase);
        Self {
            phase,
            name: PhaseName::from_phase(phase),
            illumination: illumination(phase),
        }
    }

    /// Days elapsed since the most recent mean new moon.
    pub fn age_days(&self) -> f64 {
        self.phase * SYNODIC_PERIOD_DAYS
    }
}

/// Wrap a real number into [0, 1).
///
/// Values already in range are returned unchanged, so classification
/// thresholds are compared against the exact input.
pub fn normalize_phase(phase: f64) -> f64 {
    if (0.0..1.0).contains(&phase) {
        return phase;
    }
    wrap(phase, 1.0)
}

/// Illuminated fraction for a phase fraction: 0 at new, 1 at full.
pub fn illumination(phase: f64) -> f64 {
    (1.0 - (TAU * phase).cos()) / 2.0
}

/// Phase fraction for a UTC Julian Day.
///
/// Dates before the reference epoch give a negative day count, which is
/// wrapped forward into the same cycle position.
pub fn phase_fraction(jd: f64) -> f64 {
    let days_since_new = jd - REFERENCE_NEW_MOON_JD;
    let phase = wrap(days_since_new, SYNODIC_PERIOD_DAYS) / SYNODIC_PERIOD_DAYS;
    // Division can round a remainder just below the period up to 1.0.
    if phase >= 1.0 { 0.0 } else { phase }
}

/// Moon phase for a UTC Julian Day.
pub fn moon_phase_from_jd(jd: f64) -> Result<MoonPhase, PhaseError> {
    let jd = require_finite("julian day", jd)?;
    Ok(MoonPhase::from_fraction(phase_fraction(jd)))
}

/// Moon phase for a UTC calendar date.
///
/// A `UtcTime` built with [`UtcTime::try_new`] or parsed from a string
/// always yields a finite Julian Day, so this only fails for dates built
/// unchecked with a non-finite `second`.
pub fn moon_phase(date: &UtcTime) -> Result<MoonPhase, PhaseError> {
    moon_phase_from_jd(date.to_jd())
}

/// Moon phase for a caller-supplied phase fraction, bypassing the calendar.
///
/// The override is wrapped into [0, 1), so 1.25 is treated as 0.25.
pub fn moon_phase_from_override(phase: f64) -> Result<MoonPhase, PhaseError> {
    let phase = require_finite("phase", phase)?;
    Ok(MoonPhase::from_fraction(phase))
}

/// Remainder of `value / period` in [0, period), regardless of sign.
fn wrap(value: f64, period: f64) -> f64 {
    ((value % period) + period) % period
}
