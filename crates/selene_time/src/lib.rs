//! Civil UTC dates and Julian Day conversion.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversions
//! - `UtcTime`, a validated UTC calendar date/time
//! - Access to the system clock as a `UtcTime`

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, unix_seconds_to_jd,
};
pub use utc_time::{UtcTime, days_in_month, is_leap_year};

/// Julian Day for a UTC date.
///
/// Shorthand for [`UtcTime::to_jd`].
pub fn to_julian_day(date: &UtcTime) -> f64 {
    date.to_jd()
}
