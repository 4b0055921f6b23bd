//! Julian Day ↔ Gregorian calendar conversions.
//!
//! Both directions follow Meeus, *Astronomical Algorithms*, ch. 7.
//! `calendar_to_jd` always applies the Gregorian correction; there is no
//! Julian-calendar branch before 1582-Oct-15.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Day number.
///
/// `day_frac` carries the time of day as a fraction, so 15.5 is noon on
/// the 15th. January and February are treated as months 13 and 14 of the
/// previous year.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month < 3 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Day number back to `(year, month, day_frac)`.
///
/// Dates before 1582-Oct-15 come back in the Julian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian Day for a Unix timestamp in seconds.
pub fn unix_seconds_to_jd(seconds: f64) -> f64 {
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}
