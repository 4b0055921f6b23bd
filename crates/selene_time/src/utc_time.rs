//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the civil date type accepted by every phase computation.
//! It carries no leap-second information: the Julian Day it produces is a
//! plain UTC Julian Day.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, unix_seconds_to_jd};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    /// Build a date without range checks.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build a date, rejecting out-of-range fields and non-finite seconds.
    ///
    /// `second` may reach 60.x to admit a leap second.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidField("month"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidField("day"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidField("hour"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidField("minute"));
        }
        if !second.is_finite() || !(0.0..61.0).contains(&second) {
            return Err(TimeError::InvalidField("second"));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Midnight at the start of the given calendar day.
    pub fn date(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        Self::try_new(year, month, day, 0, 0, 0.0)
    }

    /// Current time from the system clock.
    pub fn now() -> Result<Self, TimeError> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
        Ok(Self::from_jd(unix_seconds_to_jd(elapsed.as_secs_f64())))
    }

    /// Fractional day of month (15.5 is noon on the 15th).
    pub fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY
    }

    /// Convert to a UTC Julian Day.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Convert a UTC Julian Day back to a calendar date, rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let jd = (jd * MILLIS_PER_DAY).round() / MILLIS_PER_DAY;
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let millis = ((day_frac - day as f64) * MILLIS_PER_DAY)
            .round()
            .clamp(0.0, MILLIS_PER_DAY - 1.0) as u64;
        let hour = (millis / 3_600_000) as u32;
        let minute = ((millis % 3_600_000) / 60_000) as u32;
        let second = (millis % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_jd(self.to_jd() + days)
    }
}

/// Number of days in a Gregorian month. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` and `YYYY-MM-DDThh:mm:ss[.fff]`,
    /// each with an optional trailing `Z`. A space may stand in for `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let (negative, date_body) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let date_fields: Vec<&str> = date_body.split('-').collect();
        if date_fields.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {date_part}")));
        }
        let mut year: i32 = parse_field(date_fields[0], "year")?;
        if negative {
            year = -year;
        }
        let month: u32 = parse_field(date_fields[1], "month")?;
        let day: u32 = parse_field(date_fields[2], "day")?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_fields: Vec<&str> = t.split(':').collect();
                match time_fields.as_slice() {
                    [h, m] => (parse_field(h, "hour")?, parse_field(m, "minute")?, 0.0),
                    [h, m, sec] => (
                        parse_field(h, "hour")?,
                        parse_field(m, "minute")?,
                        parse_field(sec, "second")?,
                    ),
                    _ => {
                        return Err(TimeError::Parse(format!(
                            "expected hh:mm or hh:mm:ss, got {t}"
                        )));
                    }
                }
            }
        };

        Self::try_new(year, month, day, hour, minute, second)
    }
}

fn parse_field<T: FromStr>(raw: &str, name: &str) -> Result<T, TimeError>
where
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| TimeError::Parse(format!("{name} {raw:?}: {e}")))
}
