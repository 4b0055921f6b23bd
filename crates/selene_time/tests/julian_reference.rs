//! Julian Day reference values and calendar round-trips.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use selene_time::{UtcTime, calendar_to_jd, days_in_month, jd_to_calendar};

/// Published Julian Day values (Meeus, table 7.a and USNO).
const REFERENCE: &[(i32, u32, f64, f64)] = &[
    (2000, 1, 1.5, 2_451_545.0),
    (1999, 1, 1.0, 2_451_179.5),
    (1987, 1, 27.0, 2_446_822.5),
    (1987, 6, 19.5, 2_446_966.0),
    (1988, 1, 27.0, 2_447_187.5),
    (1988, 6, 19.5, 2_447_332.0),
    (1900, 1, 1.0, 2_415_020.5),
    (1600, 1, 1.0, 2_305_447.5),
    (1600, 12, 31.0, 2_305_812.5),
];

#[test]
fn meeus_table_values() {
    for &(y, m, d, expected) in REFERENCE {
        assert_abs_diff_eq!(calendar_to_jd(y, m, d), expected, epsilon = 1e-9);
    }
}

#[test]
fn reference_new_moon_date() {
    // JD 2451549.5 is 2000-Jan-06 00:00 UTC.
    let t = UtcTime::new(2000, 1, 6, 0, 0, 0.0);
    assert_abs_diff_eq!(t.to_jd(), 2_451_549.5, epsilon = 1e-9);
}

#[test]
fn time_of_day_is_fractional_part() {
    let t = UtcTime::new(2000, 1, 6, 18, 14, 0.0);
    let expected = 2_451_549.5 + 18.0 / 24.0 + 14.0 / 1440.0;
    assert_abs_diff_eq!(t.to_jd(), expected, epsilon = 1e-9);
}

#[test]
fn consecutive_days_differ_by_one() {
    let mut prev = UtcTime::new(2023, 12, 31, 0, 0, 0.0).to_jd();
    for month in 1..=12 {
        for day in 1..=days_in_month(2024, month) {
            let jd = UtcTime::new(2024, month, day, 0, 0, 0.0).to_jd();
            assert_abs_diff_eq!(jd - prev, 1.0, epsilon = 1e-9);
            prev = jd;
        }
    }
}

proptest! {
    #[test]
    fn calendar_roundtrip(year in 1600i32..2400, month in 1u32..=12, day in 1u32..=28, frac in 0.0..1.0f64) {
        let jd = calendar_to_jd(year, month, day as f64 + frac);
        let (y, m, d) = jd_to_calendar(jd);
        prop_assert_eq!(y, year);
        prop_assert_eq!(m, month);
        prop_assert!((d - (day as f64 + frac)).abs() < 1e-6);
    }

    #[test]
    fn utc_roundtrip_to_the_second(year in 1800i32..2200, month in 1u32..=12, day in 1u32..=28,
                                   hour in 0u32..24, minute in 0u32..60, second in 0u32..60) {
        let t = UtcTime::new(year, month, day, hour, minute, second as f64);
        prop_assert_eq!(UtcTime::from_jd(t.to_jd()), t);
    }
}
