//! Properties that hold for every date and every phase value.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use selene_phase::{
    ALL_PHASE_NAMES, ImageIndex, PhaseName, REFERENCE_NEW_MOON_JD, SYNODIC_PERIOD_DAYS,
    image_index, moon_phase, moon_phase_from_jd, moon_phase_from_override, phase_name,
};
use selene_time::UtcTime;

#[test]
fn reference_date_is_new_moon() {
    // The reference JD is midnight; 18:14 the same day is still inside the
    // New Moon band.
    let m = moon_phase(&UtcTime::new(2000, 1, 6, 18, 14, 0.0)).unwrap();
    assert_eq!(m.name, PhaseName::NewMoon);
    assert!(m.phase < 0.033, "phase {}", m.phase);
    assert!(m.illumination < 0.01);
}

#[test]
fn full_moon_override_selects_frame_15() {
    let m = moon_phase_from_override(0.5).unwrap();
    assert_eq!(m.illumination, 1.0);
    assert_eq!(m.name, PhaseName::FullMoon);
    assert_eq!(image_index(m.phase).unwrap(), ImageIndex::FULL_MOON);
}

#[test]
fn known_full_moon_2024_jan_25() {
    // Observed full moon 2024-Jan-25 17:54 UTC; the mean model lands nearby.
    let m = moon_phase(&UtcTime::new(2024, 1, 25, 17, 54, 0.0)).unwrap();
    assert_eq!(m.name, PhaseName::FullMoon);
    assert!(m.illumination > 0.98, "illumination {}", m.illumination);
}

#[test]
fn known_new_moon_2024_jan_11() {
    // Observed new moon 2024-Jan-11 11:57 UTC.
    let m = moon_phase(&UtcTime::new(2024, 1, 11, 11, 57, 0.0)).unwrap();
    assert_eq!(m.name, PhaseName::NewMoon);
    let frame = image_index(m.phase).unwrap().get();
    assert!(frame <= 3 || frame == 28, "frame {frame}");
}

#[test]
fn identical_dates_give_identical_results() {
    let d: UtcTime = "2031-07-04T09:30:15Z".parse().unwrap();
    let a = moon_phase(&d).unwrap();
    let b = moon_phase(&d).unwrap();
    assert_eq!(a.phase.to_bits(), b.phase.to_bits());
    assert_eq!(a.illumination.to_bits(), b.illumination.to_bits());
    assert_eq!(a.name, b.name);
}

#[test]
fn every_name_is_reachable() {
    let mut seen = Vec::new();
    for i in 0..1000 {
        let n = phase_name(i as f64 / 1000.0);
        if !seen.contains(&n) {
            seen.push(n);
        }
    }
    assert_eq!(seen, ALL_PHASE_NAMES.to_vec());
}

#[test]
fn frames_are_monotonic_over_one_cycle() {
    let mut prev = image_index(0.0).unwrap();
    for i in 1..1000 {
        let next = image_index(i as f64 / 1000.0).unwrap();
        assert!(next >= prev, "frame went backwards at step {i}");
        prev = next;
    }
}

proptest! {
    #[test]
    fn phase_in_unit_interval(jd in 1_000_000.0..4_000_000.0f64) {
        let m = moon_phase_from_jd(jd).unwrap();
        prop_assert!(m.phase >= 0.0 && m.phase < 1.0);
        prop_assert!(m.illumination >= 0.0 && m.illumination <= 1.0);
    }

    #[test]
    fn periodic_over_one_synodic_month(jd in 2_400_000.0..2_500_000.0f64) {
        let a = moon_phase_from_jd(jd).unwrap().phase;
        let b = moon_phase_from_jd(jd + SYNODIC_PERIOD_DAYS).unwrap().phase;
        // Distance on the circle, so 0.9999 vs 0.0001 counts as close.
        let d = (a - b).abs();
        prop_assert!(d.min(1.0 - d) < 1e-6, "a={} b={}", a, b);
    }

    #[test]
    fn name_matches_override_classification(p in 0.0..1.0f64) {
        prop_assert_eq!(moon_phase_from_override(p).unwrap().name, phase_name(p));
    }

    #[test]
    fn frame_always_in_range(p in -1e6..1e6f64) {
        let frame = image_index(p).unwrap().get();
        prop_assert!((ImageIndex::MIN..=ImageIndex::MAX).contains(&frame));
    }

    #[test]
    fn date_path_in_range(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28,
                          hour in 0u32..24, minute in 0u32..60) {
        let d = UtcTime::new(year, month, day, hour, minute, 0.0);
        let m = moon_phase(&d).unwrap();
        prop_assert!((0.0..1.0).contains(&m.phase));
        let frame = image_index(m.phase).unwrap().get();
        prop_assert!((2..=28).contains(&frame));
    }
}

#[test]
fn illumination_extremes() {
    let new = moon_phase_from_jd(REFERENCE_NEW_MOON_JD).unwrap();
    assert_abs_diff_eq!(new.illumination, 0.0, epsilon = 1e-12);
    let almost_new = moon_phase_from_override(0.999_999).unwrap();
    assert_abs_diff_eq!(almost_new.illumination, 0.0, epsilon = 1e-9);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_with_display_name() {
    let m = moon_phase_from_override(0.5).unwrap();
    let json = serde_json::to_value(m).unwrap();
    assert_eq!(json["name"], "Full Moon");
    assert_eq!(json["illumination"], 1.0);
    assert_eq!(serde_json::to_value(ImageIndex::FULL_MOON).unwrap(), 15);
}
