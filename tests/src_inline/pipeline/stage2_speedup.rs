use serde_json::json;

use super::*;
use crate::fixtures::{approx, sample_bundle, sample_value, set};

#[test]
fn test_speed_up_ratios_from_reference_time() {
    let out = run_stage2(&sample_bundle(), &ScoringConfig::default()).unwrap();
    assert!(approx(out.ml, 1000.0));
    assert!(approx(out.ood, 100.0));
}

#[test]
fn test_degenerate_timing_is_rejected() {
    for bad in [0.0, -1.0] {
        let mut value = sample_value();
        set(&mut value, &["test_ood_mean_simulation_time"], json!(bad));
        let bundle = MetricsBundle::from_value(value).unwrap();
        match run_stage2(&bundle, &ScoringConfig::default()).unwrap_err() {
            ScoreError::DegenerateTiming { field, value } => {
                assert_eq!(field, "test_ood_mean_simulation_time");
                assert_eq!(value, bad);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    assert!(speed_up(1500.0, "t", f64::NAN).is_err());
    assert!(speed_up(1500.0, "t", f64::INFINITY).is_err());
}

#[test]
fn test_speed_up_fraction_saturation() {
    assert_eq!(speed_up_fraction(1.0, 10_000.0), 0.0);
    assert_eq!(speed_up_fraction(10_000.0, 10_000.0), 1.0);
    assert_eq!(speed_up_fraction(1e7, 10_000.0), 1.0);
    assert_eq!(speed_up_fraction(0.5, 10_000.0), 0.0);
    assert!(approx(speed_up_fraction(100.0, 10_000.0), 0.5));
}

#[test]
fn test_speed_up_fraction_at_cap_from_timing() {
    let ratio = speed_up(1500.0, "t", 0.15).unwrap();
    assert!((speed_up_fraction(ratio, 10_000.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_speed_up_fraction_stays_in_unit_interval() {
    let mut s = 1e-3;
    while s < 1e6 {
        let f = speed_up_fraction(s, 10_000.0);
        assert!((0.0..=1.0).contains(&f), "fraction {f} for speed-up {s}");
        s *= 3.7;
    }
}

#[test]
fn test_speed_up_lookup_by_category() {
    let out = SpeedUps { ml: 10.0, ood: 20.0 };
    assert_eq!(out.get(Category::Ml), Some(10.0));
    assert_eq!(out.get(Category::Ood), Some(20.0));
    assert_eq!(out.get(Category::Physics), None);
}
