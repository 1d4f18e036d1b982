use serde_json::json;

use super::*;
use crate::fixtures::{remove, sample_bundle, sample_value, set};

#[test]
fn test_ml_flattens_surfacic_pressure_last() {
    let out = run_stage1(&sample_bundle()).unwrap();
    assert_eq!(
        out.ml.names(),
        vec![
            "x-velocity",
            "y-velocity",
            "pressure",
            "turbulent_viscosity",
            "pressure_surfacic"
        ]
    );
    assert_eq!(out.ml.get("pressure_surfacic"), Some(0.05));
    assert_eq!(out.ml.get("pressure"), Some(0.03));
}

#[test]
fn test_physics_drops_dispersion_fields() {
    let out = run_stage1(&sample_bundle()).unwrap();
    assert_eq!(
        out.physics.names(),
        vec![
            "mean_relative_drag",
            "mean_relative_lift",
            "spearman_correlation_drag",
            "spearman_correlation_lift"
        ]
    );
}

#[test]
fn test_ood_merges_ml_and_physics() {
    let out = run_stage1(&sample_bundle()).unwrap();
    assert_eq!(out.ood.len(), 9);
    assert_eq!(out.ood.get("pressure_surfacic"), Some(0.3));
    assert_eq!(out.ood.get("mean_relative_drag"), Some(12.0));
    assert_eq!(out.ood.get("std_relative_lift"), None);
    assert_eq!(out.ood.names()[4], "pressure_surfacic");
    assert_eq!(out.ood.names()[5], "mean_relative_drag");
}

#[test]
fn test_extraction_leaves_bundle_untouched() {
    let bundle = sample_bundle();
    let before = bundle.clone();
    let _ = run_stage1(&bundle).unwrap();
    assert_eq!(bundle, before);
    assert!(
        bundle
            .lookup(&["fc_metrics_test", "test", "Physics", "std_relative_lift"])
            .is_ok()
    );
}

#[test]
fn test_missing_surfacic_pressure_is_malformed() {
    let mut value = sample_value();
    remove(
        &mut value,
        &["fc_metrics_test_ood", "test_ood", "ML", "MSE_normalized_surfacic", "pressure"],
    );
    let bundle = MetricsBundle::from_value(value).unwrap();
    match run_stage1(&bundle).unwrap_err() {
        ScoreError::MalformedInput { path, .. } => assert_eq!(
            path,
            "fc_metrics_test_ood.test_ood.ML.MSE_normalized_surfacic.pressure"
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_dispersion_field_is_malformed() {
    let mut value = sample_value();
    remove(
        &mut value,
        &["fc_metrics_test", "test", "Physics", "std_relative_drag"],
    );
    let bundle = MetricsBundle::from_value(value).unwrap();
    match run_stage1(&bundle).unwrap_err() {
        ScoreError::MalformedInput { path, .. } => {
            assert_eq!(path, "fc_metrics_test.test.Physics.std_relative_drag")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_numeric_metric_is_malformed() {
    let mut value = sample_value();
    set(
        &mut value,
        &["fc_metrics_test", "test", "ML", "MSE_normalized", "pressure"],
        json!("n/a"),
    );
    let bundle = MetricsBundle::from_value(value).unwrap();
    assert!(matches!(
        run_stage1(&bundle),
        Err(ScoreError::MalformedInput { .. })
    ));
}

#[test]
fn test_non_numeric_dispersion_field_is_ignored() {
    let mut value = sample_value();
    set(
        &mut value,
        &["fc_metrics_test", "test", "Physics", "std_relative_lift"],
        json!(null),
    );
    let bundle = MetricsBundle::from_value(value).unwrap();
    assert!(run_stage1(&bundle).is_ok());
}
