use serde_json::{Map, Value};

use crate::error::{Result, ScoreError};
use crate::input::bundle::{FC_METRICS_TEST, FC_METRICS_TEST_OOD};
use crate::input::{MetricsBundle, dotted};
use crate::model::category::CategoryMetrics;

pub const PRESSURE_SURFACIC: &str = "pressure_surfacic";

/// Present in the bundle's physics block but not scored.
pub const DISPERSION_FIELDS: [&str; 2] = ["std_relative_lift", "std_relative_drag"];

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedMetrics {
    pub ml: CategoryMetrics,
    pub physics: CategoryMetrics,
    pub ood: CategoryMetrics,
}

/// Where one evaluation split lives in the bundle, e.g. `fc_metrics_test.test`.
#[derive(Debug, Clone, Copy)]
struct Split {
    root: &'static str,
    name: &'static str,
}

const TEST_SPLIT: Split = Split {
    root: FC_METRICS_TEST,
    name: "test",
};

const OOD_SPLIT: Split = Split {
    root: FC_METRICS_TEST_OOD,
    name: "test_ood",
};

pub fn run_stage1(bundle: &MetricsBundle) -> Result<ExtractedMetrics> {
    let ml = ml_metrics(bundle, TEST_SPLIT)?;
    let physics = physics_metrics(bundle, TEST_SPLIT)?;
    let ood = ml_metrics(bundle, OOD_SPLIT)?.merged(&physics_metrics(bundle, OOD_SPLIT)?);

    tracing::debug!(
        ml = ml.len(),
        physics = physics.len(),
        ood = ood.len(),
        "extracted category metrics"
    );

    Ok(ExtractedMetrics { ml, physics, ood })
}

fn ml_metrics(bundle: &MetricsBundle, split: Split) -> Result<CategoryMetrics> {
    let path = [split.root, split.name, "ML", "MSE_normalized"];
    let volume = numeric_entries(bundle.lookup_object(&path)?, &path, &[])?;
    let pressure = bundle.lookup_f64(&[
        split.root,
        split.name,
        "ML",
        "MSE_normalized_surfacic",
        "pressure",
    ])?;
    Ok(CategoryMetrics::new(volume).with(PRESSURE_SURFACIC, pressure))
}

fn physics_metrics(bundle: &MetricsBundle, split: Split) -> Result<CategoryMetrics> {
    let path = [split.root, split.name, "Physics"];
    let block = bundle.lookup_object(&path)?;
    for field in DISPERSION_FIELDS {
        if !block.contains_key(field) {
            let mut missing = path.to_vec();
            missing.push(field);
            return Err(ScoreError::missing(dotted(&missing)));
        }
    }
    Ok(CategoryMetrics::new(numeric_entries(
        block,
        &path,
        &DISPERSION_FIELDS,
    )?))
}

fn numeric_entries(
    block: &Map<String, Value>,
    path: &[&str],
    skip: &[&str],
) -> Result<Vec<(String, f64)>> {
    block
        .iter()
        .filter(|(name, _)| !skip.contains(&name.as_str()))
        .map(|(name, value)| {
            let number = value.as_f64().ok_or_else(|| {
                let mut at = path.to_vec();
                at.push(name);
                ScoreError::malformed(dotted(&at), "expected a number")
            })?;
            Ok((name.clone(), number))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_extract.rs"]
mod tests;
