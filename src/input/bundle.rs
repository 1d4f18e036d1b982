use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, ScoreError};

pub const FC_METRICS_TEST: &str = "fc_metrics_test";
pub const FC_METRICS_TEST_OOD: &str = "fc_metrics_test_ood";
pub const TEST_MEAN_SIMULATION_TIME: &str = "test_mean_simulation_time";
pub const TEST_OOD_MEAN_SIMULATION_TIME: &str = "test_ood_mean_simulation_time";

/// Raw benchmark output of one evaluation run. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsBundle {
    root: Value,
}

impl MetricsBundle {
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(ScoreError::malformed("$", "bundle root must be a JSON object"));
        }
        Ok(Self { root })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text).map_err(|source| ScoreError::Json {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Self::from_value(root)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ScoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root: Value = serde_json::from_str(&text).map_err(|source| ScoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(root)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn lookup(&self, path: &[&str]) -> Result<&Value> {
        let mut node = &self.root;
        for (depth, key) in path.iter().enumerate() {
            node = match node {
                Value::Object(map) => map
                    .get(*key)
                    .ok_or_else(|| ScoreError::missing(dotted(&path[..=depth])))?,
                _ => {
                    return Err(ScoreError::malformed(
                        dotted(&path[..depth]),
                        "expected an object",
                    ));
                }
            };
        }
        Ok(node)
    }

    pub fn lookup_object(&self, path: &[&str]) -> Result<&Map<String, Value>> {
        self.lookup(path)?
            .as_object()
            .ok_or_else(|| ScoreError::malformed(dotted(path), "expected an object"))
    }

    pub fn lookup_f64(&self, path: &[&str]) -> Result<f64> {
        self.lookup(path)?
            .as_f64()
            .ok_or_else(|| ScoreError::malformed(dotted(path), "expected a number"))
    }
}

pub fn dotted(path: &[&str]) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.join(".")
    }
}
