use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Lower is better (error metrics).
    Min,
    /// Higher is better (correlation metrics).
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub low: f64,
    pub high: f64,
    pub direction: Direction,
}

impl Threshold {
    pub const fn min(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            direction: Direction::Min,
        }
    }

    pub const fn max(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            direction: Direction::Max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    entries: BTreeMap<String, Threshold>,
}

impl ThresholdTable {
    pub fn airfrans_v1() -> Self {
        let mut table = Self::default();
        table.insert("x-velocity", Threshold::min(0.1, 0.2));
        table.insert("y-velocity", Threshold::min(0.1, 0.2));
        table.insert("pressure", Threshold::min(0.02, 0.1));
        table.insert("pressure_surfacic", Threshold::min(0.08, 0.2));
        table.insert("turbulent_viscosity", Threshold::min(0.5, 1.0));
        table.insert("mean_relative_drag", Threshold::min(1.0, 10.0));
        table.insert("mean_relative_lift", Threshold::min(0.2, 0.5));
        table.insert("spearman_correlation_drag", Threshold::max(0.5, 0.8));
        table.insert("spearman_correlation_lift", Threshold::max(0.94, 0.98));
        table
    }

    pub fn insert(&mut self, name: &str, threshold: Threshold) {
        self.entries.insert(name.to_string(), threshold);
    }

    pub fn remove(&mut self, name: &str) -> Option<Threshold> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Threshold> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Threshold)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, t) in self.iter() {
            if !t.low.is_finite() || !t.high.is_finite() {
                return Err(ScoreError::InvalidConfig(format!(
                    "threshold `{name}` has a non-finite bound"
                )));
            }
            if t.low >= t.high {
                return Err(ScoreError::InvalidConfig(format!(
                    "threshold `{name}` requires low < high (got {} >= {})",
                    t.low, t.high
                )));
            }
        }
        Ok(())
    }
}
