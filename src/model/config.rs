use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::model::category::Category;
use crate::model::thresholds::ThresholdTable;
use crate::model::tier::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    #[serde(rename = "ML")]
    pub ml: f64,
    #[serde(rename = "Physics")]
    pub physics: f64,
    #[serde(rename = "OOD")]
    pub ood: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            ml: 0.4,
            physics: 0.3,
            ood: 0.3,
        }
    }
}

impl Coefficients {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Ml => self.ml,
            Category::Physics => self.physics,
            Category::Ood => self.ood,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioRelevance {
    #[serde(rename = "Speed-up")]
    pub speed_up: f64,
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
}

impl Default for RatioRelevance {
    fn default() -> Self {
        Self {
            speed_up: 0.25,
            accuracy: 0.75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPoints {
    #[serde(rename = "g")]
    pub green: f64,
    #[serde(rename = "o")]
    pub orange: f64,
    #[serde(rename = "r")]
    pub red: f64,
}

impl Default for ColorPoints {
    fn default() -> Self {
        Self {
            green: 2.0,
            orange: 1.0,
            red: 0.0,
        }
    }
}

impl ColorPoints {
    pub fn points(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Green => self.green,
            Tier::Orange => self.orange,
            Tier::Red => self.red,
        }
    }

    pub fn max_points(&self) -> f64 {
        self.green.max(self.orange).max(self.red)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub coefficients: Coefficients,
    #[serde(rename = "ratioRelevance")]
    pub ratio_relevance: RatioRelevance,
    #[serde(rename = "valueByColor")]
    pub color_points: ColorPoints,
    #[serde(rename = "maxSpeedRatioAllowed")]
    pub max_speed_ratio_allowed: f64,
    /// Reference solver time the measured inference time is compared against.
    #[serde(rename = "referenceSimulationTime")]
    pub reference_simulation_time: f64,
    pub thresholds: ThresholdTable,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            coefficients: Coefficients::default(),
            ratio_relevance: RatioRelevance::default(),
            color_points: ColorPoints::default(),
            max_speed_ratio_allowed: 10_000.0,
            reference_simulation_time: 1500.0,
            thresholds: ThresholdTable::airfrans_v1(),
        }
    }
}

impl ScoringConfig {
    pub fn from_json_str(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ScoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text).map_err(|source| ScoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("coefficients.ML", self.coefficients.ml),
            ("coefficients.Physics", self.coefficients.physics),
            ("coefficients.OOD", self.coefficients.ood),
            ("ratioRelevance.Speed-up", self.ratio_relevance.speed_up),
            ("ratioRelevance.Accuracy", self.ratio_relevance.accuracy),
            ("valueByColor.g", self.color_points.green),
            ("valueByColor.o", self.color_points.orange),
            ("valueByColor.r", self.color_points.red),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::InvalidConfig(format!(
                    "`{name}` must be a non-negative finite number (got {value})"
                )));
            }
        }
        let colors = &self.color_points;
        if colors.green <= 0.0 || colors.green < colors.orange || colors.orange < colors.red {
            return Err(ScoreError::InvalidConfig(
                "valueByColor must satisfy g >= o >= r with g > 0".to_string(),
            ));
        }
        if !self.max_speed_ratio_allowed.is_finite() || self.max_speed_ratio_allowed <= 1.0 {
            return Err(ScoreError::InvalidConfig(format!(
                "maxSpeedRatioAllowed must be finite and > 1 (got {})",
                self.max_speed_ratio_allowed
            )));
        }
        if !self.reference_simulation_time.is_finite() || self.reference_simulation_time <= 0.0 {
            return Err(ScoreError::InvalidConfig(format!(
                "referenceSimulationTime must be finite and > 0 (got {})",
                self.reference_simulation_time
            )));
        }
        self.thresholds.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
