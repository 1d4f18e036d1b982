use crate::error::{Result, ScoreError};
use crate::input::MetricsBundle;
use crate::input::bundle::{TEST_MEAN_SIMULATION_TIME, TEST_OOD_MEAN_SIMULATION_TIME};
use crate::model::category::Category;
use crate::model::config::ScoringConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedUps {
    pub ml: f64,
    pub ood: f64,
}

impl SpeedUps {
    /// Ratio for a category with a timing axis; Physics has none.
    pub fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Ml => Some(self.ml),
            Category::Ood => Some(self.ood),
            Category::Physics => None,
        }
    }
}

pub fn run_stage2(bundle: &MetricsBundle, config: &ScoringConfig) -> Result<SpeedUps> {
    let ml = speed_up(
        config.reference_simulation_time,
        TEST_MEAN_SIMULATION_TIME,
        bundle.lookup_f64(&[TEST_MEAN_SIMULATION_TIME])?,
    )?;
    let ood = speed_up(
        config.reference_simulation_time,
        TEST_OOD_MEAN_SIMULATION_TIME,
        bundle.lookup_f64(&[TEST_OOD_MEAN_SIMULATION_TIME])?,
    )?;
    tracing::debug!(ml, ood, "computed speed-up ratios");
    Ok(SpeedUps { ml, ood })
}

pub fn speed_up(reference_time: f64, field: &'static str, measured_time: f64) -> Result<f64> {
    if !measured_time.is_finite() || measured_time <= 0.0 {
        return Err(ScoreError::DegenerateTiming {
            field,
            value: measured_time,
        });
    }
    Ok(reference_time / measured_time)
}

/// Log-scaled speed-up credit in [0, 1]: 0 at parity, 1 at `max_ratio` and beyond.
pub fn speed_up_fraction(speed_up: f64, max_ratio: f64) -> f64 {
    (speed_up.log10() / max_ratio.log10()).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_speedup.rs"]
mod tests;
