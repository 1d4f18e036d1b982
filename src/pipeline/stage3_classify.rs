use crate::error::{Result, ScoreError};
use crate::model::category::{Category, CategoryMetrics};
use crate::model::result::MetricClassification;
use crate::model::thresholds::{Direction, Threshold, ThresholdTable};
use crate::model::tier::Tier;

/// Grades one value. A value sitting exactly on a bound takes the better adjacent tier.
pub fn classify_value(value: f64, threshold: &Threshold) -> Tier {
    match threshold.direction {
        Direction::Min => {
            if value <= threshold.low {
                Tier::Green
            } else if value <= threshold.high {
                Tier::Orange
            } else {
                Tier::Red
            }
        }
        Direction::Max => {
            if value >= threshold.high {
                Tier::Green
            } else if value >= threshold.low {
                Tier::Orange
            } else {
                Tier::Red
            }
        }
    }
}

pub fn classify_category(
    category: Category,
    metrics: &CategoryMetrics,
    thresholds: &ThresholdTable,
) -> Result<Vec<MetricClassification>> {
    metrics
        .iter()
        .map(|(name, value)| {
            let threshold = thresholds
                .get(name)
                .ok_or_else(|| ScoreError::ConfigMismatch {
                    category,
                    metric: name.to_string(),
                })?;
            let tier = classify_value(value, threshold);
            tracing::trace!(%category, metric = name, value, tier = tier.label(), "classified");
            Ok(MetricClassification {
                metric: name.to_string(),
                value,
                tier,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
