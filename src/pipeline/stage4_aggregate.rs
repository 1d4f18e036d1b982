use crate::error::{Result, ScoreError};
use crate::model::category::{Category, category_order};
use crate::model::config::ScoringConfig;
use crate::model::result::{CategoryDetail, MetricClassification, ScoreResult, Subscores};
use crate::pipeline::stage2_speedup::{SpeedUps, speed_up_fraction};

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub ml: &'a [MetricClassification],
    pub physics: &'a [MetricClassification],
    pub ood: &'a [MetricClassification],
    pub speed_ups: SpeedUps,
    pub config: &'a ScoringConfig,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Result<ScoreResult> {
    let config = inputs.config;
    let details = category_order()
        .iter()
        .map(|&category| {
            let classifications = match category {
                Category::Ml => inputs.ml,
                Category::Physics => inputs.physics,
                Category::Ood => inputs.ood,
            };
            category_detail(
                category,
                classifications,
                inputs.speed_ups.get(category),
                config,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let subscore = |category: Category| {
        details
            .iter()
            .find(|d| d.category == category)
            .map_or(0.0, |d| d.subscore)
    };
    let subscores = Subscores {
        ml: subscore(Category::Ml),
        physics: subscore(Category::Physics),
        ood: subscore(Category::Ood),
    };
    let global_score = global_score(&subscores, config);

    Ok(ScoreResult {
        global_score,
        subscores,
        details,
    })
}

/// Fraction of the best attainable points, in [0, 1].
pub fn accuracy_fraction(
    category: Category,
    classifications: &[MetricClassification],
    config: &ScoringConfig,
) -> Result<f64> {
    if classifications.is_empty() {
        return Err(ScoreError::malformed(
            category.label(),
            "category has no scored metrics",
        ));
    }
    let colors = &config.color_points;
    let points: f64 = classifications.iter().map(|c| colors.points(c.tier)).sum();
    Ok(points / (classifications.len() as f64 * colors.max_points()))
}

fn category_detail(
    category: Category,
    classifications: &[MetricClassification],
    speed_up: Option<f64>,
    config: &ScoringConfig,
) -> Result<CategoryDetail> {
    let accuracy = accuracy_fraction(category, classifications, config)?;
    let speed_fraction = speed_up.map(|s| speed_up_fraction(s, config.max_speed_ratio_allowed));
    let relevance = &config.ratio_relevance;

    // Physics has no timing axis: its subscore is the bare accuracy fraction.
    let subscore = match speed_fraction {
        Some(fraction) => accuracy * relevance.accuracy + fraction * relevance.speed_up,
        None => accuracy,
    };

    tracing::debug!(
        %category,
        accuracy,
        speed_up_fraction = ?speed_fraction,
        subscore,
        "category subscore"
    );

    Ok(CategoryDetail {
        category,
        classifications: classifications.to_vec(),
        accuracy_fraction: accuracy,
        speed_up,
        speed_up_fraction: speed_fraction,
        subscore,
    })
}

pub fn global_score(subscores: &Subscores, config: &ScoringConfig) -> f64 {
    let weighted: f64 = category_order()
        .iter()
        .map(|&category| config.coefficients.weight(category) * subscores.get(category))
        .sum();
    100.0 * weighted
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_aggregate.rs"]
mod tests;
