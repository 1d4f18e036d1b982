pub mod stage1_extract;
pub mod stage2_speedup;
pub mod stage3_classify;
pub mod stage4_aggregate;

use crate::error::Result;
use crate::input::MetricsBundle;
use crate::model::category::Category;
use crate::model::config::ScoringConfig;
use crate::model::result::ScoreResult;
use crate::pipeline::stage1_extract::run_stage1;
use crate::pipeline::stage2_speedup::run_stage2;
use crate::pipeline::stage3_classify::classify_category;
use crate::pipeline::stage4_aggregate::{Stage4Inputs, run_stage4};

/// Reduces one metrics bundle to a leaderboard score. Pure: no state survives the call,
/// and nothing partial is returned on failure.
pub fn score(bundle: &MetricsBundle, config: &ScoringConfig) -> Result<ScoreResult> {
    config.validate()?;
    let extracted = run_stage1(bundle)?;
    let speed_ups = run_stage2(bundle, config)?;

    let thresholds = &config.thresholds;
    let ml = classify_category(Category::Ml, &extracted.ml, thresholds)?;
    let physics = classify_category(Category::Physics, &extracted.physics, thresholds)?;
    let ood = classify_category(Category::Ood, &extracted.ood, thresholds)?;

    let result = run_stage4(&Stage4Inputs {
        ml: &ml,
        physics: &physics,
        ood: &ood,
        speed_ups,
        config,
    })?;

    tracing::info!(
        global_score = result.global_score,
        ml = result.subscores.ml,
        physics = result.subscores.physics,
        ood = result.subscores.ood,
        "scored metrics bundle"
    );
    Ok(result)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/score.rs"]
mod tests;
