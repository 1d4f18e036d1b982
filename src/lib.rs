//! Reduces a surrogate-model benchmark metrics bundle (in-distribution and
//! out-of-distribution accuracy plus simulation timing) to a single leaderboard
//! score with per-category breakdowns.

pub mod error;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod telemetry;

pub use error::{Result, ScoreError};
pub use input::MetricsBundle;
pub use model::config::ScoringConfig;
pub use model::result::ScoreResult;
pub use pipeline::score;

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
pub(crate) mod fixtures;
