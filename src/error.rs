use std::path::PathBuf;

use thiserror::Error;

use crate::model::category::Category;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("malformed metrics bundle at `{path}`: {reason}")]
    MalformedInput { path: String, reason: String },

    #[error("no threshold configured for metric `{metric}` in category {category}")]
    ConfigMismatch { category: Category, metric: String },

    #[error("degenerate timing: `{field}` = {value} (must be a positive finite time)")]
    DegenerateTiming { field: &'static str, value: f64 },

    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScoreError {
    pub fn missing(path: impl Into<String>) -> Self {
        ScoreError::MalformedInput {
            path: path.into(),
            reason: "missing key".to_string(),
        }
    }

    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ScoreError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
