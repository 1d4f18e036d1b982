pub mod json;
pub mod text;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ScoreError};
use crate::model::result::ScoreResult;

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Persists the evaluation as three consecutive top-level JSON objects.
pub fn write_evaluation(result: &ScoreResult, path: &Path) -> Result<()> {
    let io_err = |source| ScoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json::render_evaluation_json(result).as_bytes())
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    tracing::info!(path = %path.display(), "wrote evaluation");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
