use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Deserializer, Value, json};

use super::*;
use crate::fixtures::sample_bundle;
use crate::model::config::ScoringConfig;
use crate::pipeline::score;
use crate::report::json::render_evaluation_json;
use crate::report::text::render_summary_text;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("ml4physim_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn documents(text: &str) -> Vec<Value> {
    Deserializer::from_str(text)
        .into_iter::<Value>()
        .collect::<std::result::Result<_, _>>()
        .unwrap()
}

fn sample_result() -> ScoreResult {
    score(&sample_bundle(), &ScoringConfig::default()).unwrap()
}

#[test]
fn test_evaluation_is_three_consecutive_objects() {
    let text = render_evaluation_json(&sample_result());
    assert!(text.starts_with("{\"global_score\":"));
    let docs = documents(&text);
    assert_eq!(docs.len(), 3);

    let global = docs[0]["global_score"].as_f64().unwrap();
    assert!((global - 61.75).abs() < 1e-9);

    let keys: Vec<&String> = docs[1].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["ML", "Physics", "OOD"]);
    assert_eq!(docs[1]["Physics"], json!(0.75));

    assert_eq!(docs[2]["ML"]["accuracy"], json!(["g", "o", "o", "r", "g"]));
    assert_eq!(docs[2]["Physics"]["accuracy"], json!(["o", "g", "g", "o"]));
    assert!(docs[2]["Physics"].get("speedup").is_none());
    assert_eq!(docs[2]["OOD"]["speedup"], json!(100.0));
}

#[test]
fn test_write_evaluation_creates_parents() {
    let dir = make_temp_dir();
    let path = dir.join("nested").join("evaluation.json");
    let result = sample_result();
    write_evaluation(&result, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, render_evaluation_json(&result));
    assert_eq!(documents(&text).len(), 3);
}

#[test]
fn test_summary_text_lists_every_metric() {
    let text = render_summary_text(&sample_result());
    assert!(text.contains("Global score: 61.750000"));
    assert!(text.contains("1. ML"));
    assert!(text.contains("2. Physics"));
    assert!(text.contains("3. OOD"));
    assert!(text.contains("pressure_surfacic"));
    assert!(text.contains("Speed-up: 1000.000000 (fraction 0.750000)"));
    assert_eq!(text.matches("spearman_correlation_lift").count(), 2);
}

#[test]
fn test_format_f64_6() {
    assert_eq!(format_f64_6(0.5), "0.500000");
}
