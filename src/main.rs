use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use ml4physim_score::report::json::render_evaluation_json;
use ml4physim_score::report::text::render_summary_text;
use ml4physim_score::report::write_evaluation;
use ml4physim_score::telemetry::init_tracing;
use ml4physim_score::{MetricsBundle, ScoringConfig, score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Three consecutive JSON objects: global score, subscores, details
    #[default]
    Json,
    /// Human-readable summary
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "ml4physim-score", version)]
#[command(about = "Score a surrogate-model benchmark metrics file for the leaderboard")]
struct Cli {
    /// Path to the metrics bundle (JSON)
    metrics: PathBuf,

    /// Also persist the evaluation to this file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Scoring configuration override (JSON); defaults to the built-in profile
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stdout format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_tracing(&cli.log_level) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> ml4physim_score::Result<()> {
    let config = match &cli.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    let bundle = MetricsBundle::load(&cli.metrics)?;
    let result = score(&bundle, &config)?;

    match cli.format {
        OutputFormat::Json => println!("{}", render_evaluation_json(&result)),
        OutputFormat::Text => print!("{}", render_summary_text(&result)),
    }

    if let Some(out) = &cli.out {
        write_evaluation(&result, out)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
