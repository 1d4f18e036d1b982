use crate::model::result::{CategoryDetail, ScoreResult};
use crate::report::format_f64_6;

pub fn render_summary_text(result: &ScoreResult) -> String {
    let mut out = String::new();

    out.push_str("Surrogate Model Benchmark Score\n");
    out.push_str("===============================\n\n");
    out.push_str(&format!(
        "Global score: {}\n\n",
        format_f64_6(result.global_score)
    ));

    for (i, detail) in result.details.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, detail.category));
        push_category(&mut out, detail);
        out.push('\n');
    }

    out
}

fn push_category(out: &mut String, detail: &CategoryDetail) {
    out.push_str(&format!("Subscore: {}\n", format_f64_6(detail.subscore)));
    out.push_str(&format!(
        "Accuracy fraction: {}\n",
        format_f64_6(detail.accuracy_fraction)
    ));
    if let (Some(ratio), Some(fraction)) = (detail.speed_up, detail.speed_up_fraction) {
        out.push_str(&format!(
            "Speed-up: {} (fraction {})\n",
            format_f64_6(ratio),
            format_f64_6(fraction)
        ));
    }
    for c in &detail.classifications {
        out.push_str(&format!(
            "  {:<28} {:>14} {}\n",
            c.metric,
            format_f64_6(c.value),
            c.tier.label()
        ));
    }
}
