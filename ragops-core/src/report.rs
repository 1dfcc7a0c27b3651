//! Markdown report rendering and writing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::error::EvalError;
use crate::pipeline::EvalResult;

/// Renders the evaluation results as a markdown document.
fn render(results: &[EvalResult], date: &str) -> String {
    let count = results.len().max(1) as f64;
    let avg_groundedness = results.iter().map(|r| r.groundedness).sum::<f64>() / count;
    let avg_latency = results.iter().map(|r| r.latency_ms as f64).sum::<f64>() / count;
    let avg_cost = results.iter().map(|r| r.cost_usd).sum::<f64>() / count;

    let mut out = format!("# RAGOps Evaluation \u{2013} {date}\n\n");
    out.push_str("## Summary\n");
    out.push_str(&format!("- Average groundedness: **{avg_groundedness:.3}**\n"));
    out.push_str(&format!("- Average latency (ms): **{avg_latency:.1}**\n"));
    out.push_str(&format!("- Average cost (USD): **{avg_cost:.6}**\n"));
    out.push_str("\n## Detailed Results\n");
    out.push_str("|Query|Doc|Groundedness|Latency (ms)|Cost (USD)|\n");
    out.push_str("|---|---|---|---|---|\n");
    for r in results {
        out.push_str(&format!(
            "|{}|{}|{:.3}|{}|{:.6}|\n",
            r.query_id, r.doc_id, r.groundedness, r.latency_ms, r.cost_usd
        ));
    }
    out
}

/// Writes the report for today's UTC date into `report_dir`.
///
/// Creates the directory (and parents) when absent and overwrites any
/// report already written for the same date. Returns the path of the
/// written file.
pub fn write_report(results: &[EvalResult], report_dir: &Path) -> Result<PathBuf, EvalError> {
    let date = Utc::now().format("%Y-%m-%d").to_string();
    write_report_for_date(results, report_dir, &date)
}

/// Same as [`write_report`] for an explicit date string.
pub fn write_report_for_date(
    results: &[EvalResult],
    report_dir: &Path,
    date: &str,
) -> Result<PathBuf, EvalError> {
    let report_path = report_dir.join(format!("{date}-ragops-eval.md"));
    fs::create_dir_all(report_dir)?;
    fs::write(&report_path, render(results, date))?;
    debug!(path = %report_path.display(), results = results.len(), "wrote report");
    Ok(report_path)
}
