//! Rendering of a finished run, as text or JSON.

use serde::Serialize;

use crate::config::ExecutionMode;
use crate::simulation::{ScoreSummary, SimulationResult};

/// Plain-text report: header, one line per non-empty bucket in ascending
/// score order, then the elapsed time.
pub fn format_text(result: &SimulationResult) -> String {
    let mut out = format!(
        "Number of simulations was {} using {} dice.\n",
        result.config.num_simulations(),
        result.config.num_dice()
    );
    for (score, count) in result.histogram.iter_nonzero() {
        out.push_str(&format!(
            "Total {} occurs {:.2}% occurred {} times.\n",
            score,
            result.histogram.percentage(score),
            count
        ));
    }
    out.push_str(&format!(
        "Total simulation took {} milliseconds.\n",
        result.elapsed.as_millis()
    ));
    out
}

/// Short summary block appended to the text report in verbose mode.
pub fn format_summary(summary: &ScoreSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Mean score:  {:.3}\n", summary.mean));
    out.push_str(&format!("  Std dev:     {:.3}\n", summary.std_dev));
    out.push_str(&format!("  Min:         {}\n", summary.min));
    out.push_str(&format!("  Max:         {}\n", summary.max));
    out.push_str(&format!("  Median:      {}\n", summary.median));
    for p in &summary.percentiles {
        out.push_str(&format!("  p{:<2}:         {}\n", p.percentile, p.score));
    }
    out
}

#[derive(Serialize)]
pub struct JsonReport {
    pub num_dice: u32,
    pub num_simulations: u64,
    pub seed: u64,
    pub mode: ExecutionMode,
    pub elapsed_ms: f64,
    pub summary: ScoreSummary,
    pub buckets: Vec<JsonBucket>,
}

#[derive(Serialize)]
pub struct JsonBucket {
    pub score: u32,
    pub count: u64,
    pub percentage: f64,
}

impl JsonReport {
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            num_dice: result.config.num_dice(),
            num_simulations: result.config.num_simulations(),
            seed: result.seed,
            mode: result.mode,
            elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
            summary: result.summary(),
            buckets: result
                .histogram
                .iter_nonzero()
                .map(|(score, count)| JsonBucket {
                    score,
                    count,
                    percentage: result.histogram.percentage(score),
                })
                .collect(),
        }
    }
}

/// Pretty-printed JSON report.
pub fn format_json(result: &SimulationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_result(result))
}
