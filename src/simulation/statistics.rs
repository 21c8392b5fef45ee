//! Summary statistics computed directly from a score histogram.
//!
//! No raw score vector is kept, so everything here is a weighted pass over
//! the buckets.

use serde::Serialize;

use super::histogram::Histogram;

/// Percentiles reported alongside the summary.
pub const REPORTED_PERCENTILES: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub trials: u64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    pub percentiles: Vec<PercentileEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PercentileEntry {
    pub percentile: f64,
    pub score: u32,
}

impl ScoreSummary {
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let trials = histogram.total();
        if trials == 0 {
            return Self {
                trials,
                mean: 0.0,
                std_dev: 0.0,
                min: 0,
                max: 0,
                median: 0,
                percentiles: Vec::new(),
            };
        }

        let n = trials as f64;
        let sum: f64 = histogram
            .iter_nonzero()
            .map(|(s, c)| s as f64 * c as f64)
            .sum();
        let mean = sum / n;
        let variance: f64 = histogram
            .iter_nonzero()
            .map(|(s, c)| c as f64 * (s as f64 - mean).powi(2))
            .sum::<f64>()
            / n;

        let min = histogram.iter_nonzero().next().map_or(0, |(s, _)| s);
        let max = histogram.iter_nonzero().last().map_or(0, |(s, _)| s);

        let percentiles = REPORTED_PERCENTILES
            .iter()
            .map(|&p| PercentileEntry {
                percentile: p,
                score: percentile(histogram, p),
            })
            .collect();

        Self {
            trials,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
            median: percentile(histogram, 50.0),
            percentiles,
        }
    }
}

/// Nearest-rank percentile: the smallest score whose cumulative count reaches
/// `ceil(p / 100 * total)` (at least rank 1). Returns 0 for an empty histogram.
pub fn percentile(histogram: &Histogram, p: f64) -> u32 {
    let total = histogram.total();
    if total == 0 {
        return 0;
    }
    let p = p.clamp(0.0, 100.0);
    let rank = ((p / 100.0 * total as f64).ceil() as u64).max(1);
    let mut cumulative = 0u64;
    for (score, count) in histogram.iter_nonzero() {
        cumulative += count;
        if cumulative >= rank {
            return score;
        }
    }
    histogram.max_score()
}
