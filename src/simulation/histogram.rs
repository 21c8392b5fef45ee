//! Score histograms.
//!
//! [`AtomicHistogram`] accumulates counts while trials run, possibly from many
//! threads at once. [`Histogram`] is the finalized, read-only snapshot handed
//! back to the caller. Both have `max_score + 1` buckets (scores `0..=max`);
//! a score outside that range is dropped instead of faulting.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrent per-bucket counters.
pub struct AtomicHistogram {
    buckets: Vec<AtomicU64>,
    dropped: AtomicU64,
}

impl AtomicHistogram {
    pub fn new(max_score: u32) -> Self {
        Self {
            buckets: (0..=max_score as usize).map(|_| AtomicU64::new(0)).collect(),
            dropped: AtomicU64::new(0),
        }
    }

    /// Count one occurrence of `score`. Safe to call from any thread.
    #[inline(always)]
    pub fn record(&self, score: u32) {
        // Relaxed is enough: counts are only read after the workers are joined.
        match self.buckets.get(score as usize) {
            Some(bucket) => bucket.fetch_add(1, Ordering::Relaxed),
            None => self.dropped.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Freeze the counters into a [`Histogram`].
    pub fn into_histogram(self) -> Histogram {
        Histogram {
            counts: self.buckets.into_iter().map(AtomicU64::into_inner).collect(),
            dropped: self.dropped.into_inner(),
        }
    }
}

/// Finalized score → count mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Histogram {
    counts: Vec<u64>,
    #[serde(skip)]
    dropped: u64,
}

impl Histogram {
    /// Empty histogram with buckets for scores `0..=max_score`.
    pub fn new(max_score: u32) -> Self {
        Self {
            counts: vec![0; max_score as usize + 1],
            dropped: 0,
        }
    }

    /// Single-threaded increment; out-of-range scores are dropped.
    #[inline(always)]
    pub fn record(&mut self, score: u32) {
        match self.counts.get_mut(score as usize) {
            Some(count) => *count += 1,
            None => self.dropped += 1,
        }
    }

    /// Highest addressable score.
    pub fn max_score(&self) -> u32 {
        (self.counts.len() - 1) as u32
    }

    /// Occurrences of `score` (0 if out of range).
    pub fn count(&self, score: u32) -> u64 {
        self.counts.get(score as usize).copied().unwrap_or(0)
    }

    /// Raw bucket counts indexed by score.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Sum over all buckets.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Scores that fell outside the bucket range.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Share of all recorded trials that scored `score`, in percent.
    pub fn percentage(&self, score: u32) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(score) as f64 * 100.0 / total as f64
    }

    /// Non-empty buckets in ascending score order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(s, &c)| (s as u32, c))
    }

    /// Fold another histogram of the same shape into this one.
    pub fn merge(&mut self, other: &Histogram) {
        debug_assert_eq!(self.counts.len(), other.counts.len());
        for (a, b) in self.counts.iter_mut().zip(&other.counts) {
            *a += b;
        }
        self.dropped += other.dropped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_count() {
        let h = Histogram::new(30);
        assert_eq!(h.counts().len(), 31);
        assert_eq!(h.max_score(), 30);
    }

    #[test]
    fn test_out_of_range_is_dropped() {
        let mut h = Histogram::new(6);
        h.record(6);
        h.record(7);
        h.record(1000);
        assert_eq!(h.total(), 1);
        assert_eq!(h.dropped(), 2);

        let a = AtomicHistogram::new(6);
        a.record(7);
        a.record(0);
        let h = a.into_histogram();
        assert_eq!(h.total(), 1);
        assert_eq!(h.dropped(), 1);
    }

    #[test]
    fn test_iter_nonzero_ascending() {
        let mut h = Histogram::new(12);
        for s in [9, 2, 9, 0, 12] {
            h.record(s);
        }
        let got: Vec<_> = h.iter_nonzero().collect();
        assert_eq!(got, vec![(0, 1), (2, 1), (9, 2), (12, 1)]);
    }

    #[test]
    fn test_percentage() {
        let mut h = Histogram::new(6);
        h.record(4);
        h.record(4);
        h.record(4);
        h.record(1);
        assert!((h.percentage(4) - 75.0).abs() < 1e-12);
        assert!((h.percentage(1) - 25.0).abs() < 1e-12);
        assert_eq!(h.percentage(2), 0.0);
        assert_eq!(Histogram::new(6).percentage(0), 0.0);
    }

    #[test]
    fn test_atomic_concurrent_increments_not_lost() {
        let a = AtomicHistogram::new(6);
        std::thread::scope(|s| {
            for t in 0..8u32 {
                let a = &a;
                s.spawn(move || {
                    for i in 0..10_000u32 {
                        a.record((i + t) % 7);
                    }
                });
            }
        });
        let h = a.into_histogram();
        assert_eq!(h.total(), 80_000);
        assert_eq!(h.dropped(), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = Histogram::new(6);
        let mut b = Histogram::new(6);
        a.record(1);
        b.record(1);
        b.record(5);
        a.merge(&b);
        assert_eq!(a.count(1), 2);
        assert_eq!(a.count(5), 1);
        assert_eq!(a.total(), 3);
    }
}
