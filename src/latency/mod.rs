//! Per-procedure latency samples and their summaries.

pub mod stats;

use crate::trace::Sample;
use std::collections::HashMap;

/// Microsecond samples grouped by procedure, in first-seen procedure order.
#[derive(Debug, Clone, Default)]
pub struct LatencyCollection {
    /// Position of each procedure in `entries`.
    index: HashMap<i64, usize>,
    entries: Vec<(i64, Vec<f64>)>,
}

/// Count, mean and (when asked for) percentiles of one procedure, in microseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencySummary {
    pub count: usize,
    pub mean_us: f64,
    pub p50_us: Option<f64>,
    pub p90_us: Option<f64>,
}

impl LatencyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append each sample's elapsed time, in microseconds, under its procedure.
    pub fn record(&mut self, samples: &[Sample]) {
        for sample in samples {
            let pos = *self.index.entry(sample.proc).or_insert_with(|| {
                self.entries.push((sample.proc, Vec::new()));
                self.entries.len() - 1
            });
            self.entries[pos].1.push(sample.elapsed_us());
        }
    }

    /// Procedures in the order they were first recorded.
    pub fn procs(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|(proc, _)| *proc)
    }

    /// Samples of one procedure in arrival order.
    pub fn samples(&self, proc: i64) -> Option<&[f64]> {
        self.index
            .get(&proc)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &[f64])> + '_ {
        self.entries
            .iter()
            .map(|(proc, samples)| (*proc, samples.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_samples(&self) -> usize {
        self.entries.iter().map(|(_, s)| s.len()).sum()
    }

    /// Summarize one procedure; `None` if it was never recorded.
    pub fn summarize(&self, proc: i64, percentiles: bool) -> Option<LatencySummary> {
        self.samples(proc).map(|s| summarize_samples(s, percentiles))
    }
}

/// `samples` is never empty for a recorded procedure.
fn summarize_samples(samples: &[f64], percentiles: bool) -> LatencySummary {
    let (p50_us, p90_us) = if percentiles {
        let sorted = stats::sorted(samples);
        (
            Some(stats::percentile(&sorted, 0.5)),
            Some(stats::percentile(&sorted, 0.9)),
        )
    } else {
        (None, None)
    };

    LatencySummary {
        count: samples.len(),
        mean_us: stats::mean(samples),
        p50_us,
        p90_us,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(latencies: &mut LatencyCollection, pairs: &[(i64, f64)]) {
        let samples: Vec<Sample> = pairs.iter().map(|&(p, t)| Sample::new(p, t)).collect();
        latencies.record(&samples);
    }

    #[test]
    fn converts_seconds_to_microseconds() {
        let mut latencies = LatencyCollection::new();
        record(&mut latencies, &[(6, 0.0005)]);
        assert_eq!(latencies.samples(6), Some(&[500.0][..]));
    }

    #[test]
    fn keeps_first_seen_order() {
        let mut latencies = LatencyCollection::new();
        record(&mut latencies, &[(7, 0.1), (3, 0.1)]);
        record(&mut latencies, &[(1, 0.1), (7, 0.2), (3, 0.3)]);
        assert_eq!(latencies.procs().collect::<Vec<_>>(), vec![7, 3, 1]);
        assert_eq!(latencies.len(), 3);
        assert_eq!(latencies.total_samples(), 5);
    }

    #[test]
    fn samples_keep_arrival_order() {
        let mut latencies = LatencyCollection::new();
        record(&mut latencies, &[(3, 0.0003), (3, 0.0001), (3, 0.0002)]);
        assert_eq!(latencies.samples(3), Some(&[300.0, 100.0, 200.0][..]));
    }

    #[test]
    fn summarize_unknown_is_none() {
        let latencies = LatencyCollection::new();
        assert!(latencies.is_empty());
        assert_eq!(latencies.summarize(3, true), None);
    }

    #[test]
    fn summarize_without_percentiles() {
        let mut latencies = LatencyCollection::new();
        record(&mut latencies, &[(3, 0.0001), (3, 0.0003)]);
        let summary = latencies.summarize(3, false).unwrap();
        assert_eq!(summary.count, 2);
        assert!((summary.mean_us - 200.0).abs() < 1e-9);
        assert_eq!(summary.p50_us, None);
        assert_eq!(summary.p90_us, None);
    }

    #[test]
    fn summarize_with_percentiles() {
        let mut latencies = LatencyCollection::new();
        record(
            &mut latencies,
            &[(7, 0.0004), (7, 0.0001), (7, 0.0003), (7, 0.0002)],
        );
        let summary = latencies.summarize(7, true).unwrap();
        assert_eq!(summary.count, 4);
        assert!((summary.mean_us - 250.0).abs() < 1e-9);
        assert!((summary.p50_us.unwrap() - 250.0).abs() < 1e-9);
        assert!((summary.p90_us.unwrap() - 370.0).abs() < 1e-9);
    }
}
