//! Summary statistics over microsecond samples.

use std::cmp::Ordering;

/// Callers only summarize recorded procedures, so `samples` is never empty.
pub fn mean(samples: &[f64]) -> f64 {
    debug_assert!(!samples.is_empty(), "mean of no samples");
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Copy of `samples` in ascending order.
pub fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Percentile `q` (0.0..=1.0) of ascending `sorted_data`.
///
/// Interpolates linearly between the two closest order statistics at rank
/// `q * (n - 1)`, so `[100, 200, 300, 400]` has p50 = 250 and p90 = 370.
pub fn percentile(sorted_data: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted_data.is_empty(), "percentile of no samples");
    if sorted_data.len() == 1 {
        return sorted_data[0];
    }

    let rank = q.clamp(0.0, 1.0) * (sorted_data.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted_data[lower]
    } else {
        let weight = rank - lower as f64;
        sorted_data[lower] + weight * (sorted_data[upper] - sorted_data[lower])
    }
}
