//! Report model: per-procedure summaries labelled through the name table.

use crate::latency::LatencyCollection;
use crate::procs::ProcTable;
use crate::trace::IngestStats;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcRow {
    pub label: String,
    pub proc: i64,
    pub count: usize,
    pub mean_us: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p50_us: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p90_us: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsView {
    pub procedures: usize,
    pub samples: usize,
    pub lines: usize,
    pub accepted_lines: usize,
    pub rejected_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    /// Whether rows carry p50/p90.
    pub percentiles: bool,
    /// One row per procedure, in first-seen order.
    pub procs: Vec<ProcRow>,
    pub totals: TotalsView,
}

/// Summarize every recorded procedure, in the order it first appeared.
pub fn build_report(
    latencies: &LatencyCollection,
    table: &ProcTable,
    percentiles: bool,
    ingest: &IngestStats,
) -> ReportData {
    let procs = latencies
        .procs()
        .filter_map(|proc| {
            let summary = latencies.summarize(proc, percentiles)?;
            Some(ProcRow {
                label: table.label(proc).into_owned(),
                proc,
                count: summary.count,
                mean_us: summary.mean_us,
                p50_us: summary.p50_us,
                p90_us: summary.p90_us,
            })
        })
        .collect();

    ReportData {
        percentiles,
        procs,
        totals: TotalsView {
            procedures: latencies.len(),
            samples: latencies.total_samples(),
            lines: ingest.lines,
            accepted_lines: ingest.accepted,
            rejected_lines: ingest.rejected,
        },
    }
}
