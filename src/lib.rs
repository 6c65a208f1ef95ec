//! Per-procedure NFSv3 latency statistics from tshark field traces.
//!
//! Input is the output of
//! `tshark -Tfields -e nfs.procedure_v3 -e rpc.time -r nfs.pcap '(nfs && rpc.time)'`:
//! one line per RPC reply, a comma-joined procedure list, a tab, and a
//! comma-joined list of elapsed times in seconds.

pub mod config;
pub mod diagnostics;
pub mod latency;
pub mod procs;
pub mod render;
pub mod report;
pub mod trace;

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader, Write};

use config::{Input, OutputFormat, RunConfig};
use latency::LatencyCollection;
use procs::ProcTable;
use trace::IngestStats;

pub type Result<T> = anyhow::Result<T>;

/// Read the configured input, aggregate it, and write the report to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<IngestStats> {
    let mut latencies = LatencyCollection::new();

    let ingest = match &config.input {
        Input::Stdin => {
            let stdin = io::stdin();
            trace::read_trace(stdin.lock(), &mut latencies)?
        }
        Input::Path(path) => {
            let file = File::open(path).with_context(|| {
                diagnostics::error_message(format!("open trace file {}", path.display()))
            })?;
            trace::read_trace(BufReader::new(file), &mut latencies)?
        }
    };

    tracing::debug!(
        lines = ingest.lines,
        accepted = ingest.accepted,
        rejected = ingest.rejected,
        samples = ingest.samples,
        "trace consumed"
    );

    let table = ProcTable::nfs_v3();
    let data = report::build_report(&latencies, &table, config.percentiles, &ingest);

    match config.format {
        OutputFormat::Text => render::render_text_report(&data, out)?,
        OutputFormat::Json => render::render_json_report(&data, out)?,
    }
    out.flush()?;

    Ok(ingest)
}
