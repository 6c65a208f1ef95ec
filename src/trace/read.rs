use crate::Result;
use crate::diagnostics;
use crate::latency::LatencyCollection;
use crate::trace::parse::parse_line;

use anyhow::Context;
use std::io::BufRead;

/// Line counters for one pass over a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Non-blank lines seen.
    pub lines: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub samples: usize,
}

/// Feed every line of `reader` through the parser into `latencies`.
///
/// Bad lines are reported on the diagnostic channel and skipped; only a
/// failing reader aborts.
pub fn read_trace<R: BufRead>(
    mut reader: R,
    latencies: &mut LatencyCollection,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();
    let mut buf = Vec::new();
    let mut lineno = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| diagnostics::error_message(format!("read trace line {}", lineno + 1)))?;
        if n == 0 {
            break;
        }
        lineno += 1;

        // Stray bytes just make the line unparseable.
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;

        match parse_line(line) {
            Ok(samples) => {
                latencies.record(&samples);
                stats.accepted += 1;
                stats.samples += samples.len();
            }
            Err(err) => {
                diagnostics::rejected_line(lineno, &err, line);
                stats.rejected += 1;
            }
        }
    }

    Ok(stats)
}
