//! Diagnostic channel (stderr via `tracing`), kept apart from the report on stdout.

use crate::trace::LineError;

const PREFIX: &str = "nfs-latency";

/// Prefix an error message so it is recognisable when several tools share stderr.
pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("{}: {}", PREFIX, msg.as_ref())
}

pub fn warn(msg: impl AsRef<str>) {
    tracing::warn!("{}", msg.as_ref());
}

/// Report a trace line that was skipped.
pub fn rejected_line(lineno: usize, err: &LineError, line: &str) {
    warn(format!("line {}: {}: {:?}", lineno, err, line));
}
