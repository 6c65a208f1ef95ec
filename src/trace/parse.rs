use crate::trace::sample::Sample;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Split on the first tab only; anything after it, further tabs included,
// belongs to the time field.
static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\t]*)\t(.*)$").expect("line regex is valid"));

/// Why a trace line contributed no samples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("malformed line, expected <procedures>\\t<times>")]
    Malformed,

    #[error("bad procedure number {token:?}")]
    BadProcedure { token: String },

    #[error("bad elapsed time {token:?}")]
    BadElapsed { token: String },

    #[error("len(procs) != len(times): {procs} != {times}")]
    LengthMismatch { procs: usize, times: usize },
}

/// Parse one line of tshark field output into samples.
///
/// Expected shape (one RPC reply may carry several NFS calls):
/// `3,1<TAB>0.000100,0.000200`
///
/// A line either yields all of its pairs or none of them.
pub fn parse_line(line: &str) -> Result<Vec<Sample>, LineError> {
    let line = line.strip_suffix('\n').unwrap_or(line);

    let caps = LINE_RE.captures(line).ok_or(LineError::Malformed)?;
    let (_, [proc_field, time_field]) = caps.extract();

    let procs = proc_field
        .split(',')
        .map(parse_proc)
        .collect::<Result<Vec<_>, _>>()?;
    let times = time_field
        .split(',')
        .map(parse_elapsed)
        .collect::<Result<Vec<_>, _>>()?;

    if procs.len() != times.len() {
        return Err(LineError::LengthMismatch {
            procs: procs.len(),
            times: times.len(),
        });
    }

    Ok(procs
        .into_iter()
        .zip(times)
        .map(|(proc, elapsed_s)| Sample::new(proc, elapsed_s))
        .collect())
}

fn parse_proc(token: &str) -> Result<i64, LineError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| LineError::BadProcedure {
            token: token.to_string(),
        })
}

fn parse_elapsed(token: &str) -> Result<f64, LineError> {
    let bad = || LineError::BadElapsed {
        token: token.to_string(),
    };
    let secs = token.trim().parse::<f64>().map_err(|_| bad())?;
    // rpc.time is a duration; NaN, inf and negatives cannot come from tshark.
    if !secs.is_finite() || secs < 0.0 {
        return Err(bad());
    }
    Ok(secs)
}
