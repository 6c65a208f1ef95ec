//! Parsing for tshark `nfs.procedure_v3` / `rpc.time` field output.

pub mod parse;
pub mod read;
pub mod sample;

pub use parse::{LineError, parse_line};
pub use read::{IngestStats, read_trace};
pub use sample::Sample;
