//! Run configuration handed from the command line to the library.

use std::path::PathBuf;

/// Where the trace is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// `None` and `-` both select standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(p) if p.as_os_str() != "-" => Input::Path(p),
            _ => Input::Stdin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub input: Input,
    /// Report 50th and 90th percentiles alongside the mean.
    pub percentiles: bool,
    pub format: OutputFormat,
}
