use clap::{Parser, ValueEnum};
use nfs_latency::Result;
use nfs_latency::config::{Input, OutputFormat, RunConfig};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Tab-separated table
    Text,
    /// Pretty-printed JSON report
    Json,
}

/// Per-procedure NFS latencies from tshark output.
///
/// Gather data with `tshark -i lo -f tcp -w nfs.pcap`, then run
/// `tshark -Tfields -e nfs.procedure_v3 -e rpc.time -r nfs.pcap '(nfs && rpc.time)' | nfs-latency`.
#[derive(Parser)]
#[command(name = "nfs-latency")]
#[command(version, long_about = None)]
struct Cli {
    /// Trace file (tshark field output); standard input when absent or `-`.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Report median and 90th percentile.
    #[arg(long)]
    stats: bool,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Verbose diagnostics on stderr.
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "warn" };
    let from_env = std::env::var("RUST_LOG").ok();
    let mut filter = match &from_env {
        Some(spec) => EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new(level)),
        None => EnvFilter::new(level),
    };
    // Rejected-line warnings stay visible unless RUST_LOG names this crate.
    if !from_env.is_some_and(|spec| spec.contains("nfs_latency")) {
        filter = filter.add_directive(format!("nfs_latency={}", level).parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = RunConfig {
        input: Input::from_arg(cli.input),
        percentiles: cli.stats,
        format: match cli.format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        },
    };

    let stdout = std::io::stdout();
    let ingest = nfs_latency::run(&config, &mut stdout.lock())?;
    if ingest.rejected > 0 {
        tracing::info!(
            rejected = ingest.rejected,
            lines = ingest.lines,
            "skipped unparseable lines"
        );
    }

    Ok(())
}
