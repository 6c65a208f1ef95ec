use crate::report::ReportData;
use std::io::Write;

/// Write one tab-separated line per procedure:
///
/// `    LOOKUP\t       2\t200.0 us/op\t(50th: 200.0 us)\t(90th: 280.0 us)`
///
/// The percentile columns only appear when the report carries them.
pub fn render_text_report<W: Write>(data: &ReportData, out: &mut W) -> anyhow::Result<()> {
    for row in &data.procs {
        write!(
            out,
            "{:>10}\t{:8}\t{:.1} us/op\t",
            row.label, row.count, row.mean_us
        )?;
        if let (Some(p50), Some(p90)) = (row.p50_us, row.p90_us) {
            write!(out, "(50th: {:.1} us)\t(90th: {:.1} us)", p50, p90)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
