use crate::report::ReportData;
use std::io::Write;

/// Write the report as pretty-printed JSON followed by a newline.
pub fn render_json_report<W: Write>(data: &ReportData, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)?;
    Ok(())
}
