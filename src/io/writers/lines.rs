use std::io::Write;

use crate::core::processing::pipeline::LineOutcome;
use crate::error::Result;
use crate::types::OutputFormat;

/// Write one result line in the requested format, newline terminated.
pub fn write_outcome<W: Write>(
    writer: &mut W,
    outcome: &LineOutcome,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", outcome.words)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, outcome)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
