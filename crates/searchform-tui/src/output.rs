//! Record hand-off.
//!
//! Writes the records collected during a session for whatever runs next.
//! Called after the terminal is restored so output lands on the normal screen.

use std::io::Write;

use clap::ValueEnum;
use searchform_app::SearchRecord;

use crate::TerminalError;

/// How records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One numbered line per record.
    #[default]
    Text,
    /// A pretty-printed JSON array of `{keyword, location}` objects.
    Json,
}

/// Write `records` to `out` in the given format.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[SearchRecord],
    format: OutputFormat,
) -> Result<(), TerminalError> {
    match format {
        OutputFormat::Text => {
            for (index, record) in records.iter().enumerate() {
                writeln!(out, "{}. {record}", index + 1)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}
