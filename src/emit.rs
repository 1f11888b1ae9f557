//! JSON-lines record emission

use std::io::Write;

use serde::Serialize;

use dumpscan_core::Result;

/// Write one JSON object per record to the given writer.
///
/// `pretty` switches to indented JSON (one object per block, still one
/// record at a time) for human inspection.
pub fn emit_records<T: Serialize, W: Write>(records: &[T], pretty: bool, out: &mut W) -> Result<()> {
    for record in records {
        let line = if pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}
