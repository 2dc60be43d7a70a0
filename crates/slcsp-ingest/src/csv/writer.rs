//! CSV output.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::Result;

/// Write a header row followed by `rows`.
pub fn write_csv_table<W: Write>(
    writer: W,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
