use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::types::flight::FlightTable;
use crate::types::gen_error::GenError;

/// Writes `table` as CSV, one header row followed by one row per record.
///
/// Returns the number of records written. An empty table writes nothing.
pub fn write_csv<W: Write>(table: &FlightTable, writer: W) -> Result<usize, GenError> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in table {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(table.len())
}

/// Creates (or truncates) `path` and writes `table` to it as CSV.
pub fn export_csv(table: &FlightTable, path: &Path) -> Result<usize, GenError> {
    let file = File::create(path)
        .map_err(|e| GenError::Export(format!("failed to create {}: {}", path.display(), e)))?;
    write_csv(table, file)
}
