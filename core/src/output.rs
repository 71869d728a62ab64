//! CSV output layer.
//!
//! Each dataset is written in a single buffered pass: one header row,
//! then one formatted line per record. Existing files are replaced.
//! Null fields serialize as the empty string; boolean flags as Yes/No.

use crate::error::GenResult;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One dataset row that knows its column names and its delimited
/// encoding. Implementations write the trailing newline themselves.
pub trait CsvRecord {
    /// Column names, in emission order.
    fn header() -> &'static [&'static str];

    /// Append one comma-delimited row, newline included.
    fn write_row(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Create the output directory if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> GenResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write a full dataset, replacing any existing file of the same name.
pub fn write_dataset<T: CsvRecord>(path: &Path, rows: &[T]) -> GenResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{}", T::header().join(","))?;
    for row in rows {
        row.write_row(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// Yes/No encoding used by every boolean column.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Round to the storage precision of a column. Derived flags are
/// computed AFTER this, so a flag can never disagree with the number
/// that actually lands in the file.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
