//! Reading ordered records from a text source

use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one record per line, in order
///
/// Line terminators (`\n`, `\r\n`) are stripped. Blank lines are records
/// too; an empty file yields no records.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        records.push(line?);
    }
    Ok(records)
}

/// [`read_records`] over a file on disk
pub fn read_records_from(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    read_records(BufReader::new(file))
}
