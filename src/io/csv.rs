use std::{fs::File, path::Path};

use polars::{frame::DataFrame, io::SerWriter, prelude::CsvWriter};

use crate::error::Result;

/// Write a DataFrame to a CSV file.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    CsvWriter::new(file).finish(df)?;
    log::debug!("[io::csv] wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

/// Write a DataFrame to a CSV string.
pub fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer).finish(df)?;
    String::from_utf8(buffer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
