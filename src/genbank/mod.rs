//! GenBank output
//!
//! This module provides:
//! - GenbankWriter for streaming records in GenBank flat file format
//! - File output helper

mod writer;

pub use writer::{format_qualifier, locus_line, GenbankWriter};

use crate::domain::GenbankRecord;
use crate::error::IoError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write all records to a GenBank file, replacing any existing file
pub fn write_genbank_file(path: &Path, records: &[GenbankRecord]) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::write(path, e))?;
    let mut writer = GenbankWriter::new(BufWriter::new(file));
    writer
        .write_records(records)
        .map_err(|e| IoError::write(path, e))?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote GenBank file");
    Ok(())
}

/// Render records to a string
pub fn to_genbank_string(records: &[GenbankRecord]) -> String {
    let mut writer = GenbankWriter::new(Vec::new());
    // Writing into a Vec cannot fail
    let _ = writer.write_records(records);
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}
