//! FASTA reader
//!
//! The record id is the first whitespace-delimited word of the header;
//! the rest of the header is kept as the description. Sequence lines are
//! concatenated with all whitespace removed.

use crate::error::{AppError, IoError, ParseError};
use std::path::Path;

/// A single FASTA entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

/// Parse FASTA content
pub fn parse_fasta(content: &str) -> Result<Vec<FastaRecord>, ParseError> {
    let mut records: Vec<FastaRecord> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix('>') {
            let header = header.trim();
            let (id, description) = match header.split_once(char::is_whitespace) {
                Some((id, rest)) => (id, rest.trim()),
                None => (header, ""),
            };
            if id.is_empty() {
                return Err(ParseError::fasta(
                    "",
                    format!("empty record id on line {}", index + 1),
                ));
            }
            records.push(FastaRecord {
                id: id.to_string(),
                description: description.to_string(),
                sequence: String::new(),
            });
            continue;
        }

        // `;` lines are legacy comments
        if line.trim().is_empty() || line.starts_with(';') {
            continue;
        }

        match records.last_mut() {
            Some(record) => record
                .sequence
                .extend(line.chars().filter(|c| !c.is_whitespace())),
            None => {
                return Err(ParseError::fasta(
                    "",
                    format!("sequence data before first header on line {}", index + 1),
                ))
            }
        }
    }

    Ok(records)
}

/// Read and parse a FASTA file
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    let records = parse_fasta(&content).map_err(|e| e.with_path(path))?;
    tracing::debug!(path = %path.display(), records = records.len(), "read FASTA file");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_records() {
        let content = ">gene_001 putative kinase\nATGAAA\nCCCTGA\n>gene_002\natgttt\n";
        let records = parse_fasta(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "gene_001");
        assert_eq!(records[0].description, "putative kinase");
        assert_eq!(records[0].sequence, "ATGAAACCCTGA");
        assert_eq!(records[1].id, "gene_002");
        assert_eq!(records[1].sequence, "atgttt");
    }

    #[test]
    fn test_parse_strips_inner_whitespace_and_blank_lines() {
        let content = ">p1\nMKV LLA\n\n  GHT\r\n";
        let records = parse_fasta(content).unwrap();
        assert_eq!(records[0].sequence, "MKVLLAGHT");
    }

    #[test]
    fn test_parse_empty_sequence() {
        let records = parse_fasta(">empty\n>next\nAC\n").unwrap();
        assert_eq!(records[0].sequence, "");
        assert_eq!(records[1].sequence, "AC");
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_fasta("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_data_before_header() {
        let err = parse_fasta("ACGT\n>g1\nAC\n").unwrap_err();
        assert!(err.to_string().contains("before first header"));
    }

    #[test]
    fn test_parse_empty_id() {
        let err = parse_fasta(">\nACGT\n").unwrap_err();
        assert!(err.to_string().contains("empty record id"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_fasta(Path::new("/nonexistent/genes.fna")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
