//! Metadata TOML reader
//!
//! Keys mirror [`SpeciesInfo`] fields:
//!
//! ```toml
//! description = "Ectocarpus sp. Ec32 genome"
//! topology = "linear"
//! isolate = "Ec32"
//! mol_type = "genomic DNA"
//! taxonomy = ["Eukaryota", "Stramenopiles", "Phaeophyceae"]
//! ```

use crate::domain::SpeciesInfo;
use crate::error::{AppError, IoError, ParseError};
use std::path::Path;

/// Parse metadata TOML content
pub fn parse_metadata(content: &str) -> Result<SpeciesInfo, ParseError> {
    toml::from_str(content).map_err(|e| ParseError::metadata("", e.to_string()))
}

/// Read and parse a metadata file
pub fn read_metadata(path: &Path) -> Result<SpeciesInfo, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    Ok(parse_metadata(&content).map_err(|e| e.with_path(path))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata() {
        let content = r#"
description = "Ectocarpus genome"
isolate = "Ec32"
mol_type = "genomic DNA"
keywords = ["brown alga"]
taxonomy = ["Eukaryota", "Stramenopiles"]
"#;
        let info = parse_metadata(content).unwrap();
        assert_eq!(info.description.as_deref(), Some("Ectocarpus genome"));
        assert_eq!(info.isolate.as_deref(), Some("Ec32"));
        assert_eq!(info.keywords, Some(vec!["brown alga".to_string()]));
        assert_eq!(info.taxonomy.as_ref().map(Vec::len), Some(2));
        assert!(info.db_xref.is_none());
    }

    #[test]
    fn test_parse_empty_metadata() {
        assert_eq!(parse_metadata("").unwrap(), SpeciesInfo::default());
    }

    #[test]
    fn test_unknown_key_is_error() {
        let err = parse_metadata("colour = \"brown\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse TOML"));
    }

    #[test]
    fn test_wrong_type_is_error() {
        assert!(parse_metadata("keywords = \"single\"").is_err());
    }
}
