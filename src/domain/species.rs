//! Species-level information shared by every record of a run
//!
//! Filled from the EBI taxonomy service and overlaid with the optional
//! metadata TOML file.

use serde::{Deserialize, Serialize};

/// Organism description and source-feature qualifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeciesInfo {
    /// DEFINITION line text
    pub description: Option<String>,
    /// ORGANISM line text
    pub organism: Option<String>,
    /// SOURCE line text
    pub source: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// Lineage from the root, without the organism itself
    pub taxonomy: Option<Vec<String>>,
    /// NCBI taxon reference such as `taxon:9606`
    pub db_xref: Option<String>,
    /// Three-letter GenBank division (`PLN`, `MAM`, ...)
    pub data_file_division: Option<String>,
    pub topology: Option<String>,
    pub isolate: Option<String>,
    pub cell_type: Option<String>,
    pub dev_stage: Option<String>,
    pub mol_type: Option<String>,
}

impl SpeciesInfo {
    /// Minimal information derived from the species name alone
    pub fn from_name(species: &str) -> Self {
        Self {
            description: Some(format!("{} genome", species)),
            organism: Some(species.to_string()),
            source: Some(species.to_string()),
            keywords: Some(vec![species.to_string()]),
            ..Self::default()
        }
    }

    /// Overlays every field set in `other` onto `self`
    pub fn merge(&mut self, other: SpeciesInfo) {
        fn overlay<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        overlay(&mut self.description, other.description);
        overlay(&mut self.organism, other.organism);
        overlay(&mut self.source, other.source);
        overlay(&mut self.keywords, other.keywords);
        overlay(&mut self.taxonomy, other.taxonomy);
        overlay(&mut self.db_xref, other.db_xref);
        overlay(&mut self.data_file_division, other.data_file_division);
        overlay(&mut self.topology, other.topology);
        overlay(&mut self.isolate, other.isolate);
        overlay(&mut self.cell_type, other.cell_type);
        overlay(&mut self.dev_stage, other.dev_stage);
        overlay(&mut self.mol_type, other.mol_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        let info = SpeciesInfo::from_name("Escherichia coli");
        assert_eq!(info.description.as_deref(), Some("Escherichia coli genome"));
        assert_eq!(info.organism.as_deref(), Some("Escherichia coli"));
        assert_eq!(info.keywords, Some(vec!["Escherichia coli".to_string()]));
        assert!(info.taxonomy.is_none());
    }

    #[test]
    fn test_merge_overlays_set_fields_only() {
        let mut base = SpeciesInfo::from_name("Escherichia coli");
        base.db_xref = Some("taxon:562".to_string());

        let overlay = SpeciesInfo {
            isolate: Some("K-12".to_string()),
            description: Some("E. coli assembly".to_string()),
            ..SpeciesInfo::default()
        };
        base.merge(overlay);

        assert_eq!(base.description.as_deref(), Some("E. coli assembly"));
        assert_eq!(base.isolate.as_deref(), Some("K-12"));
        assert_eq!(base.db_xref.as_deref(), Some("taxon:562"));
        assert_eq!(base.organism.as_deref(), Some("Escherichia coli"));
    }
}
