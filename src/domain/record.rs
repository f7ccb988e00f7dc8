//! GenBank record structure

use super::Feature;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default molecule type written on the LOCUS line
pub const DEFAULT_MOLECULE_TYPE: &str = "DNA";

/// Default topology written on the LOCUS line
pub const DEFAULT_TOPOLOGY: &str = "linear";

/// Division used when the taxonomy gave none
pub const UNKNOWN_DIVISION: &str = "UNK";

/// One GenBank entry (a single contig or gene sequence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenbankRecord {
    /// LOCUS name
    pub name: String,
    pub accession: String,
    /// DEFINITION text
    pub description: String,
    /// Nucleotide sequence as read from the FASTA file
    pub sequence: String,
    pub molecule_type: String,
    pub topology: String,
    pub division: String,
    pub date: NaiveDate,
    pub keywords: Vec<String>,
    pub source: Option<String>,
    pub organism: Option<String>,
    pub taxonomy: Vec<String>,
    pub features: Vec<Feature>,
}

impl GenbankRecord {
    /// Creates a record with default header values
    pub fn new(name: impl Into<String>, sequence: impl Into<String>, date: NaiveDate) -> Self {
        let name = name.into();
        Self {
            accession: name.clone(),
            name,
            description: String::new(),
            sequence: sequence.into(),
            molecule_type: DEFAULT_MOLECULE_TYPE.to_string(),
            topology: DEFAULT_TOPOLOGY.to_string(),
            division: UNKNOWN_DIVISION.to_string(),
            date,
            keywords: Vec::new(),
            source: None,
            organism: None,
            taxonomy: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Sequence length in bases
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Features of the given kind
    pub fn features_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Feature> + 'a {
        self.features.iter().filter(move |f| f.kind == kind)
    }
}
