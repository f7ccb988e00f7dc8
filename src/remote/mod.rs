//! Remote data sources
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - EBI taxonomy adapter
//! - Gene Ontology release download

mod client;
mod ebi;
mod gene_ontology;

pub use client::HttpClient;
pub use ebi::EbiTaxonomy;
pub use gene_ontology::{fetch_gene_ontology, GO_BASIC_URL};

use crate::domain::SpeciesInfo;
use crate::error::RemoteError;
use async_trait::async_trait;

/// Trait for taxonomy lookups
#[async_trait]
pub trait TaxonomySource: Send + Sync {
    /// Get the service name
    fn service_name(&self) -> &'static str;

    /// Resolve a scientific name to species information
    async fn lookup(&self, species: &str) -> Result<SpeciesInfo, RemoteError>;
}
