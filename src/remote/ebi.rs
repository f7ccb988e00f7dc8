//! EBI (ENA) taxonomy adapter
//!
//! Resolves a scientific name to its NCBI taxon id, lineage and division.
//! API endpoint: https://www.ebi.ac.uk/ena/taxonomy/rest/scientific-name/{name}

use crate::domain::SpeciesInfo;
use crate::error::RemoteError;
use crate::remote::{HttpClient, TaxonomySource};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

/// ENA taxonomy REST base URL
const EBI_TAXONOMY_URL: &str = "https://www.ebi.ac.uk/ena/taxonomy/rest/scientific-name";

/// Service name used in errors
const SERVICE_NAME: &str = "EBI taxonomy";

/// EBI taxonomy adapter
pub struct EbiTaxonomy {
    client: HttpClient,
    base_url: String,
}

/// One hit of the scientific-name search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaxonHit {
    tax_id: Option<String>,
    lineage: Option<String>,
    division: Option<String>,
}

impl EbiTaxonomy {
    /// Create a new EBI adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, EBI_TAXONOMY_URL)
    }

    /// Create an adapter against another ENA-compatible endpoint
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the URL for a species, percent-encoding the name
    fn build_url(&self, species: &str) -> Result<String, RemoteError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            RemoteError::invalid_response(species, SERVICE_NAME, format!("bad base URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                RemoteError::invalid_response(species, SERVICE_NAME, "base URL cannot have a path")
            })?
            .push(species);
        Ok(url.to_string())
    }
}

/// Split an ENA lineage (`"Eukaryota; Metazoa; Chordata; "`) into ranks
fn split_lineage(lineage: &str) -> Vec<String> {
    lineage
        .split(';')
        .map(str::trim)
        .filter(|rank| !rank.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build species information from the first search hit
fn species_from_hit(species: &str, hit: TaxonHit) -> SpeciesInfo {
    let mut info = SpeciesInfo::from_name(species);
    info.db_xref = hit.tax_id.map(|id| format!("taxon:{}", id.trim()));
    info.taxonomy = hit.lineage.as_deref().map(split_lineage);
    info.data_file_division = hit.division.filter(|d| !d.trim().is_empty());
    info
}

#[async_trait]
impl TaxonomySource for EbiTaxonomy {
    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    async fn lookup(&self, species: &str) -> Result<SpeciesInfo, RemoteError> {
        let url = self.build_url(species)?;
        let hits: Vec<TaxonHit> = self
            .client
            .get_json(&url, species, self.service_name())
            .await?;

        let hit = hits
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::species_not_found(species, SERVICE_NAME))?;

        let info = species_from_hit(species, hit);
        tracing::info!(
            species,
            db_xref = info.db_xref.as_deref().unwrap_or("-"),
            "resolved taxonomy"
        );
        Ok(info)
    }
}
