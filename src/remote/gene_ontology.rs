//! Gene Ontology release download
//!
//! Used when no local go-basic.obo file is given.

use crate::error::AppError;
use crate::parser::{load_obo, GeneOntology};
use crate::remote::HttpClient;

/// Current go-basic release
pub const GO_BASIC_URL: &str = "http://purl.obolibrary.org/obo/go/go-basic.obo";

const SERVICE_NAME: &str = "Gene Ontology";

/// Download and parse an OBO file from `url`, normally [`GO_BASIC_URL`]
pub async fn fetch_gene_ontology(client: &HttpClient, url: &str) -> Result<GeneOntology, AppError> {
    tracing::info!(url, "downloading Gene Ontology");
    let content = client.get_text(url, "go-basic.obo", SERVICE_NAME).await?;
    let ontology = load_obo(&content, url)?;
    tracing::debug!(terms = ontology.term_count(), "parsed Gene Ontology");
    Ok(ontology)
}
