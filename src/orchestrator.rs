//! Conversion orchestrator coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: read → fetch → assemble → write
//! - Concurrent taxonomy lookup and Gene Ontology download
//! - Offline mode and metadata overrides
//! - Per-gene warnings with the run continuing

use crate::assembly::{assemble, AssemblyInput, AssemblyStats, Warning};
use crate::cli::CliArgs;
use crate::domain::SpeciesInfo;
use crate::error::AppError;
use crate::genbank::write_genbank_file;
use crate::parser::{read_annotations, read_fasta, read_metadata, read_obo, GeneOntology};
use crate::progress::Progress;
use crate::remote::{fetch_gene_ontology, EbiTaxonomy, HttpClient, TaxonomySource, GO_BASIC_URL};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// Orchestrator for coordinating the conversion workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// HTTP client for remote requests
    client: HttpClient,
    /// Taxonomy lookup used unless running offline
    taxonomy: Box<dyn TaxonomySource>,
    /// Where go-basic.obo is downloaded from when no local file is given
    go_url: String,
    /// Date written on every LOCUS line
    date: NaiveDate,
}

/// Result of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Written GenBank file
    pub output: PathBuf,
    pub species: String,
    /// `db_xref` taxon reference, when known
    pub taxon: Option<String>,
    pub stats: AssemblyStats,
    pub warnings: Vec<Warning>,
}

impl RunSummary {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        let taxonomy = Box::new(EbiTaxonomy::new(client.clone()));
        Ok(Self::with_taxonomy(args, client, taxonomy))
    }

    /// Create an orchestrator with a custom taxonomy source (for testing)
    pub fn with_taxonomy(
        args: CliArgs,
        client: HttpClient,
        taxonomy: Box<dyn TaxonomySource>,
    ) -> Self {
        Self {
            args,
            client,
            taxonomy,
            go_url: GO_BASIC_URL.to_string(),
            date: chrono::Local::now().date_naive(),
        }
    }

    /// Override the LOCUS date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Override the Gene Ontology download URL
    pub fn with_go_url(mut self, url: impl Into<String>) -> Self {
        self.go_url = url.into();
        self
    }

    /// Run the conversion workflow
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        self.run_with_progress(!self.args.quiet && !self.args.json)
            .await
    }

    /// Run the conversion workflow with optional progress display
    pub async fn run_with_progress(&self, show_progress: bool) -> Result<RunSummary, AppError> {
        let mut progress = Progress::new(show_progress);

        // Step 1: Read local inputs
        progress.spinner("Reading FASTA and annotation files...");
        let nucleotides = read_fasta(&self.args.fasta_nucleotide)?;
        let proteins = read_fasta(&self.args.fasta_protein)?;
        let annotations = read_annotations(&self.args.annotation)?;
        let metadata = match &self.args.metadata {
            Some(path) => Some(read_metadata(path)?),
            None => None,
        };
        tracing::info!(
            sequences = nucleotides.len(),
            proteins = proteins.len(),
            annotated = annotations.len(),
            "inputs read"
        );

        // Step 2: Gene Ontology and taxonomy, fetched concurrently when remote
        progress.set_message("Loading Gene Ontology and taxonomy...");
        let (ontology, mut species) = tokio::try_join!(self.load_ontology(), self.load_species())?;
        if let Some(metadata) = metadata {
            species.merge(metadata);
        }
        progress.finish_and_clear();

        // Step 3: Assemble records
        progress.spinner("Assembling GenBank records...");
        let assembly = assemble(AssemblyInput {
            nucleotides: &nucleotides,
            proteins: &proteins,
            annotations: &annotations,
            ontology: &ontology,
            species: &species,
            date: self.date,
        });
        for warning in &assembly.warnings {
            tracing::warn!("{}", warning);
        }

        // Step 4: Write output
        progress.set_message("Writing GenBank file...");
        write_genbank_file(&self.args.output, &assembly.records)?;
        progress.finish_and_clear();

        Ok(RunSummary {
            output: self.args.output.clone(),
            species: self.args.species.clone(),
            taxon: species.db_xref.clone(),
            stats: assembly.stats,
            warnings: assembly.warnings,
        })
    }

    async fn load_ontology(&self) -> Result<GeneOntology, AppError> {
        match &self.args.gobasic {
            Some(path) => read_obo(path),
            None => fetch_gene_ontology(&self.client, &self.go_url).await,
        }
    }

    async fn load_species(&self) -> Result<SpeciesInfo, AppError> {
        if self.args.offline {
            tracing::debug!("offline mode, taxonomy built from species name");
            return Ok(SpeciesInfo::from_name(&self.args.species));
        }
        Ok(self.taxonomy.lookup(&self.args.species).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use async_trait::async_trait;
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct FixedTaxonomy;

    #[async_trait]
    impl TaxonomySource for FixedTaxonomy {
        fn service_name(&self) -> &'static str {
            "fixed"
        }

        async fn lookup(&self, species: &str) -> Result<SpeciesInfo, RemoteError> {
            let mut info = SpeciesInfo::from_name(species);
            info.db_xref = Some("taxon:562".to_string());
            info.taxonomy = Some(vec!["Bacteria".to_string()]);
            info.data_file_division = Some("BCT".to_string());
            Ok(info)
        }
    }

    struct FailingTaxonomy;

    #[async_trait]
    impl TaxonomySource for FailingTaxonomy {
        fn service_name(&self) -> &'static str {
            "failing"
        }

        async fn lookup(&self, species: &str) -> Result<SpeciesInfo, RemoteError> {
            Err(RemoteError::species_not_found(species, "failing"))
        }
    }

    fn write_inputs(dir: &Path) {
        fs::write(dir.join("g.fna"), ">g2\nATGAAATAA\n>g1\nATGCCCTAA\n").unwrap();
        fs::write(dir.join("g.faa"), ">g1\nMP\n>g2\nMK\n").unwrap();
        fs::write(
            dir.join("g.tsv"),
            "g1\ts\t0\t1\tlvl\tabc\tGO:0005575\tec:1.1.1.1\n",
        )
        .unwrap();
        fs::write(
            dir.join("go.obo"),
            "[Term]\nid: GO:0005575\nnamespace: cellular_component\n",
        )
        .unwrap();
    }

    fn args(dir: &TempDir, extra: &[&str]) -> CliArgs {
        let p = |name: &str| dir.path().join(name).to_string_lossy().into_owned();
        let mut argv = vec![
            "eggnog2gbk".to_string(),
            "-f".to_string(),
            p("g.fna"),
            "-p".to_string(),
            p("g.faa"),
            "-a".to_string(),
            p("g.tsv"),
            "-g".to_string(),
            p("go.obo"),
            "-n".to_string(),
            "Escherichia coli".to_string(),
            "-o".to_string(),
            p("out.gbk"),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        CliArgs::parse_from(argv)
    }

    fn orchestrator(args: CliArgs, taxonomy: Box<dyn TaxonomySource>) -> Orchestrator {
        Orchestrator::with_taxonomy(args, HttpClient::new().unwrap(), taxonomy)
            .with_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
    }

    #[tokio::test]
    async fn test_run_writes_genbank() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());

        let summary = orchestrator(args(&dir, &[]), Box::new(FixedTaxonomy))
            .run_with_progress(false)
            .await
            .unwrap();

        assert_eq!(summary.stats.records, 2);
        assert_eq!(summary.stats.annotated_cds, 1);
        assert_eq!(summary.taxon.as_deref(), Some("taxon:562"));
        assert!(!summary.has_warnings());

        let gbk = fs::read_to_string(dir.path().join("out.gbk")).unwrap();
        assert!(gbk.starts_with("LOCUS       g1 "));
        assert!(gbk.contains("BCT 02-JAN-2024"));
        assert!(gbk.contains("/db_xref=\"taxon:562\""));
        assert!(gbk.contains("/go_component=\"GO:0005575\""));
        assert!(gbk.contains("/EC_number=\"1.1.1.1\""));
        assert_eq!(gbk.matches("\n//\n").count(), 2);
        assert!(gbk.find("LOCUS       g1").unwrap() < gbk.find("LOCUS       g2").unwrap());
    }

    #[tokio::test]
    async fn test_offline_skips_taxonomy() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());

        let summary = orchestrator(args(&dir, &["--offline"]), Box::new(FailingTaxonomy))
            .run_with_progress(false)
            .await
            .unwrap();
        assert!(summary.taxon.is_none());

        let gbk = fs::read_to_string(dir.path().join("out.gbk")).unwrap();
        assert!(gbk.contains(" UNK 02-JAN-2024"));
    }

    #[tokio::test]
    async fn test_taxonomy_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());

        let err = orchestrator(args(&dir, &[]), Box::new(FailingTaxonomy))
            .run_with_progress(false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(!dir.path().join("out.gbk").exists());
    }

    #[tokio::test]
    async fn test_unreachable_ontology_download_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());

        let mut cli = args(&dir, &["--offline"]);
        cli.gobasic = None;
        let client = HttpClient::new().unwrap().with_max_retries(0);
        let err = Orchestrator::with_taxonomy(cli, client, Box::new(FixedTaxonomy))
            .with_go_url("http://127.0.0.1:9/go-basic.obo")
            .run_with_progress(false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Gene Ontology"));
    }

    #[tokio::test]
    async fn test_metadata_overrides_taxonomy() {
        let dir = tempfile::tempdir().unwrap();
        write_inputs(dir.path());
        let meta = dir.path().join("meta.toml");
        fs::write(&meta, "data_file_division = \"ENV\"\nisolate = \"K-12\"\n").unwrap();

        let mut cli = args(&dir, &[]);
        cli.metadata = Some(meta);
        orchestrator(cli, Box::new(FixedTaxonomy))
            .run_with_progress(false)
            .await
            .unwrap();

        let gbk = fs::read_to_string(dir.path().join("out.gbk")).unwrap();
        assert!(gbk.contains(" ENV 02-JAN-2024"));
        assert!(gbk.contains("/isolate=\"K-12\""));
    }
}
