//! CLI argument parsing module for eggnog2gbk

use crate::error::ConfigError;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Build a GenBank file from FASTA sequences and eggNOG-mapper annotations
#[derive(Parser, Debug, Clone)]
#[command(
    name = "eggnog2gbk",
    version,
    about = "Build a GenBank file from FASTA sequences and eggNOG-mapper annotations"
)]
pub struct CliArgs {
    // Inputs
    /// Nucleotide FASTA file (one record per gene or contig)
    #[arg(short = 'f', long = "fasta-nucleotide")]
    pub fasta_nucleotide: PathBuf,

    /// Protein FASTA file (ids matching the nucleotide file)
    #[arg(short = 'p', long = "fasta-protein")]
    pub fasta_protein: PathBuf,

    /// eggNOG-mapper annotation file (.emapper.annotations)
    #[arg(short = 'a', long)]
    pub annotation: PathBuf,

    /// Species scientific name, as known to the EBI taxonomy
    #[arg(short = 'n', long = "name")]
    pub species: String,

    /// Output GenBank file
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Gene Ontology go-basic.obo file (downloaded when not given)
    #[arg(short = 'g', long)]
    pub gobasic: Option<PathBuf>,

    /// TOML file with extra species and source-feature information
    #[arg(short = 'm', long)]
    pub metadata: Option<PathBuf>,

    /// Do not query the EBI taxonomy service
    #[arg(long)]
    pub offline: bool,

    // Output options
    /// Print the run summary in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Input files that must exist before anything runs
    pub fn input_files(&self) -> Vec<&Path> {
        let mut files = vec![
            self.fasta_nucleotide.as_path(),
            self.fasta_protein.as_path(),
            self.annotation.as_path(),
        ];
        files.extend(self.gobasic.as_deref());
        files.extend(self.metadata.as_deref());
        files
    }

    /// Check option consistency and input paths
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        for path in self.input_files() {
            if !is_valid_file(path) {
                return Err(ConfigError::invalid_path(path));
            }
        }
        Ok(())
    }
}

/// True when `path` exists and is a regular file
pub fn is_valid_file(path: &Path) -> bool {
    path.is_file()
}
