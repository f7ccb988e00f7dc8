//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: Issues with FASTA, annotation, ontology or metadata parsing
//! - RemoteError: Issues with EBI / Gene Ontology communication
//! - ConfigError: Issues with CLI configuration
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input file parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Remote service errors
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to input file parsing
#[derive(Error, Debug)]
pub enum ParseError {
    /// FASTA content is malformed
    #[error("failed to parse FASTA in {path}: {message}")]
    Fasta { path: PathBuf, message: String },

    /// eggNOG-mapper table is malformed
    #[error("failed to parse annotation table {path} at line {line}: {message}")]
    Annotation {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Metadata TOML is malformed
    #[error("failed to parse TOML in {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Gene Ontology file holds no terms
    #[error("no Gene Ontology terms found in {source_name}")]
    EmptyOntology { source_name: String },
}

/// Errors related to remote services
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Species name unknown to the taxonomy service
    #[error("species '{species}' not found in {service}")]
    SpeciesNotFound { species: String, service: String },

    /// Network request failed
    #[error("failed to fetch '{resource}' from {service}: {message}")]
    NetworkError {
        resource: String,
        service: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {service}")]
    RateLimitExceeded { service: String },

    /// Invalid response from service
    #[error("invalid response from {service} for '{resource}': {message}")]
    InvalidResponse {
        resource: String,
        service: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{resource}' from {service}")]
    Timeout { resource: String, service: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Input path is missing or not a regular file
    #[error("{path} is not a valid path file.")]
    InvalidPath { path: PathBuf },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read an input file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates a new Fasta error
    pub fn fasta(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ParseError::Fasta {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new Annotation error
    pub fn annotation(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        ParseError::Annotation {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates a new Metadata error
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ParseError::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Attaches a path to an error produced from in-memory content
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self {
            ParseError::Fasta { message, .. } => ParseError::Fasta { path, message },
            ParseError::Annotation { line, message, .. } => {
                ParseError::Annotation { path, line, message }
            }
            ParseError::Metadata { message, .. } => ParseError::Metadata { path, message },
            other => other,
        }
    }
}

impl RemoteError {
    /// Creates a new SpeciesNotFound error
    pub fn species_not_found(species: impl Into<String>, service: impl Into<String>) -> Self {
        RemoteError::SpeciesNotFound {
            species: species.into(),
            service: service.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        resource: impl Into<String>,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RemoteError::NetworkError {
            resource: resource.into(),
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        resource: impl Into<String>,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RemoteError::InvalidResponse {
            resource: resource.into(),
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(resource: impl Into<String>, service: impl Into<String>) -> Self {
        RemoteError::Timeout {
            resource: resource.into(),
            service: service.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidPath error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        ConfigError::InvalidPath { path: path.into() }
    }
}

impl IoError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_message() {
        let err = ConfigError::invalid_path("genome.fna");
        assert_eq!(format!("{}", err), "genome.fna is not a valid path file.");
    }

    #[test]
    fn test_parse_error_fasta() {
        let err = ParseError::fasta("/data/genes.fna", "sequence before header");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse FASTA"));
        assert!(msg.contains("sequence before header"));
    }

    #[test]
    fn test_parse_error_annotation_line() {
        let err = ParseError::annotation("ann.tsv", 12, "empty query name");
        let msg = format!("{}", err);
        assert!(msg.contains("line 12"));
        assert!(msg.contains("empty query name"));
    }

    #[test]
    fn test_parse_error_with_path() {
        let err = ParseError::fasta("", "bad").with_path("/tmp/prot.faa");
        assert!(format!("{}", err).contains("/tmp/prot.faa"));
    }

    #[test]
    fn test_remote_error_species_not_found() {
        let err = RemoteError::species_not_found("Homo fictus", "EBI taxonomy");
        let msg = format!("{}", err);
        assert!(msg.contains("species 'Homo fictus' not found"));
        assert!(msg.contains("EBI taxonomy"));
    }

    #[test]
    fn test_remote_error_timeout() {
        let err = RemoteError::timeout("go-basic.obo", "Gene Ontology");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("go-basic.obo"));
    }

    #[test]
    fn test_io_error_write() {
        let err = IoError::write(
            "/out.gbk",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write /out.gbk"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::ConflictingOptions {
            message: "--quiet and --verbose cannot be used together".to_string(),
        }
        .into();
        assert!(format!("{}", app_err).contains("conflicting options"));
    }

    #[test]
    fn test_app_error_from_remote_error() {
        let app_err: AppError = RemoteError::network_error("x", "EBI", "refused").into();
        assert!(format!("{}", app_err).contains("refused"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ParseError::EmptyOntology {
            source_name: "go.obo".to_string(),
        };
        assert!(format!("{:?}", err).contains("EmptyOntology"));
    }
}
