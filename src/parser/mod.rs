//! Input file readers
//!
//! This module provides readers for:
//! - FASTA sequence files (nucleotide and protein)
//! - eggNOG-mapper annotation tables
//! - Gene Ontology OBO files
//! - Metadata TOML files

pub mod annotation;
pub mod fasta;
pub mod metadata;
pub mod obo;

pub use annotation::{parse_annotations, read_annotations, Annotation, AnnotationTable};
pub use fasta::{parse_fasta, read_fasta, FastaRecord};
pub use metadata::{parse_metadata, read_metadata};
pub use obo::{load_obo, parse_obo, read_obo, GeneOntology, Namespace};
