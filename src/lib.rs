//! eggnog2gbk - GenBank builder library
//!
//! This library provides the core functionality for turning
//! FASTA sequences and eggNOG-mapper annotations into GenBank files:
//! - FASTA, eggNOG-mapper table, Gene Ontology OBO and metadata readers
//! - EBI taxonomy lookup and Gene Ontology download
//! - Record assembly with GO and EC qualifiers
//! - GenBank flat file writer

pub mod assembly;
pub mod cli;
pub mod domain;
pub mod error;
pub mod genbank;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod remote;
