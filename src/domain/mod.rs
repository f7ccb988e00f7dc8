//! Core domain models for eggnog2gbk
//!
//! This module contains the fundamental types used throughout the application:
//! - Feature locations and strands
//! - Feature table entries and qualifiers
//! - Species information shared across records
//! - GenBank records

mod feature;
mod location;
mod record;
mod species;

pub use feature::{Feature, Qualifier};
pub use location::{Location, Strand};
pub use record::{GenbankRecord, DEFAULT_MOLECULE_TYPE, DEFAULT_TOPOLOGY, UNKNOWN_DIVISION};
pub use species::SpeciesInfo;
