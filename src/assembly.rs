//! Record assembly
//!
//! Turns parsed inputs into GenBank records:
//! - one record per nucleotide sequence, in sorted id order
//! - a `source` feature carrying species qualifiers
//! - a `gene` and a `CDS` feature spanning the sequence
//! - GO terms sorted into `go_component` / `go_function` / `go_process`
//! - EC numbers as `EC_number`

use crate::domain::{Feature, GenbankRecord, Location, SpeciesInfo, UNKNOWN_DIVISION};
use crate::parser::{AnnotationTable, FastaRecord, GeneOntology, Namespace};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Non-fatal problem found while assembling a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// No protein sequence shares the nucleotide id
    MissingProtein { gene: String },
    /// GO id unknown to the ontology, even as an alternative id
    UnknownGoTerm { gene: String, term: String },
    /// Empty nucleotide sequence, record written without features
    EmptySequence { gene: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingProtein { gene } => {
                write!(f, "{}: no protein sequence, CDS written without translation", gene)
            }
            Warning::UnknownGoTerm { gene, term } => {
                write!(f, "{}: {} not found in Gene Ontology, skipped", gene, term)
            }
            Warning::EmptySequence { gene } => {
                write!(f, "{}: empty sequence, no features written", gene)
            }
        }
    }
}

/// Counters reported after a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    pub records: usize,
    /// CDS features that received at least one GO or EC qualifier
    pub annotated_cds: usize,
    pub go_terms: usize,
    pub ec_numbers: usize,
}

/// Result of assembling every record
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub records: Vec<GenbankRecord>,
    pub warnings: Vec<Warning>,
    pub stats: AssemblyStats,
}

/// Everything needed to build the records of one run
pub struct AssemblyInput<'a> {
    pub nucleotides: &'a [FastaRecord],
    pub proteins: &'a [FastaRecord],
    pub annotations: &'a AnnotationTable,
    pub ontology: &'a GeneOntology,
    pub species: &'a SpeciesInfo,
    pub date: NaiveDate,
}

/// Locus tag for a sequence id; purely numeric ids get a `gene_` prefix
pub fn locus_tag(id: &str) -> String {
    if !id.is_empty() && id.chars().all(char::is_numeric) {
        format!("gene_{}", id)
    } else {
        id.to_string()
    }
}

/// Record header and `source` feature for one sequence
pub fn contig_record(
    id: &str,
    sequence: &str,
    species: &SpeciesInfo,
    date: NaiveDate,
) -> GenbankRecord {
    let mut record = GenbankRecord::new(id, sequence, date);

    record.description = species.description.clone().unwrap_or_default();
    record.division = species
        .data_file_division
        .clone()
        .unwrap_or_else(|| UNKNOWN_DIVISION.to_string());
    if let Some(topology) = &species.topology {
        record.topology = topology.clone();
    }
    record.organism = species.organism.clone();
    record.source = species.source.clone();
    record.keywords = species.keywords.clone().unwrap_or_default();
    record.taxonomy = species.taxonomy.clone().unwrap_or_default();

    // `1..0` is not a valid location, so empty records carry no features
    if sequence.is_empty() {
        return record;
    }

    let mut source = Feature::new("source", Location::span(0, sequence.len()));
    source.push("scaffold", id);
    source.push_opt("isolate", species.isolate.as_deref());
    // db_xref carries the NCBI taxon id; Pathway Tools relies on it
    source.push_opt("db_xref", species.db_xref.as_deref());
    source.push_opt("cell_type", species.cell_type.as_deref());
    source.push_opt("dev_stage", species.dev_stage.as_deref());
    source.push_opt("mol_type", species.mol_type.as_deref());
    record.features.push(source);

    record
}

/// `gene` feature spanning the whole sequence
pub fn gene_feature(tag: &str, length: usize) -> Feature {
    Feature::new("gene", Location::span(0, length)).with_qualifier("locus_tag", tag)
}

/// GO terms of one gene grouped by namespace, in table order
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GoGroups {
    pub component: Vec<String>,
    pub function: Vec<String>,
    pub process: Vec<String>,
    pub unknown: Vec<String>,
}

impl GoGroups {
    fn len(&self) -> usize {
        self.component.len() + self.function.len() + self.process.len()
    }
}

/// Sort GO ids into namespaces; the id as written in the table is kept
pub fn group_go_terms(terms: &[String], ontology: &GeneOntology) -> GoGroups {
    let mut groups = GoGroups::default();
    for term in terms {
        match ontology.namespace(term) {
            Some(Namespace::CellularComponent) => groups.component.push(term.clone()),
            Some(Namespace::MolecularFunction) => groups.function.push(term.clone()),
            Some(Namespace::BiologicalProcess) => groups.process.push(term.clone()),
            None => groups.unknown.push(term.clone()),
        }
    }
    groups
}

/// Assemble every record of a run
pub fn assemble(input: AssemblyInput<'_>) -> Assembly {
    let mut assembly = Assembly::default();

    // Later duplicates replace earlier ones; iteration is sorted by id
    let contigs: BTreeMap<&str, &str> = input
        .nucleotides
        .iter()
        .map(|r| (r.id.as_str(), r.sequence.as_str()))
        .collect();
    let proteins: HashMap<&str, &str> = input
        .proteins
        .iter()
        .map(|r| (r.id.as_str(), r.sequence.as_str()))
        .collect();

    for (id, sequence) in contigs {
        let mut record = contig_record(id, sequence, input.species, input.date);
        if sequence.is_empty() {
            assembly.warnings.push(Warning::EmptySequence {
                gene: id.to_string(),
            });
            assembly.records.push(record);
            continue;
        }
        let tag = locus_tag(id);

        record.features.push(gene_feature(&tag, sequence.len()));

        let mut cds = Feature::new("CDS", Location::span(0, sequence.len()));
        match proteins.get(id) {
            Some(protein) => cds.push("translation", *protein),
            None => assembly.warnings.push(Warning::MissingProtein {
                gene: id.to_string(),
            }),
        }
        cds.push("locus_tag", tag.as_str());

        let mut annotated = false;
        if let Some(annotation) = input.annotations.get(id) {
            let groups = group_go_terms(&annotation.gos(), input.ontology);
            for term in &groups.unknown {
                assembly.warnings.push(Warning::UnknownGoTerm {
                    gene: id.to_string(),
                    term: term.clone(),
                });
            }
            cds.push_all(Namespace::CellularComponent.qualifier_key(), &groups.component);
            cds.push_all(Namespace::MolecularFunction.qualifier_key(), &groups.function);
            cds.push_all(Namespace::BiologicalProcess.qualifier_key(), &groups.process);

            let ecs = annotation.ecs();
            cds.push_all("EC_number", &ecs);

            assembly.stats.go_terms += groups.len();
            assembly.stats.ec_numbers += ecs.len();
            annotated = groups.len() > 0 || !ecs.is_empty();
        }
        if annotated {
            assembly.stats.annotated_cds += 1;
        }

        record.features.push(cds);
        assembly.records.push(record);
    }

    assembly.stats.records = assembly.records.len();
    assembly
}
