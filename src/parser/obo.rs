//! Gene Ontology OBO reader
//!
//! Only `[Term]` stanzas are read; for each term the `id`, `namespace` and
//! every `alt_id` are kept. Alternative ids let deprecated GO ids that still
//! appear in annotation tables resolve to their current namespace.

use crate::error::{AppError, IoError, ParseError};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// The three GO sub-ontologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    CellularComponent,
    MolecularFunction,
    BiologicalProcess,
}

impl Namespace {
    /// Parse the OBO `namespace:` value
    pub fn from_obo(value: &str) -> Option<Self> {
        match value.trim() {
            "cellular_component" => Some(Namespace::CellularComponent),
            "molecular_function" => Some(Namespace::MolecularFunction),
            "biological_process" => Some(Namespace::BiologicalProcess),
            _ => None,
        }
    }

    /// GenBank qualifier key for terms of this namespace
    pub fn qualifier_key(&self) -> &'static str {
        match self {
            Namespace::CellularComponent => "go_component",
            Namespace::MolecularFunction => "go_function",
            Namespace::BiologicalProcess => "go_process",
        }
    }
}

/// Namespace and alternative-id lookup tables
#[derive(Debug, Clone, Default)]
pub struct GeneOntology {
    namespaces: HashMap<String, Namespace>,
    alternatives: HashMap<String, String>,
}

impl GeneOntology {
    /// Namespace of a GO id, resolving alternative ids
    pub fn namespace(&self, go: &str) -> Option<Namespace> {
        self.namespaces.get(go).copied().or_else(|| {
            self.alternatives
                .get(go)
                .and_then(|primary| self.namespaces.get(primary).copied())
        })
    }

    pub fn term_count(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

#[derive(Default)]
struct TermStanza {
    id: Option<String>,
    namespace: Option<Namespace>,
    alt_ids: Vec<String>,
}

impl TermStanza {
    fn flush_into(self, ontology: &mut GeneOntology) {
        if let (Some(id), Some(namespace)) = (self.id, self.namespace) {
            for alt_id in self.alt_ids {
                ontology.alternatives.insert(alt_id, id.clone());
            }
            ontology.namespaces.insert(id, namespace);
        }
    }
}

/// Parse OBO content
pub fn parse_obo(content: &str) -> GeneOntology {
    let mut ontology = GeneOntology::default();
    let mut current: Option<TermStanza> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            if let Some(term) = current.take() {
                term.flush_into(&mut ontology);
            }
            if line == "[Term]" {
                current = Some(TermStanza::default());
            }
            continue;
        }

        let Some(term) = current.as_mut() else {
            continue;
        };
        let Some((tag, value)) = line.split_once(':') else {
            continue;
        };
        // Trailing `! comment` is not part of the value
        let value = value.split(" !").next().unwrap_or("").trim();

        match tag.trim() {
            "id" => term.id = Some(value.to_string()),
            "namespace" => term.namespace = Namespace::from_obo(value),
            "alt_id" => term.alt_ids.push(value.to_string()),
            _ => {}
        }
    }

    if let Some(term) = current.take() {
        term.flush_into(&mut ontology);
    }

    ontology
}

/// Parse OBO content, rejecting files without any term
pub fn load_obo(content: &str, source_name: &str) -> Result<GeneOntology, ParseError> {
    let ontology = parse_obo(content);
    if ontology.is_empty() {
        return Err(ParseError::EmptyOntology {
            source_name: source_name.to_string(),
        });
    }
    Ok(ontology)
}

/// Read and parse an OBO file
pub fn read_obo(path: &Path) -> Result<GeneOntology, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    let ontology = load_obo(&content, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), terms = ontology.term_count(), "read Gene Ontology");
    Ok(ontology)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "format-version: 1.2
data-version: releases/2024-01-17

[Term]
id: GO:0005575
name: cellular_component
namespace: cellular_component
alt_id: GO:0008372

[Term]
id: GO:0003674
name: molecular_function
namespace: molecular_function ! top level

[Term]
id: GO:0008150
name: biological_process
namespace: biological_process
alt_id: GO:0000004
alt_id: GO:0007582

[Typedef]
id: part_of
name: part of
";

    #[test]
    fn test_parse_terms() {
        let go = parse_obo(SAMPLE);
        assert_eq!(go.term_count(), 3);
        assert_eq!(
            go.namespace("GO:0005575"),
            Some(Namespace::CellularComponent)
        );
        assert_eq!(
            go.namespace("GO:0003674"),
            Some(Namespace::MolecularFunction)
        );
    }

    #[test]
    fn test_alternative_ids_resolve() {
        let go = parse_obo(SAMPLE);
        assert_eq!(
            go.namespace("GO:0007582"),
            Some(Namespace::BiologicalProcess)
        );
        assert_eq!(
            go.namespace("GO:0008372"),
            Some(Namespace::CellularComponent)
        );
    }

    #[test]
    fn test_typedef_stanzas_ignored() {
        let go = parse_obo(SAMPLE);
        assert_eq!(go.namespace("part_of"), None);
    }

    #[test]
    fn test_unknown_term() {
        let go = parse_obo(SAMPLE);
        assert_eq!(go.namespace("GO:9999999"), None);
    }

    #[test]
    fn test_load_empty_is_error() {
        let err = load_obo("format-version: 1.2\n", "go-basic.obo").unwrap_err();
        assert!(err.to_string().contains("go-basic.obo"));
    }

    #[test]
    fn test_qualifier_keys() {
        assert_eq!(Namespace::CellularComponent.qualifier_key(), "go_component");
        assert_eq!(Namespace::MolecularFunction.qualifier_key(), "go_function");
        assert_eq!(Namespace::BiologicalProcess.qualifier_key(), "go_process");
    }
}
