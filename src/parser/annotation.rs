//! eggNOG-mapper annotation table reader
//!
//! Handles the tab-separated `.emapper.annotations` output:
//! - `##` lines are run comments and are ignored
//! - a `#query...` line names the columns
//! - without a header line the emapper 2.0 column layout is assumed
//!
//! Empty cells and `-` both mean "no annotation".

use crate::error::{AppError, IoError, ParseError};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Column layout used when the table carries no header line
pub const DEFAULT_COLUMNS: &[&str] = &[
    "query_name",
    "seed_eggNOG_ortholog",
    "seed_ortholog_evalue",
    "seed_ortholog_score",
    "best_tax_level",
    "Preferred_name",
    "GOs",
    "EC",
    "KEGG_ko",
    "KEGG_Pathway",
    "KEGG_Module",
    "KEGG_Reaction",
    "KEGG_rclass",
    "BRITE",
    "KEGG_TC",
    "CAZy",
    "BiGG_Reaction",
    "taxonomic_scope",
    "eggNOG_OGs",
    "best_eggNOG_OG",
    "COG_Functional_cat",
    "eggNOG_free_text_desc",
];

/// GO term column name
pub const GO_COLUMN: &str = "GOs";

/// EC number column name
pub const EC_COLUMN: &str = "EC";

// Multi-valued cells use either separator, sometimes both
static LIST_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[;,]").unwrap());

/// Annotation row for a single query gene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    fields: HashMap<String, String>,
}

impl Annotation {
    /// Raw cell value; `None` when the cell is empty or `-`
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty() && *v != "-")
    }

    /// GO term ids in table order
    pub fn gos(&self) -> Vec<String> {
        self.list(GO_COLUMN)
    }

    /// EC numbers with any `ec:` prefix removed
    pub fn ecs(&self) -> Vec<String> {
        self.list(EC_COLUMN)
            .into_iter()
            .map(|ec| ec.replace("ec:", ""))
            .filter(|ec| !ec.is_empty())
            .collect()
    }

    fn list(&self, column: &str) -> Vec<String> {
        self.field(column)
            .map(|cell| {
                LIST_SEPARATOR_RE
                    .split(cell)
                    .map(str::trim)
                    .filter(|v| !v.is_empty() && *v != "-")
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// All annotation rows keyed by query name
#[derive(Debug, Clone, Default)]
pub struct AnnotationTable {
    rows: HashMap<String, Annotation>,
}

impl AnnotationTable {
    pub fn get(&self, query: &str) -> Option<&Annotation> {
        self.rows.get(query)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn insert(&mut self, query: impl Into<String>, annotation: Annotation) {
        self.rows.insert(query.into(), annotation);
    }
}

/// Parse eggNOG-mapper annotation content
pub fn parse_annotations(content: &str) -> Result<AnnotationTable, ParseError> {
    let mut columns: Vec<String> = DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut table = AnnotationTable::default();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() || line.starts_with("##") {
            continue;
        }

        if let Some(header) = line.strip_prefix('#') {
            if header.starts_with("query") {
                columns = header.split('\t').map(|c| c.trim().to_string()).collect();
            }
            continue;
        }

        let cells: Vec<&str> = line.split('\t').collect();
        let query = cells[0].trim();
        if query.is_empty() {
            return Err(ParseError::annotation("", index + 1, "empty query name"));
        }

        let fields = columns
            .iter()
            .zip(cells.iter())
            .skip(1)
            .map(|(column, cell)| (column.clone(), cell.to_string()))
            .collect();
        table.insert(query, Annotation { fields });
    }

    Ok(table)
}

/// Read and parse an annotation file
pub fn read_annotations(path: &Path) -> Result<AnnotationTable, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    let table = parse_annotations(&content).map_err(|e| e.with_path(path))?;
    tracing::debug!(path = %path.display(), rows = table.len(), "read annotation table");
    Ok(table)
}
