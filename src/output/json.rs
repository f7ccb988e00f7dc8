//! JSON output formatter for machine processing

use crate::logging::Verbosity;
use crate::orchestrator::RunSummary;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the run
#[derive(Serialize)]
struct JsonOutput<'a> {
    output: String,
    species: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    taxon: Option<&'a str>,
    records: usize,
    annotated_cds: usize,
    go_terms: usize,
    ec_numbers: usize,
    warning_count: usize,
    /// Individual warnings (omitted in quiet mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<&'a [crate::assembly::Warning]>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            output: summary.output.display().to_string(),
            species: &summary.species,
            taxon: summary.taxon.as_deref(),
            records: summary.stats.records,
            annotated_cds: summary.stats.annotated_cds,
            go_terms: summary.stats.go_terms,
            ec_numbers: summary.stats.ec_numbers,
            warning_count: summary.warnings.len(),
            warnings: match self.verbosity {
                Verbosity::Quiet => None,
                _ => Some(summary.warnings.as_slice()),
            },
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
