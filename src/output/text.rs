//! Text output formatter for human-readable display

use crate::logging::Verbosity;
use crate::orchestrator::RunSummary;
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Warnings listed individually in normal mode before collapsing
const MAX_LISTED_WARNINGS: usize = 10;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn paint_ok(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_warn(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return writeln!(writer, "{}", summary.output.display());
        }

        writeln!(
            writer,
            "{} {} ({} records)",
            self.paint_ok("Wrote"),
            summary.output.display(),
            summary.stats.records
        )?;

        let taxon = summary.taxon.as_deref().unwrap_or("no taxon id");
        writeln!(
            writer,
            "  {} {}",
            summary.species,
            self.paint_dim(&format!("[{}]", taxon))
        )?;
        writeln!(
            writer,
            "  {} annotated CDS, {} GO terms, {} EC numbers",
            summary.stats.annotated_cds, summary.stats.go_terms, summary.stats.ec_numbers
        )?;

        if summary.warnings.is_empty() {
            return Ok(());
        }

        writeln!(
            writer,
            "{}",
            self.paint_warn(&format!("{} warning(s):", summary.warnings.len()))
        )?;
        let limit = match self.verbosity {
            Verbosity::Verbose => summary.warnings.len(),
            _ => MAX_LISTED_WARNINGS,
        };
        for warning in summary.warnings.iter().take(limit) {
            writeln!(writer, "  - {}", warning)?;
        }
        if summary.warnings.len() > limit {
            writeln!(
                writer,
                "  {}",
                self.paint_dim(&format!(
                    "... {} more (use --verbose to list all)",
                    summary.warnings.len() - limit
                ))
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{AssemblyStats, Warning};
    use std::path::PathBuf;

    fn summary(warnings: usize) -> RunSummary {
        RunSummary {
            output: PathBuf::from("out.gbk"),
            species: "Escherichia coli".to_string(),
            taxon: Some("taxon:562".to_string()),
            stats: AssemblyStats {
                records: 3,
                annotated_cds: 2,
                go_terms: 5,
                ec_numbers: 1,
            },
            warnings: (0..warnings)
                .map(|i| Warning::MissingProtein {
                    gene: format!("g{}", i),
                })
                .collect(),
        }
    }

    fn render(formatter: &TextFormatter, summary: &RunSummary) -> String {
        let mut out = Vec::new();
        formatter.format(summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_normal_output() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let text = render(&formatter, &summary(0));
        assert!(text.contains("Wrote out.gbk (3 records)"));
        assert!(text.contains("Escherichia coli [taxon:562]"));
        assert!(text.contains("2 annotated CDS, 5 GO terms, 1 EC numbers"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn test_quiet_output() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false);
        assert_eq!(render(&formatter, &summary(2)), "out.gbk\n");
    }

    #[test]
    fn test_warnings_collapse() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let text = render(&formatter, &summary(12));
        assert!(text.contains("12 warning(s):"));
        assert!(text.contains("g9: no protein sequence"));
        assert!(!text.contains("g10:"));
        assert!(text.contains("... 2 more"));
    }

    #[test]
    fn test_verbose_lists_all_warnings() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false);
        let text = render(&formatter, &summary(12));
        assert!(text.contains("g11:"));
        assert!(!text.contains("more"));
    }
}
