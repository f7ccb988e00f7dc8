//! GenBank flat file writer
//!
//! Layout:
//! - header keywords in columns 1-12, values from column 13
//! - feature keys at column 6, locations and qualifiers from column 22
//! - every line at most 80 columns; sequence in 60-base lines of 10-base groups

use crate::domain::{Feature, GenbankRecord, Qualifier};
use std::io::{self, Write};

/// Maximum line width
const MAX_WIDTH: usize = 80;

/// Width of the header keyword column
const HEADER_WIDTH: usize = 12;

/// Column where feature locations and qualifiers start
const QUALIFIER_INDENT: usize = 21;

/// Indent before a feature key
const FEATURE_KEY_INDENT: usize = 5;

/// Bases per ORIGIN line
const LETTERS_PER_LINE: usize = 60;

/// Bases per ORIGIN group
const LETTERS_PER_GROUP: usize = 10;

/// Width of the ORIGIN position column
const SEQUENCE_INDENT: usize = 9;

/// Width of the LOCUS name and length field taken together
const LOCUS_NAME_LENGTH_WIDTH: usize = 28;

/// Qualifiers whose values are written without quotes
const UNQUOTED_QUALIFIERS: &[&str] = &[
    "anticodon",
    "citation",
    "codon_start",
    "compare",
    "direction",
    "estimated_length",
    "mod_base",
    "number",
    "rpt_type",
    "rpt_unit_range",
    "tag_peptide",
    "transl_except",
    "transl_table",
];

/// Streams records in GenBank format
pub struct GenbankWriter<W: Write> {
    out: W,
}

impl<W: Write> GenbankWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write every record, each terminated by `//`
    pub fn write_records(&mut self, records: &[GenbankRecord]) -> io::Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        self.out.flush()
    }

    /// Write a single record
    pub fn write_record(&mut self, record: &GenbankRecord) -> io::Result<()> {
        self.write_header(record)?;
        self.write_features(&record.features)?;
        self.write_sequence(&record.sequence)?;
        writeln!(self.out, "//")
    }

    /// Consume the writer and return the underlying output
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self, record: &GenbankRecord) -> io::Result<()> {
        writeln!(self.out, "{}", locus_line(record))?;

        self.write_multi_line("DEFINITION", &terminated(&record.description))?;
        self.write_single_line("ACCESSION", &record.accession)?;
        self.write_single_line("VERSION", &record.accession)?;
        self.write_multi_line("KEYWORDS", &terminated(&record.keywords.join("; ")))?;

        let source = record
            .source
            .as_deref()
            .or(record.organism.as_deref())
            .unwrap_or(".");
        self.write_multi_line("SOURCE", source)?;
        self.write_single_line("  ORGANISM", record.organism.as_deref().unwrap_or("."))?;
        self.write_multi_line("", &terminated(&record.taxonomy.join("; ")))
    }

    fn write_single_line(&mut self, tag: &str, text: &str) -> io::Result<()> {
        let text = text.replace('\n', " ");
        if text.len() > MAX_WIDTH - HEADER_WIDTH {
            tracing::warn!(
                tag = tag.trim(),
                text = %text,
                "annotation too long for one header line"
            );
        }
        writeln!(self.out, "{:<width$}{}", tag, text, width = HEADER_WIDTH)
    }

    fn write_multi_line(&mut self, tag: &str, text: &str) -> io::Result<()> {
        let lines = split_words(text, MAX_WIDTH - HEADER_WIDTH);
        let mut tag = tag;
        for line in lines {
            self.write_single_line(tag, &line)?;
            tag = "";
        }
        Ok(())
    }

    fn write_features(&mut self, features: &[Feature]) -> io::Result<()> {
        writeln!(self.out, "{:<width$}Location/Qualifiers", "FEATURES", width = QUALIFIER_INDENT)?;
        for feature in features {
            let mut key_column = format!(
                "{:indent$}{:<pad$}",
                "",
                feature.kind,
                indent = FEATURE_KEY_INDENT,
                pad = QUALIFIER_INDENT - FEATURE_KEY_INDENT
            );
            key_column.truncate(QUALIFIER_INDENT);
            writeln!(
                self.out,
                "{}{}",
                key_column,
                wrap_location(&feature.location.to_string())
            )?;
            for qualifier in &feature.qualifiers {
                writeln!(self.out, "{}", format_qualifier(qualifier))?;
            }
        }
        Ok(())
    }

    fn write_sequence(&mut self, sequence: &str) -> io::Result<()> {
        writeln!(self.out, "ORIGIN")?;
        let data = sequence.to_ascii_lowercase();
        let bytes = data.as_bytes();
        for (line_index, line) in bytes.chunks(LETTERS_PER_LINE).enumerate() {
            write!(
                self.out,
                "{:>width$}",
                line_index * LETTERS_PER_LINE + 1,
                width = SEQUENCE_INDENT
            )?;
            for group in line.chunks(LETTERS_PER_GROUP) {
                self.out.write_all(b" ")?;
                self.out.write_all(group)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// The LOCUS line
///
/// Name and length share one 28-column field so that names longer than 16
/// characters keep every later field in its usual column. Topology starts at
/// column 56, division at 65 and the date at 69.
pub fn locus_line(record: &GenbankRecord) -> String {
    let length = record.len().to_string();
    let name_length = if record.name.len() + 1 + length.len() <= LOCUS_NAME_LENGTH_WIDTH {
        format!(
            "{}{:>width$}",
            record.name,
            length,
            width = LOCUS_NAME_LENGTH_WIDTH - record.name.len()
        )
    } else {
        tracing::warn!(
            name = %record.name,
            "locus name too long, LOCUS fields moved out of their usual columns"
        );
        format!("{} {}", record.name, length)
    };

    format!(
        "LOCUS       {} bp    {:<7} {:<8} {} {}",
        name_length,
        record.molecule_type,
        record.topology,
        record.division,
        record.date.format("%d-%b-%Y").to_string().to_uppercase()
    )
}

/// Appends a final `.` unless one is already there
fn terminated(text: &str) -> String {
    if text.ends_with('.') {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}

/// Greedy word wrap; a single overlong word stays on its own line
fn split_words(text: &str, max_len: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_len {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wraps long locations after commas, continuing at the qualifier column
fn wrap_location(location: &str) -> String {
    let length = MAX_WIDTH - QUALIFIER_INDENT;
    let indent = " ".repeat(QUALIFIER_INDENT);
    let mut rest = location;
    let mut wrapped = String::new();

    while rest.len() > length {
        match rest[..length].rfind(',') {
            Some(index) => {
                wrapped.push_str(&rest[..=index]);
                wrapped.push('\n');
                wrapped.push_str(&indent);
                rest = &rest[index + 1..];
            }
            None => break,
        }
    }
    wrapped.push_str(rest);
    wrapped
}

/// Formats a qualifier, wrapping at spaces when possible and at column 80 otherwise
pub fn format_qualifier(qualifier: &Qualifier) -> String {
    let indent = " ".repeat(QUALIFIER_INDENT);
    let Some(value) = &qualifier.value else {
        return format!("{}/{}", indent, qualifier.key);
    };

    let value = value.replace('"', "\"\"");
    let line = if UNQUOTED_QUALIFIERS.contains(&qualifier.key.as_str()) {
        format!("{}/{}={}", indent, qualifier.key, value)
    } else {
        format!("{}/{}=\"{}\"", indent, qualifier.key, value)
    };

    let mut chars: Vec<char> = line.chars().collect();
    let mut lines: Vec<String> = Vec::new();

    while chars.len() > MAX_WIDTH {
        let upper = (chars.len() - 1).min(MAX_WIDTH);
        let index = (QUALIFIER_INDENT + 2..=upper)
            .rev()
            .find(|&i| chars[i] == ' ')
            .unwrap_or(MAX_WIDTH);

        lines.push(chars[..index].iter().collect());
        let remainder: String = chars[index..].iter().collect();
        chars = indent.chars().chain(remainder.trim_start().chars()).collect();
    }
    if chars.len() > QUALIFIER_INDENT || lines.is_empty() {
        lines.push(chars.into_iter().collect());
    }
    lines.join("\n")
}
