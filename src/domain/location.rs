//! Feature locations and strands
//!
//! Positions are stored 0-based half-open and rendered 1-based inclusive,
//! the way GenBank feature tables expect them:
//! - `Simple { start: 0, end: 90 }` → `1..90`
//! - reverse strand → `complement(1..90)`
//! - joins → `join(1..30,61..90)`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strand of a feature location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn is_reverse(&self) -> bool {
        matches!(self, Strand::Reverse)
    }
}

/// A feature location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// A single contiguous span
    Simple {
        start: usize,
        end: usize,
        strand: Strand,
    },
    /// Ordered spans joined into one feature (e.g. exons)
    Join(Vec<Location>),
}

impl Location {
    /// Creates a forward-strand span
    pub fn span(start: usize, end: usize) -> Self {
        Location::Simple {
            start,
            end,
            strand: Strand::Forward,
        }
    }

    /// Creates a span on the given strand
    pub fn stranded(start: usize, end: usize, strand: Strand) -> Self {
        Location::Simple { start, end, strand }
    }

    /// Joins several locations; a single part collapses to itself
    pub fn join(mut parts: Vec<Location>) -> Self {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Location::Join(parts)
        }
    }

    /// Lowest 0-based start
    pub fn start(&self) -> usize {
        match self {
            Location::Simple { start, .. } => *start,
            Location::Join(parts) => parts.iter().map(Location::start).min().unwrap_or(0),
        }
    }

    /// Highest 0-based exclusive end
    pub fn end(&self) -> usize {
        match self {
            Location::Simple { end, .. } => *end,
            Location::Join(parts) => parts.iter().map(Location::end).max().unwrap_or(0),
        }
    }

    fn all_reverse(&self) -> bool {
        match self {
            Location::Simple { strand, .. } => strand.is_reverse(),
            Location::Join(parts) => !parts.is_empty() && parts.iter().all(Location::all_reverse),
        }
    }

    /// Render a part without any strand wrapper
    fn write_plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Simple { start, end, .. } => {
                if end.saturating_sub(*start) == 1 {
                    write!(f, "{}", end)
                } else {
                    write!(f, "{}..{}", start + 1, end)
                }
            }
            Location::Join(parts) => {
                f.write_str("join(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    part.write_plain(f)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Simple { strand, .. } if strand.is_reverse() => {
                f.write_str("complement(")?;
                self.write_plain(f)?;
                f.write_str(")")
            }
            Location::Simple { .. } => self.write_plain(f),
            Location::Join(_) if self.all_reverse() => {
                f.write_str("complement(")?;
                self.write_plain(f)?;
                f.write_str(")")
            }
            Location::Join(parts) => {
                // Mixed strands: each part carries its own wrapper
                f.write_str("join(")?;
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", part)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_span_is_one_based() {
        assert_eq!(Location::span(0, 90).to_string(), "1..90");
    }

    #[test]
    fn test_single_base() {
        assert_eq!(Location::span(4, 5).to_string(), "5");
    }

    #[test]
    fn test_complement() {
        let loc = Location::stranded(10, 40, Strand::Reverse);
        assert_eq!(loc.to_string(), "complement(11..40)");
    }

    #[test]
    fn test_join_forward() {
        let loc = Location::join(vec![Location::span(0, 30), Location::span(60, 90)]);
        assert_eq!(loc.to_string(), "join(1..30,61..90)");
        assert_eq!(loc.start(), 0);
        assert_eq!(loc.end(), 90);
    }

    #[test]
    fn test_join_reverse_wraps_whole_join() {
        let loc = Location::join(vec![
            Location::stranded(0, 30, Strand::Reverse),
            Location::stranded(60, 90, Strand::Reverse),
        ]);
        assert_eq!(loc.to_string(), "complement(join(1..30,61..90))");
    }

    #[test]
    fn test_join_mixed_strands() {
        let loc = Location::join(vec![
            Location::span(0, 30),
            Location::stranded(60, 90, Strand::Reverse),
        ]);
        assert_eq!(loc.to_string(), "join(1..30,complement(61..90))");
    }

    #[test]
    fn test_join_single_part_collapses() {
        let loc = Location::join(vec![Location::span(2, 8)]);
        assert_eq!(loc, Location::span(2, 8));
    }
}
