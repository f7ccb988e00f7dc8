//! Feature table entries

use super::Location;
use serde::{Deserialize, Serialize};

/// A `/key="value"` qualifier, or a bare `/key` flag when `value` is `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifier {
    pub key: String,
    pub value: Option<String>,
}

impl Qualifier {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a valueless qualifier such as `/pseudo`
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// A feature in the GenBank feature table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature key (`source`, `gene`, `CDS`, ...)
    pub kind: String,
    pub location: Location,
    /// Qualifiers in output order
    pub qualifiers: Vec<Qualifier>,
}

impl Feature {
    /// Creates a feature without qualifiers
    pub fn new(kind: impl Into<String>, location: Location) -> Self {
        Self {
            kind: kind.into(),
            location,
            qualifiers: Vec::new(),
        }
    }

    /// Appends a qualifier (builder pattern)
    pub fn with_qualifier(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.qualifiers.push(Qualifier::new(key, value));
    }

    /// Appends one qualifier per value, all under the same key
    pub fn push_all<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push(key, value);
        }
    }

    /// Appends the qualifier only when a value is present
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Returns every value stored under `key`
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.qualifiers
            .iter()
            .filter(move |q| q.key == key)
            .filter_map(|q| q.value.as_deref())
    }

    /// Returns the first value stored under `key`
    pub fn value(&self, key: &str) -> Option<&str> {
        self.qualifiers
            .iter()
            .find(|q| q.key == key)
            .and_then(|q| q.value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_builder() {
        let feature = Feature::new("gene", Location::span(0, 10)).with_qualifier("locus_tag", "g1");
        assert_eq!(feature.kind, "gene");
        assert_eq!(feature.value("locus_tag"), Some("g1"));
    }

    #[test]
    fn test_push_all_keeps_order() {
        let mut feature = Feature::new("CDS", Location::span(0, 10));
        feature.push_all("EC_number", ["1.1.1.1", "2.7.11.1"]);
        let values: Vec<_> = feature.values("EC_number").collect();
        assert_eq!(values, vec!["1.1.1.1", "2.7.11.1"]);
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut feature = Feature::new("source", Location::span(0, 10));
        feature.push_opt("isolate", None);
        feature.push_opt("mol_type", Some("genomic DNA"));
        assert_eq!(feature.qualifiers.len(), 1);
    }

    #[test]
    fn test_flag_qualifier() {
        let q = Qualifier::flag("pseudo");
        assert_eq!(q.value, None);
    }
}
