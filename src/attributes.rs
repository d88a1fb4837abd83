//! Configuration attributes
//!
//! Hosts configure the component through string key/value attributes, the
//! same way markup attributes arrive. Values are stored raw; the typed
//! accessors apply the defaulting rules, so a malformed number never becomes
//! an error.

use std::collections::BTreeMap;

use crate::surface::{DEFAULT_COLS, DEFAULT_ROWS};

pub const PLACEHOLDER: &str = "placeholder";
pub const ROWS: &str = "rows";
pub const COLS: &str = "cols";
pub const VALUE: &str = "value";
pub const HIGHLIGHT: &str = "highlight";
pub const MAXLENGTH: &str = "maxlength";

/// Attributes whose changes trigger a re-sync
pub const OBSERVED: [&str; 6] = [PLACEHOLDER, ROWS, COLS, VALUE, HIGHLIGHT, MAXLENGTH];

/// Check if an attribute name is observed
pub fn is_observed(name: &str) -> bool {
    OBSERVED.contains(&name)
}

/// Raw attribute storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Set an attribute, returning the previous value
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.to_string(), value.into())
    }

    /// Remove an attribute, returning the previous value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Placeholder text, empty when unset
    pub fn placeholder(&self) -> &str {
        self.get(PLACEHOLDER).unwrap_or_default()
    }

    /// Visible rows; unset, zero, or unparseable gives 4
    pub fn rows(&self) -> u32 {
        self.get(ROWS).and_then(parse_count).unwrap_or(DEFAULT_ROWS)
    }

    /// Visible columns; unset, zero, or unparseable gives 50
    pub fn cols(&self) -> u32 {
        self.get(COLS).and_then(parse_count).unwrap_or(DEFAULT_COLS)
    }

    /// The `value` attribute, empty when unset
    pub fn value(&self) -> &str {
        self.get(VALUE).unwrap_or_default()
    }

    /// Character limit; unset or unparseable means unlimited
    pub fn max_length(&self) -> Option<usize> {
        self.get(MAXLENGTH).and_then(parse_limit)
    }

    /// Serialized highlight rules; empty counts as unset
    pub fn highlight(&self) -> Option<&str> {
        self.get(HIGHLIGHT).filter(|s| !s.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Parse a positive count; fractions are truncated
fn parse_count(value: &str) -> Option<u32> {
    let n = parse_number(value)?;
    if n < 1.0 {
        return None;
    }
    Some(n.min(u32::MAX as f64) as u32)
}

/// Parse a non-negative limit; zero is a real limit
fn parse_limit(value: &str) -> Option<usize> {
    let n = parse_number(value)?;
    if n < 0.0 {
        return None;
    }
    Some(n.min(usize::MAX as f64) as usize)
}

fn parse_number(value: &str) -> Option<f64> {
    let n = value.trim().parse::<f64>().ok()?;
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = Attributes::new();
        assert_eq!(attrs.placeholder(), "");
        assert_eq!(attrs.rows(), 4);
        assert_eq!(attrs.cols(), 50);
        assert_eq!(attrs.value(), "");
        assert_eq!(attrs.max_length(), None);
        assert_eq!(attrs.highlight(), None);
    }

    #[test]
    fn test_numeric_parsing() {
        let attrs: Attributes = [("rows", " 10 "), ("cols", "7.9"), ("maxlength", "0")]
            .into_iter()
            .collect();
        assert_eq!(attrs.rows(), 10);
        assert_eq!(attrs.cols(), 7);
        assert_eq!(attrs.max_length(), Some(0));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let attrs: Attributes = [
            ("rows", "lots"),
            ("cols", "0"),
            ("maxlength", "-5"),
        ]
        .into_iter()
        .collect();
        assert_eq!(attrs.rows(), 4);
        assert_eq!(attrs.cols(), 50);
        assert_eq!(attrs.max_length(), None);

        let attrs: Attributes = [("rows", "inf"), ("maxlength", "NaN")].into_iter().collect();
        assert_eq!(attrs.rows(), 4);
        assert_eq!(attrs.max_length(), None);
    }

    #[test]
    fn test_empty_highlight_is_unset() {
        let mut attrs = Attributes::new();
        attrs.set(HIGHLIGHT, "");
        assert_eq!(attrs.highlight(), None);
        attrs.set(HIGHLIGHT, "[]");
        assert_eq!(attrs.highlight(), Some("[]"));
    }

    #[test]
    fn test_set_and_remove() {
        let mut attrs = Attributes::new();
        assert_eq!(attrs.set(MAXLENGTH, "3"), None);
        assert_eq!(attrs.set(MAXLENGTH, "4"), Some("3".to_string()));
        assert_eq!(attrs.remove(MAXLENGTH), Some("4".to_string()));
        assert!(!attrs.contains(MAXLENGTH));
    }

    #[test]
    fn test_observed() {
        assert!(is_observed("rows"));
        assert!(is_observed("highlight"));
        assert!(!is_observed("class"));
    }
}
