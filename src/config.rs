//! Configuration file support for the terminal host
//!
//! Loads settings from ~/.pretty-textarea.toml (or %USERPROFILE%\.pretty-textarea.toml
//! on Windows), or from a path given on the command line.
//!
//! Example:
//! ```text
//! placeholder = "Type here"
//! rows = 10
//! cols = 60
//! maxlength = 500
//!
//! [[highlight]]
//! pattern = "\\bTODO\\b"
//! style = "color: red; font-weight: bold"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::attributes::{self, Attributes};
use crate::error::Result;
use crate::highlight::{HighlightRule, HighlightRuleSet};

/// Host configuration, mapped onto component attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Hint shown while the value is empty
    pub placeholder: Option<String>,
    /// Visible rows
    pub rows: Option<u32>,
    /// Visible columns
    pub cols: Option<u32>,
    /// Character limit
    pub maxlength: Option<usize>,
    /// Initial value
    pub value: Option<String>,
    /// Highlight rules in application order
    pub highlight: Vec<HighlightRule>,
}

impl HostConfig {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".pretty-textarea.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".pretty-textarea.toml"))
        }
    }

    /// Load configuration
    ///
    /// An explicit path must exist. The default path is optional: when it is
    /// missing the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::parse(&fs::read_to_string(path)?),
            None => match Self::config_path() {
                Some(path) if path.exists() => {
                    log::debug!("loading config from {}", path.display());
                    Self::parse(&fs::read_to_string(path)?)
                }
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Convert into the attribute form the component consumes
    pub fn to_attributes(&self) -> Result<Attributes> {
        let mut attrs = Attributes::new();
        if let Some(placeholder) = &self.placeholder {
            attrs.set(attributes::PLACEHOLDER, placeholder.as_str());
        }
        if let Some(rows) = self.rows {
            attrs.set(attributes::ROWS, rows.to_string());
        }
        if let Some(cols) = self.cols {
            attrs.set(attributes::COLS, cols.to_string());
        }
        if let Some(maxlength) = self.maxlength {
            attrs.set(attributes::MAXLENGTH, maxlength.to_string());
        }
        if let Some(value) = &self.value {
            attrs.set(attributes::VALUE, value.as_str());
        }
        if !self.highlight.is_empty() {
            let rules = HighlightRuleSet::new(self.highlight.clone());
            attrs.set(attributes::HIGHLIGHT, rules.to_json()?);
        }
        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
placeholder = "Say something"
rows = 8
maxlength = 120

[[highlight]]
pattern = "\\d+"
style = "color: cyan"

[[highlight]]
pattern = "TODO"
style = "font-weight: bold"
        "#;

        let config = HostConfig::parse(contents).unwrap();
        assert_eq!(config.placeholder.as_deref(), Some("Say something"));
        assert_eq!(config.rows, Some(8));
        assert_eq!(config.cols, None);
        assert_eq!(config.maxlength, Some(120));
        assert_eq!(config.highlight.len(), 2);
        assert_eq!(config.highlight[0], HighlightRule::new(r"\d+", "color: cyan"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(HostConfig::parse("rows = \"many\"").is_err());
        assert!(HostConfig::parse("[[highlight]\n").is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = HostConfig::parse("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.to_attributes().unwrap(), Attributes::new());
    }

    #[test]
    fn test_to_attributes() {
        let config = HostConfig {
            rows: Some(3),
            value: Some("hi".to_string()),
            highlight: vec![HighlightRule::new("h", "color:red")],
            ..Default::default()
        };
        let attrs = config.to_attributes().unwrap();
        assert_eq!(attrs.rows(), 3);
        assert_eq!(attrs.cols(), 50);
        assert_eq!(attrs.value(), "hi");
        let rules = HighlightRuleSet::parse(attrs.highlight().unwrap()).unwrap();
        assert_eq!(rules.rules(), config.highlight.as_slice());
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let path = Path::new("/nonexistent/pretty-textarea.toml");
        assert!(HostConfig::load(Some(path)).is_err());
    }
}
