//! Highlight rules
//!
//! A rule pairs a regular expression with the inline style declarations
//! wrapped around each of its matches. Rule sets arrive serialized as a JSON
//! array, e.g. `[{"pattern": "bar", "style": "color:red"}]`.
//!
//! Patterns use the `regex` crate's syntax, not the ECMAScript dialect that
//! rule sets written for browsers assume. Lookaround and backreferences do
//! not compile, and fields must be JSON strings (`{"pattern": 5}` is
//! rejected rather than read as `/5/`). Either case fails the whole rule set
//! and the value renders without highlighting.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single pattern/style pair as it appears in the `highlight` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRule {
    /// Regular expression source
    #[serde(default)]
    pub pattern: String,
    /// Inline style declarations for the wrapping span
    #[serde(default)]
    pub style: String,
}

impl HighlightRule {
    /// Create a new rule
    pub fn new(pattern: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            style: style.into(),
        }
    }

    /// Rules with an empty pattern or empty style are skipped
    pub fn is_active(&self) -> bool {
        !self.pattern.is_empty() && !self.style.is_empty()
    }

    /// Compile this rule, returning `None` for skipped rules
    pub fn compile(&self) -> Result<Option<CompiledRule>> {
        if !self.is_active() {
            return Ok(None);
        }
        let regex = Regex::new(&self.pattern)?;
        Ok(Some(CompiledRule {
            regex,
            style: self.style.clone(),
        }))
    }
}

/// A rule whose pattern compiled successfully
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    style: String,
}

impl CompiledRule {
    /// Wrap every non-overlapping match in `text` with a styled span
    pub fn apply(&self, text: &str) -> String {
        let style = &self.style;
        self.regex
            .replace_all(text, |caps: &regex::Captures| {
                format!("<span style=\"{}\">{}</span>", style, &caps[0])
            })
            .into_owned()
    }

    /// The style declarations this rule applies
    pub fn style(&self) -> &str {
        &self.style
    }
}

/// Ordered rule sequence, replaced wholesale on every configuration change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightRuleSet {
    rules: Vec<HighlightRule>,
}

impl HighlightRuleSet {
    /// Create a rule set from rules in application order
    pub fn new(rules: Vec<HighlightRule>) -> Self {
        Self { rules }
    }

    /// Parse the serialized form used by the `highlight` attribute
    pub fn parse(source: &str) -> Result<Self> {
        let rules: Vec<HighlightRule> = serde_json::from_str(source)?;
        Ok(Self { rules })
    }

    /// Serialize back into the `highlight` attribute form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.rules)?)
    }

    /// Compile every active rule, failing on the first bad pattern
    pub fn compile(&self) -> Result<Vec<CompiledRule>> {
        let mut compiled = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if let Some(rule) = rule.compile()? {
                compiled.push(rule);
            }
        }
        Ok(compiled)
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
