//! Rule definitions for `cleanclip-core`.
//!
//! A [`Rule`] pairs a regular expression with the literal placeholder that replaces its
//! matches; a [`RuleSet`] is the ordered list applied during one sanitize call. Both types
//! validate on construction, so a rule holding an invalid pattern cannot exist.
//!
//! On disk every rule is a two-element JSON list `[pattern, placeholder]`. Older
//! configuration files stored `{"pattern": ..., "placeholder": ...}` objects; those are
//! still accepted when reading.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::editor::find_delimiter;
use crate::errors::{CleanclipError, Result};
use crate::sanitizers::compiler::build_regex;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Built-in rules written on first run and used whenever no configuration exists.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    (r"\b(?:\d[ -]*?){13,16}\b", "[CARD]"),
    (r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}", "[EMAIL]"),
];

/// A single (pattern, placeholder) sanitization rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "RuleRecord", into = "RuleRecord")]
pub struct Rule {
    pattern: String,
    placeholder: String,
}

/// Wire representation of a rule. Pairs are canonical; objects are the legacy layout.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum RuleRecord {
    Pair(String, String),
    Object { pattern: String, placeholder: String },
}

impl TryFrom<RuleRecord> for Rule {
    type Error = CleanclipError;

    fn try_from(record: RuleRecord) -> Result<Self> {
        match record {
            RuleRecord::Pair(pattern, placeholder)
            | RuleRecord::Object { pattern, placeholder } => Rule::new(pattern, placeholder),
        }
    }
}

impl From<Rule> for RuleRecord {
    fn from(rule: Rule) -> Self {
        RuleRecord::Pair(rule.pattern, rule.placeholder)
    }
}

impl Rule {
    /// Builds a rule, trimming surrounding whitespace from both fields.
    ///
    /// Fails with [`CleanclipError::InvalidPattern`] when the pattern is empty, too long,
    /// spans several lines, starts with `#`, contains an unescaped `->`, or does not compile.
    /// Fails with [`CleanclipError::InvalidPlaceholder`] when the placeholder spans several
    /// lines. Each of these would make the rule impossible to show in the editor.
    pub fn new(pattern: impl Into<String>, placeholder: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into().trim().to_string();
        let placeholder = placeholder.into().trim().to_string();

        validate_pattern(&pattern)?;

        if placeholder.contains(['\n', '\r']) {
            return Err(CleanclipError::InvalidPlaceholder {
                placeholder,
                reason: "placeholders must fit on a single line".to_string(),
            });
        }

        Ok(Self { pattern, placeholder })
    }

    /// Builds a rule from text already known to be valid.
    fn builtin(pattern: &str, placeholder: &str) -> Self {
        Self { pattern: pattern.to_string(), placeholder: placeholder.to_string() }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.placeholder.is_empty() {
            write!(f, "{} ->", self.pattern)
        } else {
            write!(f, "{} -> {}", self.pattern, self.placeholder)
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(CleanclipError::InvalidPattern {
            pattern: pattern.to_string(),
            line: None,
            reason: reason.to_string(),
        })
    };

    if pattern.is_empty() {
        return reject("pattern is empty");
    }
    if pattern.len() > MAX_PATTERN_LENGTH {
        return reject(&format!(
            "pattern length ({}) exceeds maximum allowed ({})",
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }
    if pattern.contains(['\n', '\r']) {
        return reject("patterns must fit on a single line");
    }
    if pattern.starts_with('#') {
        return reject(r"a leading '#' marks a comment; write '\#' or '[#]' instead");
    }
    if find_delimiter(pattern).is_some() {
        return reject(r"contains an unescaped '->'; write '\->' instead");
    }

    build_regex(pattern).map(|_| ())
}

/// An ordered sequence of rules. Order matters: rule *i* sees the output of rule *i-1*.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in rule set: card numbers and e-mail addresses.
    pub fn defaults() -> Self {
        debug!("Building {} default rules.", DEFAULT_RULES.len());
        DEFAULT_RULES
            .iter()
            .map(|(pattern, placeholder)| Rule::builtin(pattern, placeholder))
            .collect()
    }

    /// Builds a rule set from raw pairs, validating each one.
    ///
    /// Errors carry the 1-based position of the offending pair.
    pub fn from_pairs<P, H>(pairs: impl IntoIterator<Item = (P, H)>) -> Result<Self>
    where
        P: Into<String>,
        H: Into<String>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(idx, (pattern, placeholder))| {
                Rule::new(pattern, placeholder).map_err(|e| e.at_line(idx + 1))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Per-rule report for one sanitize call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionSummaryItem {
    /// 1-based position of the rule in its rule set.
    pub rule_position: usize,
    pub pattern: String,
    pub placeholder: String,
    pub occurrences: usize,
}
