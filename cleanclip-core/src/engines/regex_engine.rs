// cleanclip-core/src/engines/regex_engine.rs
//! A `SanitizationEngine` that applies an ordered rule set with regular expressions.
//!
//! Each rule performs a global, leftmost-first, non-overlapping replacement of its matches
//! with its placeholder. The output of one rule is the input of the next, so a placeholder
//! inserted by an earlier rule can be matched by a later one.
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::Captures;

use crate::config::{RedactionSummaryItem, RuleSet};
use crate::engine::SanitizationEngine;
use crate::errors::Result;
use crate::sanitizers::compiler::{compile_rules, CompiledRules};

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
    rules: RuleSet,
}

impl RegexEngine {
    /// Compiles `rules`. Fails with `InvalidPattern` on the first pattern that does not build.
    pub fn new(rules: RuleSet) -> Result<Self> {
        let compiled_rules = compile_rules(&rules)?;
        Ok(Self { compiled_rules, rules })
    }

    fn apply_rules(&self, content: &str) -> (String, Vec<RedactionSummaryItem>) {
        let mut current = content.to_string();
        let mut summary = Vec::new();

        for (compiled, rule) in self.compiled_rules.rules.iter().zip(self.rules.iter()) {
            let mut occurrences = 0usize;
            let replaced = compiled.regex.replace_all(&current, |_: &Captures<'_>| {
                occurrences += 1;
                compiled.placeholder.as_str()
            });

            current = replaced.into_owned();

            if occurrences > 0 {
                debug!("Rule {} replaced {} match(es).", compiled.position, occurrences);
                summary.push(RedactionSummaryItem {
                    rule_position: compiled.position,
                    pattern: rule.pattern().to_string(),
                    placeholder: rule.placeholder().to_string(),
                    occurrences,
                });
            }
        }

        (current, summary)
    }
}

impl SanitizationEngine for RegexEngine {
    fn sanitize(&self, content: &str) -> Result<(String, Vec<RedactionSummaryItem>)> {
        Ok(self.apply_rules(content))
    }

    fn analyze_for_stats(&self, content: &str) -> Result<Vec<RedactionSummaryItem>> {
        let (_, summary) = self.apply_rules(content);
        Ok(summary)
    }

    fn get_rules(&self) -> &RuleSet {
        &self.rules
    }
}
