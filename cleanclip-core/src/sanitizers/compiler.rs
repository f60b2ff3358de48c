//! compiler.rs - Compiles rule sets into ready-to-apply regular expressions.
//!
//! Every pattern is built the same way, whether it is being validated on its way into a
//! `Rule` or compiled for sanitization: multi-line mode (`^`/`$` match at line breaks)
//! and a bounded compiled size.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::RuleSet;
use crate::errors::{CleanclipError, Result};

/// Upper bound on the compiled size of a single pattern.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A rule whose pattern has been compiled.
#[derive(Debug)]
pub struct CompiledRule {
    pub regex: Regex,
    /// Literal replacement text; `$` has no special meaning.
    pub placeholder: String,
    /// 1-based position of the rule in its rule set.
    pub position: usize,
}

/// All compiled rules of one rule set, in application order.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

/// Compiles a single pattern with the crate-wide regex settings.
pub fn build_regex(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| CleanclipError::InvalidPattern {
            pattern: pattern.to_string(),
            line: None,
            reason: e.to_string(),
        })
}

/// Compiles every rule in order.
///
/// Stops at the first pattern that fails and reports it with its 1-based position.
pub fn compile_rules(ruleset: &RuleSet) -> Result<CompiledRules> {
    debug!("Starting compilation of {} rules.", ruleset.len());

    let rules = ruleset
        .iter()
        .enumerate()
        .map(|(idx, rule)| {
            let position = idx + 1;
            let regex = build_regex(rule.pattern()).map_err(|e| e.at_line(position))?;
            debug!("Rule {} compiled successfully.", position);
            Ok(CompiledRule {
                regex,
                placeholder: rule.placeholder().to_string(),
                position,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Finished compiling rules. Total compiled: {}.", rules.len());
    Ok(CompiledRules { rules })
}
