// cleanclip-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! The trait decouples front ends from the way a rule set is applied. The only engine
//! today is [`crate::RegexEngine`], which applies rules strictly in order.
//!
//! License: MIT OR APACHE 2.0

use crate::config::{RedactionSummaryItem, RuleSet};
use crate::errors::Result;

/// Applies a rule set to text.
pub trait SanitizationEngine {
    /// Sanitizes `content`, returning the masked text and a summary of every rule that
    /// replaced at least one match.
    ///
    /// Rules run in rule-set order and each sees the output of the previous one.
    fn sanitize(&self, content: &str) -> Result<(String, Vec<RedactionSummaryItem>)>;

    /// Runs the same passes as [`SanitizationEngine::sanitize`] and keeps only the summary.
    fn analyze_for_stats(&self, content: &str) -> Result<Vec<RedactionSummaryItem>>;

    /// Returns the rule set the engine was built from.
    fn get_rules(&self) -> &RuleSet;
}
