// cleanclip-core/src/headless.rs
//! Convenience wrappers for one-shot sanitization.
//!
//! [`sanitize`] compiles a rule set, applies it once and throws the engine away. Callers
//! that sanitize repeatedly with the same rules should build a [`RegexEngine`] instead.

use crate::config::RuleSet;
use crate::engine::SanitizationEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::Result;

/// Applies every rule of `ruleset` to `text`, in order.
///
/// Fails with `InvalidPattern` if a pattern does not compile; no rule is ever skipped.
pub fn sanitize(text: &str, ruleset: &RuleSet) -> Result<String> {
    let engine = RegexEngine::new(ruleset.clone())?;
    let (sanitized, _) = engine.sanitize(text)?;
    Ok(sanitized)
}

/// True when sanitizing changed the text.
pub fn has_sensitive_data(original: &str, sanitized: &str) -> bool {
    original != sanitized
}
