//! Regex sanitization support for CleanClip.
//!
//! This module turns a validated `RuleSet` into compiled regular expressions that the
//! engines in `engines` apply to clipboard text. Compilation happens once per engine;
//! nothing is cached between engines.

pub mod compiler;
