// cleanclip-core/src/lib.rs
//! # CleanClip Core Library
//!
//! `cleanclip-core` holds the platform-independent logic of CleanClip: an ordered list of
//! (pattern, placeholder) rules, its on-disk JSON form, its human-editable text form, and
//! the sanitizer that applies it to clipboard text. It performs no clipboard access.
//!
//! ## Modules
//!
//! * `config`: [`Rule`] and [`RuleSet`], validated on construction, plus the built-in defaults.
//! * `store`: [`PatternStore`], which loads and atomically saves the JSON configuration.
//! * `editor`: [`parse_editor_text`] and [`format_for_editor`] for the
//!   `pattern -> placeholder` form.
//! * `sanitizers`: compilation of rule sets into regular expressions.
//! * `engine`: the [`SanitizationEngine`] trait.
//! * `engines`: [`RegexEngine`], the ordered regex implementation.
//! * `headless`: one-shot [`sanitize`].
//! * `errors`: [`CleanclipError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use cleanclip_core::{parse_editor_text, sanitize, RuleSet};
//!
//! fn main() -> Result<(), cleanclip_core::CleanclipError> {
//!     let defaults = RuleSet::defaults();
//!     assert_eq!(sanitize("Card: 4111-1111-1111-1111", &defaults)?, "Card: [CARD]");
//!
//!     let custom = parse_editor_text("# internal hosts\nsrv-\\d+ -> [HOST]\n")?;
//!     assert_eq!(sanitize("ping srv-42", &custom)?, "ping [HOST]");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible function returns [`CleanclipError`]. None of the errors is fatal; front
//! ends report them and keep the previous rule set or the defaults.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod editor;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod sanitizers;
pub mod store;

pub use config::{Rule, RuleSet, RedactionSummaryItem, DEFAULT_RULES, MAX_PATTERN_LENGTH};
pub use editor::{format_for_editor, parse_editor_text, EDITOR_HEADER};
pub use engine::SanitizationEngine;
pub use engines::regex_engine::RegexEngine;
pub use errors::CleanclipError;
pub use headless::{has_sensitive_data, sanitize};
pub use sanitizers::compiler::{compile_rules, CompiledRule, CompiledRules};
pub use store::PatternStore;
