//! The human-editable text form of a [`RuleSet`].
//!
//! ```text
//! # comment line, ignored
//! \d{4}-\d{4}-\d{4}-\d{4} -> [CARD]
//! ```
//!
//! Each non-blank, non-comment line is `pattern -> placeholder`. The first unescaped `->`
//! splits the line; a `->` preceded by an odd number of backslashes belongs to the pattern
//! and is kept verbatim (`\-` is a literal hyphen in regex syntax). Everything after the
//! delimiter is the placeholder, which may itself contain `->`.

use log::debug;

use crate::config::{Rule, RuleSet};
use crate::errors::{CleanclipError, Result};

/// Comment lines prepended when the rule set is opened in an external editor.
pub const EDITOR_HEADER: &str = concat!(
    "# One pattern per line using the format: <regex> -> <placeholder>\n",
    "# Lines starting with # are ignored."
);

const DELIMITER: &str = "->";

/// Returns the byte offset of the first unescaped `->` in `line`.
pub(crate) fn find_delimiter(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut is_escaped = false;
    for (idx, &b) in bytes.iter().enumerate() {
        match b {
            b'\\' => is_escaped = !is_escaped,
            b'-' if !is_escaped && bytes.get(idx + 1) == Some(&b'>') => return Some(idx),
            _ => is_escaped = false,
        }
    }
    None
}

/// Parses editor text into a rule set.
///
/// Blank lines and `#` comments are skipped. A line without a delimiter fails with
/// [`CleanclipError::InvalidRuleLine`]; a line whose pattern does not validate fails with
/// [`CleanclipError::InvalidPattern`]. Line numbers are 1-based.
pub fn parse_editor_text(text: &str) -> Result<RuleSet> {
    let mut rules = RuleSet::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(split) = find_delimiter(line) else {
            return Err(CleanclipError::InvalidRuleLine {
                line: line_number,
                content: raw_line.to_string(),
            });
        };

        let pattern = &line[..split];
        let placeholder = &line[split + DELIMITER.len()..];
        let rule = Rule::new(pattern, placeholder).map_err(|e| e.at_line(line_number))?;
        rules.push(rule);
    }

    debug!("Parsed {} rules from editor text.", rules.len());
    Ok(rules)
}

/// Renders one `pattern -> placeholder` line per rule, in order.
pub fn format_for_editor(ruleset: &RuleSet) -> String {
    ruleset
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
