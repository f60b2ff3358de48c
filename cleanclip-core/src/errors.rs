//! errors.rs - Custom error types for the cleanclip-core library.
//!
//! Every fallible operation in the core returns [`CleanclipError`]. All variants are
//! recoverable: the front end is expected to report them and keep running with the
//! previous valid rule set (or the built-in defaults).
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the core library.
pub type Result<T, E = CleanclipError> = std::result::Result<T, E>;

/// All error kinds produced by `cleanclip-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanclipError {
    /// The configuration file exists but could not be read or does not hold a valid rule list.
    #[error("Failed to load pattern configuration '{}': {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// A rule pattern is not an acceptable regular expression.
    #[error("Invalid pattern '{pattern}'{}: {reason}", describe_line(.line))]
    InvalidPattern {
        pattern: String,
        /// 1-based rule position or editor line, when known.
        line: Option<usize>,
        reason: String,
    },

    /// An editor line is missing the `->` delimiter.
    #[error("Line {line}: expected 'pattern -> placeholder', found '{content}'")]
    InvalidRuleLine { line: usize, content: String },

    #[error("Invalid placeholder '{placeholder}': {reason}")]
    InvalidPlaceholder { placeholder: String, reason: String },

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" on line {}", n),
        None => String::new(),
    }
}

impl CleanclipError {
    /// Attaches a line number to an `InvalidPattern` error; other variants pass through.
    pub fn at_line(self, n: usize) -> Self {
        match self {
            CleanclipError::InvalidPattern { pattern, reason, .. } => {
                CleanclipError::InvalidPattern { pattern, line: Some(n), reason }
            }
            other => other,
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CleanclipError::Config { path: path.into(), reason: reason.to_string() }
    }
}
