//! Terminal output for the cleanclip CLI: theme, status messages, diff and summary.

pub mod diff_viewer;
pub mod output_format;
pub mod redaction_summary;
pub mod theme;
