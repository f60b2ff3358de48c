// cleanclip/src/ui/diff_viewer.rs
//! Line diff between the original and sanitized text.
//!
//! Removed lines are printed in the `DiffRemoved` color, added lines in `DiffAdded`.

use diffy::{create_patch, Line as DiffLine};
use std::io::{self, Write};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes a unified diff of `original` against `sanitized` to `writer`.
pub fn print_diff<W: Write>(
    original: &str,
    sanitized: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let header = paint("--- Diff View ---", ThemeEntry::DiffHeader, theme_map, supports_color);
    writeln!(writer, "{}", header)?;

    let patch = create_patch(original, sanitized);
    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    let line = format!("-{}", s.trim_end_matches('\n'));
                    let line = paint(&line, ThemeEntry::DiffRemoved, theme_map, supports_color);
                    writeln!(writer, "{}", line)?;
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let line = format!("+{}", s.trim_end_matches('\n'));
                    let line = paint(&line, ThemeEntry::DiffAdded, theme_map, supports_color);
                    writeln!(writer, "{}", line)?;
                }
                DiffLine::Context(s) => {
                    writeln!(writer, " {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    let footer = paint("-----------------", ThemeEntry::DiffHeader, theme_map, supports_color);
    writeln!(writer, "{}", footer)
}
