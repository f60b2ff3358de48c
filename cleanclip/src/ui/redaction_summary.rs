// cleanclip/src/ui/redaction_summary.rs
//! Per-pattern summary table printed after a sanitize run.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::{self, Write};

use cleanclip_core::RedactionSummaryItem;

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes one table row per pattern that replaced something. Writes nothing for an
/// empty summary.
pub fn print_summary<W: Write>(
    summary: &[RedactionSummaryItem],
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    if summary.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Pattern", "Placeholder", "Replaced"]);

    for item in summary {
        table.add_row(vec![
            item.rule_position.to_string(),
            item.pattern.clone(),
            item.placeholder.clone(),
            item.occurrences.to_string(),
        ]);
    }

    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    let title = paint("Redaction Summary", ThemeEntry::Header, theme_map, supports_color);
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{table}")?;
    writeln!(writer, "Total replacements: {}", total)
}
