// cleanclip/src/ui/output_format.rs
//! Formatting of status messages written to stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};
use is_terminal::IsTerminal;

/// Writes `text` in the color of `entry` when `supports_color` is set.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> String {
    match color_for(entry, theme_map) {
        Some(color) if supports_color => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    label: &str,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", paint(label, entry, theme_map, supports_color), message)
}

pub fn print_info_message<W: Write>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "[cleanclip]", message, ThemeEntry::Info, theme_map, supports_color)
}

pub fn print_success_message<W: Write>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "[cleanclip]", message, ThemeEntry::Success, theme_map, supports_color)
}

pub fn print_warn_message<W: Write>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "[warning]", message, ThemeEntry::Warn, theme_map, supports_color)
}

pub fn print_error_message<W: Write>(
    writer: &mut W,
    message: &str,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    print_message(writer, "[error]", message, ThemeEntry::Error, theme_map, supports_color)
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_without_color_support() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "config broken", &theme, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[warning] config broken\n");
    }

    #[test]
    fn colored_output_contains_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let painted = paint("x", ThemeEntry::Error, &theme, true);
        assert!(painted.contains('\u{1b}'));
        assert!(painted.contains('x'));
    }
}
