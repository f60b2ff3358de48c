//! Module for the colors of the CLI output.
//!
//! Each logical kind of message maps to a 16-color ANSI foreground. Colors are only
//! applied when the destination stream is a terminal.

use owo_colors::AnsiColors;
use std::collections::HashMap;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Style for prominent headers or section titles.
    Header,
    /// Style for successful operation messages.
    Success,
    /// Style for general informational messages.
    Info,
    /// Style for warning messages.
    Warn,
    /// Style for error messages.
    Error,
    /// Style for lines added in a diff view.
    DiffAdded,
    /// Style for lines removed in a diff view.
    DiffRemoved,
    /// Style for the header of a diff view.
    DiffHeader,
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThemeStyle {
    pub fg: Option<AnsiColors>,
}

impl ThemeStyle {
    const fn fg(color: AnsiColors) -> Self {
        ThemeStyle { fg: Some(color) }
    }

    /// Returns the default theme map.
    pub fn default_theme_map() -> ThemeMap {
        HashMap::from([
            (ThemeEntry::Header, Self::fg(AnsiColors::BrightWhite)),
            (ThemeEntry::Success, Self::fg(AnsiColors::Green)),
            (ThemeEntry::Info, Self::fg(AnsiColors::Cyan)),
            (ThemeEntry::Warn, Self::fg(AnsiColors::Yellow)),
            (ThemeEntry::Error, Self::fg(AnsiColors::Red)),
            (ThemeEntry::DiffAdded, Self::fg(AnsiColors::Green)),
            (ThemeEntry::DiffRemoved, Self::fg(AnsiColors::Red)),
            (ThemeEntry::DiffHeader, Self::fg(AnsiColors::Yellow)),
        ])
    }
}

/// Looks up the ANSI color of `entry`, if the theme defines one.
pub fn color_for(entry: ThemeEntry, theme_map: &ThemeMap) -> Option<AnsiColors> {
    theme_map.get(&entry).and_then(|style| style.fg)
}
