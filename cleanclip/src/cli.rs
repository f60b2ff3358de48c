//! This file defines the command-line interface (CLI) for the cleanclip application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cleanclip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask sensitive data in your clipboard",
    long_about = "CleanClip reads the clipboard, replaces credit card numbers, e-mail addresses and any other pattern you configure with placeholders, and writes the result back. Patterns are regular expressions applied in order; each one sees the output of the previous one.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(
        long,
        short = 'q',
        global = true,
        help = "Suppress all informational and debug messages."
    )]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Use a different pattern configuration file.
    #[arg(
        long = "config",
        value_name = "FILE",
        env = "CLEANCLIP_CONFIG",
        global = true,
        help = "Path to the pattern configuration file (defaults to ~/.cleanclip/patterns.json)."
    )]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cleanclip` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes the clipboard (or stdin) in place.
    #[command(
        about = "Sanitize the clipboard contents, replacing sensitive data with placeholders."
    )]
    Sanitize(SanitizeCommand),

    /// Manages the ordered list of patterns.
    #[command(subcommand, about = "Show, edit, import or reset the sanitization patterns.")]
    Patterns(PatternsCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Read the text from stdin instead of the clipboard.
    #[arg(long, help = "Read input from stdin instead of the clipboard (implies --stdout).")]
    pub stdin: bool,

    /// Print the sanitized text instead of writing it to the clipboard.
    #[arg(long, help = "Write the sanitized text to stdout instead of the clipboard.")]
    pub stdout: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff of the changes on stderr.")]
    pub diff: bool,

    /// Keep serving the clipboard until another application replaces it.
    #[arg(
        long,
        conflicts_with_all = ["stdin", "stdout"],
        help = "On Linux, stay running until another application takes over the clipboard."
    )]
    pub wait: bool,

    /// Suppress the redaction summary.
    #[arg(long = "no-summary", help = "Suppress the per-pattern summary.")]
    pub no_summary: bool,
}

/// Subcommands for the `patterns` command.
#[derive(Subcommand, Debug)]
pub enum PatternsCommand {
    #[command(about = "Print the patterns in editor format.")]
    Show,
    #[command(about = "Edit the patterns in $VISUAL or $EDITOR and save them.")]
    Edit,
    #[command(about = "Replace the patterns with the contents of an editor-format file.")]
    Import {
        /// File with one `pattern -> placeholder` line per rule; `-` reads stdin.
        #[arg(value_name = "FILE", help = "Editor-format file to import ('-' for stdin).")]
        path: PathBuf,
    },
    #[command(about = "Restore the built-in default patterns.")]
    Reset,
    #[command(about = "Print the path of the pattern configuration file.")]
    Path,
}
