// cleanclip/src/main.rs
//! CleanClip entry point.
//!
//! Parses the command line, sets up logging and the pattern store, and dispatches to the
//! sanitize or patterns command.

use anyhow::Result;
use clap::Parser;

use cleanclip::cli::{Cli, Commands};
use cleanclip::commands::patterns::run_patterns;
use cleanclip::commands::sanitize::{run_sanitize, SanitizeOptions};
use cleanclip::logger;
use cleanclip::ui::output_format::error_msg;
use cleanclip::ui::theme::ThemeStyle;
use cleanclip_core::PatternStore;

fn main() {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    let theme_map = ThemeStyle::default_theme_map();
    if let Err(e) = run(args, &theme_map) {
        error_msg(format!("{:#}", e), &theme_map);
        std::process::exit(1);
    }
}

fn run(args: Cli, theme_map: &cleanclip::ui::theme::ThemeMap) -> Result<()> {
    let store = match args.config {
        Some(path) => PatternStore::new(path),
        None => PatternStore::at_default_location(),
    };
    log::debug!("Using pattern configuration at {}", store.path().display());

    match args.command {
        Commands::Sanitize(cmd) => run_sanitize(
            &store,
            SanitizeOptions {
                stdin: cmd.stdin,
                stdout: cmd.stdout,
                diff: cmd.diff,
                no_summary: cmd.no_summary,
                wait: cmd.wait,
                quiet: args.quiet,
            },
            theme_map,
        ),
        Commands::Patterns(cmd) => run_patterns(&store, &cmd, args.quiet, theme_map),
    }
}
