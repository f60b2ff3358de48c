//! `cleanclip patterns ...`: inspect and change the ordered pattern list.
//!
//! Edited text is parsed and validated in full before anything is written, so a typo in
//! the editor never replaces a working configuration.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::Command;

use cleanclip_core::{
    format_for_editor, parse_editor_text, PatternStore, RuleSet, EDITOR_HEADER,
};

use crate::cli::PatternsCommand;
use crate::commands::sanitize::load_rules_for_session;
use crate::ui::output_format::{info_msg, success_msg};
use crate::ui::theme::ThemeMap;

#[cfg(target_os = "windows")]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(target_os = "windows"))]
const FALLBACK_EDITOR: &str = "vi";

/// Dispatches a `patterns` subcommand.
pub fn run_patterns(
    store: &PatternStore,
    command: &PatternsCommand,
    quiet: bool,
    theme_map: &ThemeMap,
) -> Result<()> {
    match command {
        PatternsCommand::Show => show(store),
        PatternsCommand::Edit => edit(store, quiet, theme_map),
        PatternsCommand::Import { path } => import(store, path, quiet, theme_map),
        PatternsCommand::Reset => {
            let defaults = store.reset().context("Failed to restore the default patterns")?;
            if !quiet {
                success_msg(format!("Restored {} default patterns.", defaults.len()), theme_map);
            }
            Ok(())
        }
        PatternsCommand::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

/// Renders the rule set the way the editor shows it.
pub fn editor_document(rules: &RuleSet) -> String {
    let body = format_for_editor(rules);
    if body.is_empty() {
        format!("{}\n", EDITOR_HEADER)
    } else {
        format!("{}\n{}\n", EDITOR_HEADER, body)
    }
}

fn show(store: &PatternStore) -> Result<()> {
    let rules = store.load().context("Cannot show patterns")?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    writer.write_all(editor_document(&rules).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Parses edited text and saves it. Nothing is written if any line is invalid.
pub fn save_edited_text(store: &PatternStore, text: &str) -> Result<RuleSet> {
    let rules = parse_editor_text(text).context("Patterns were not saved")?;
    if rules.is_empty() {
        bail!("Patterns were not saved: add at least one pattern before saving.");
    }
    store.save(&rules).context("Patterns were not saved")?;
    Ok(rules)
}

fn import(store: &PatternStore, path: &Path, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("Failed to read patterns from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    let rules = save_edited_text(store, &text)?;
    if !quiet {
        let message = format!("Saved {} patterns to {}.", rules.len(), store.path().display());
        success_msg(message, theme_map);
    }
    Ok(())
}

fn edit(store: &PatternStore, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let rules = load_rules_for_session(store, theme_map);
    let original = editor_document(&rules);

    let mut scratch = tempfile::Builder::new()
        .prefix("cleanclip-patterns-")
        .suffix(".txt")
        .tempfile()
        .context("Failed to create a temporary file for editing")?;
    scratch.write_all(original.as_bytes())?;
    scratch.flush()?;

    launch_editor(scratch.path())?;

    let edited = fs::read_to_string(scratch.path()).context("Failed to read the edited patterns")?;
    if edited == original {
        if !quiet {
            info_msg("No changes made.", theme_map);
        }
        return Ok(());
    }

    let saved = save_edited_text(store, &edited)?;
    info!("Saved {} edited patterns.", saved.len());
    if !quiet {
        let message = format!("Saved {} patterns to {}.", saved.len(), store.path().display());
        success_msg(message, theme_map);
    }
    Ok(())
}

/// Picks the editor command from `$VISUAL`, then `$EDITOR`.
fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

fn launch_editor(file: &Path) -> Result<()> {
    let command_line = editor_command();
    let mut parts = command_line.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("No editor configured; set $EDITOR");
    };
    debug!("Launching editor '{}' on {}", command_line, file.display());

    let status = Command::new(program)
        .args(parts)
        .arg(file)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", command_line))?;
    if !status.success() {
        bail!("Editor '{}' exited with {}; patterns were not saved", command_line, status);
    }
    Ok(())
}
