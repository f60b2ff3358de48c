//! `cleanclip sanitize`: mask sensitive data in the clipboard (or stdin).

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Read, Write};

use cleanclip_core::{
    has_sensitive_data, PatternStore, RegexEngine, RedactionSummaryItem,
    RuleSet, SanitizationEngine,
};

use crate::ui::diff_viewer;
use crate::ui::output_format::{info_msg, success_msg, warn_msg};
use crate::ui::redaction_summary;
use crate::ui::theme::ThemeMap;
use crate::utils::clipboard::{
    copy_to_clipboard, may_lose_clipboard_on_exit, read_clipboard,
};
use is_terminal::IsTerminal;

/// Options for a sanitize run.
pub struct SanitizeOptions {
    /// Read from stdin instead of the clipboard.
    pub stdin: bool,
    /// Print the result instead of writing it to the clipboard.
    pub stdout: bool,
    pub diff: bool,
    pub no_summary: bool,
    /// Block until another application owns the clipboard (Linux).
    pub wait: bool,
    pub quiet: bool,
}

impl SanitizeOptions {
    fn writes_to_stdout(&self) -> bool {
        self.stdin || self.stdout
    }
}

/// Loads the rule set, reporting a broken configuration and falling back to the defaults
/// for this run.
pub fn load_rules_for_session(store: &PatternStore, theme_map: &ThemeMap) -> RuleSet {
    match store.load() {
        Ok(rules) => rules,
        Err(e) => {
            warn_msg(format!("{}. Using the built-in patterns for this run.", e), theme_map);
            RuleSet::defaults()
        }
    }
}

/// The main operation runner for the sanitize command.
pub fn run_sanitize(
    store: &PatternStore,
    opts: SanitizeOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting sanitize operation.");

    match store.ensure_initialized() {
        Ok(true) => info!("Created {} with the default patterns.", store.path().display()),
        Ok(false) => {}
        Err(e) => warn_msg(format!("Could not create the pattern configuration: {}", e), theme_map),
    }

    let rules = load_rules_for_session(store, theme_map);
    let engine =
        RegexEngine::new(rules).context("Failed to compile the sanitization patterns")?;
    info!("Applying {} patterns from {}.", engine.get_rules().len(), store.path().display());

    let Some(input) = read_input(&opts)? else {
        warn_msg("No text data was found on the clipboard.", theme_map);
        return Ok(());
    };

    let (sanitized, summary) = engine.sanitize(&input).context("Sanitization failed")?;
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        input.len(),
        sanitized.len()
    );

    if opts.wait && !opts.writes_to_stdout() && !opts.quiet {
        info_msg("Serving the clipboard until another application replaces it.", theme_map);
    }
    write_output(&opts, &sanitized)?;
    if !opts.writes_to_stdout() && may_lose_clipboard_on_exit(opts.wait) && !opts.quiet {
        warn_msg(
            "The clipboard keeps this text only if a clipboard manager is running; \
             use --wait to keep serving it.",
            theme_map,
        );
    }

    if opts.diff {
        let stderr_supports_color = io::stderr().is_terminal();
        diff_viewer::print_diff(
            &input,
            &sanitized,
            &mut io::stderr(),
            theme_map,
            stderr_supports_color,
        )?;
    }

    if !opts.quiet {
        report_outcome(&opts, &input, &sanitized, theme_map);
    }
    handle_redaction_summary(&summary, &opts, theme_map)?;

    info!("Sanitize operation completed.");
    Ok(())
}

fn read_input(opts: &SanitizeOptions) -> Result<Option<String>> {
    if opts.stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("Failed to read from stdin")?;
        return Ok(Some(buf));
    }
    Ok(read_clipboard()?.filter(|text| !text.is_empty()))
}

fn write_output(opts: &SanitizeOptions, sanitized: &str) -> Result<()> {
    if opts.writes_to_stdout() {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writer.write_all(sanitized.as_bytes())?;
        writer.flush()?;
    } else {
        copy_to_clipboard(sanitized, opts.wait)?;
    }
    Ok(())
}

fn report_outcome(opts: &SanitizeOptions, original: &str, sanitized: &str, theme_map: &ThemeMap) {
    let target = if opts.writes_to_stdout() { "Input" } else { "Clipboard" };
    if has_sensitive_data(original, sanitized) {
        success_msg(
            format!("{} sanitized: sensitive data was replaced with placeholders.", target),
            theme_map,
        );
    } else {
        info_msg(format!("{} unchanged: no sensitive data was detected.", target), theme_map);
    }
}

fn handle_redaction_summary(
    summary: &[RedactionSummaryItem],
    opts: &SanitizeOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(
            summary,
            &mut io::stderr(),
            theme_map,
            stderr_supports_color,
        )?;
    }
    Ok(())
}
