//! store.rs - Persistence of the rule set.
//!
//! [`PatternStore`] owns the JSON configuration file. The path is passed in explicitly so
//! tests and front ends can point it anywhere; [`PatternStore::default_path`] gives the
//! usual `~/.cleanclip/patterns.json`.
//!
//! Writes are atomic: the new content goes to a sibling temporary file under an exclusive
//! lock, is flushed to disk, and is then renamed over the target. On Unix the directory is
//! synced after the rename. A crash mid-write leaves the previous file intact.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::RuleSet;
use crate::errors::{CleanclipError, Result};
use crate::sanitizers::compiler::compile_rules;

const CONFIG_DIR_NAME: &str = ".cleanclip";
const CONFIG_FILE_NAME: &str = "patterns.json";
const TMP_SUFFIX: &str = ".tmp";

/// Loads and saves the rule set at a fixed path.
#[derive(Debug, Clone)]
pub struct PatternStore {
    path: PathBuf,
}

impl PatternStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store at [`PatternStore::default_path`].
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// `~/.cleanclip/patterns.json`, or `./.cleanclip/patterns.json` without a home directory.
    pub fn default_path() -> PathBuf {
        let base = dirs::home_dir().unwrap_or_else(|| {
            warn!("Could not determine the home directory; using the current directory.");
            PathBuf::from(".")
        });
        base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the rule set from disk.
    ///
    /// A missing file yields the built-in defaults. A file that cannot be read, is not
    /// JSON, is not a list of `[pattern, placeholder]` pairs, or holds an invalid pattern
    /// fails with [`CleanclipError::Config`].
    pub fn load(&self) -> Result<RuleSet> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No pattern configuration at {}; using built-in defaults.",
                    self.path.display()
                );
                return Ok(RuleSet::defaults());
            }
            Err(e) => return Err(CleanclipError::config(&self.path, e)),
        };

        let ruleset: RuleSet =
            serde_json::from_str(&text).map_err(|e| CleanclipError::config(&self.path, e))?;

        info!("Loaded {} rules from {}.", ruleset.len(), self.path.display());
        Ok(ruleset)
    }

    /// Validates and writes the rule set, creating the parent directory if needed.
    ///
    /// Validation happens before anything touches the disk, so an invalid pattern leaves
    /// the existing file unchanged.
    pub fn save(&self, ruleset: &RuleSet) -> Result<()> {
        compile_rules(ruleset)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(ruleset)
            .map_err(|e| CleanclipError::config(&self.path, e))?;
        self.write_atomically(&json)?;

        info!("Saved {} rules to {}.", ruleset.len(), self.path.display());
        Ok(())
    }

    /// Validates raw (pattern, placeholder) rows, as an editing form would hand them over,
    /// and saves them. The first invalid row is reported with its 1-based position and
    /// nothing is written.
    pub fn save_pairs<P, H>(&self, pairs: impl IntoIterator<Item = (P, H)>) -> Result<RuleSet>
    where
        P: Into<String>,
        H: Into<String>,
    {
        let ruleset = RuleSet::from_pairs(pairs)?;
        self.save(&ruleset)?;
        Ok(ruleset)
    }

    /// Writes the defaults if no configuration file exists yet. Returns whether it wrote.
    pub fn ensure_initialized(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        debug!("Initializing {} with default rules.", self.path.display());
        self.save(&RuleSet::defaults())?;
        Ok(true)
    }

    /// Overwrites the configuration with the built-in defaults.
    pub fn reset(&self) -> Result<RuleSet> {
        let defaults = RuleSet::defaults();
        self.save(&defaults)?;
        Ok(defaults)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(TMP_SUFFIX);
        self.path.with_file_name(name)
    }

    fn write_atomically(&self, bytes: &[u8]) -> Result<()> {
        let tmp_path = self.tmp_path();
        let written = (|| -> std::io::Result<()> {
            let mut tmp = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            fs2::FileExt::lock_exclusive(&tmp)?;
            tmp.write_all(bytes)?;
            tmp.flush()?;
            tmp.sync_all()?;
            fs2::FileExt::unlock(&tmp)?;
            Ok(())
        })();

        if let Err(e) = written.and_then(|_| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        sync_parent_dir(&self.path)?;
        Ok(())
    }
}

/// Flushes the directory entry created by the rename.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::File::open(parent)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> Result<()> {
    Ok(())
}
