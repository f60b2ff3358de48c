//! Command-line integration tests for the `cleanclip` binary.
//!
//! Every test points the binary at a pattern file inside a temporary directory and uses
//! `--stdin`, so no test touches the real clipboard or the user's home directory.

use anyhow::Result;
#[allow(unused_imports)] // Used for `Command::cargo_bin` and `assert` method
use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use test_log::test;

/// Creates a temporary directory and the config path inside it.
fn temp_config() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join(".cleanclip").join("patterns.json");
    (dir, path)
}

fn cleanclip(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cleanclip").unwrap();
    cmd.env("CLEANCLIP_CONFIG", config);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn sanitize_stdin(config: &Path, input: &str, extra: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cleanclip(config);
    cmd.arg("sanitize").arg("--stdin").args(extra);
    cmd.write_stdin(input);
    cmd.assert()
}

#[test]
fn masks_card_and_email_from_stdin() -> Result<()> {
    let (_dir, config) = temp_config();

    sanitize_stdin(&config, "Card: 4111-1111-1111-1111\nContact: alice@example.com\n", &[])
        .success()
        .stdout("Card: [CARD]\nContact: [EMAIL]\n")
        .stderr(predicate::str::contains("sensitive data was replaced with placeholders"))
        .stderr(predicate::str::contains("Total replacements: 2"));

    // The first run writes the defaults to disk.
    let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(&config)?)?;
    assert_eq!(on_disk.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn clean_text_passes_through_unchanged() -> Result<()> {
    let (_dir, config) = temp_config();
    let input = "Nothing to hide here.\nMeeting at 10:30.\n";

    sanitize_stdin(&config, input, &[])
        .success()
        .stdout(input)
        .stderr(predicate::str::contains("no sensitive data was detected"))
        .stderr(predicate::str::contains("Redaction Summary").not());
    Ok(())
}

#[test]
fn broken_config_falls_back_to_defaults() -> Result<()> {
    let (_dir, config) = temp_config();
    fs::create_dir_all(config.parent().unwrap())?;
    fs::write(&config, "not a json list")?;

    sanitize_stdin(&config, "mail bob@example.org", &["--no-summary"])
        .success()
        .stdout("mail [EMAIL]")
        .stderr(predicate::str::contains("Failed to load pattern configuration"))
        .stderr(predicate::str::contains("Using the built-in patterns for this run"));

    // The broken file is reported, not overwritten.
    assert_eq!(fs::read_to_string(&config)?, "not a json list");
    Ok(())
}

#[test]
fn imported_rules_chain_in_order() -> Result<()> {
    let (dir, config) = temp_config();
    let rules_file = dir.path().join("rules.txt");
    fs::write(&rules_file, "# chain\nfoo -> bar\nbar -> baz\n")?;

    cleanclip(&config)
        .args(["patterns", "import"])
        .arg(&rules_file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved 2 patterns"));

    sanitize_stdin(&config, "foo", &["--no-summary"]).success().stdout("baz");

    fs::write(&rules_file, "bar -> baz\nfoo -> bar\n")?;
    cleanclip(&config).args(["patterns", "import"]).arg(&rules_file).assert().success();
    sanitize_stdin(&config, "foo", &["--no-summary"]).success().stdout("bar");
    Ok(())
}

#[test]
fn import_from_stdin() -> Result<()> {
    let (_dir, config) = temp_config();

    cleanclip(&config)
        .args(["patterns", "import", "-"])
        .write_stdin("secret-\\d+ -> [SECRET]\n")
        .assert()
        .success();

    sanitize_stdin(&config, "id secret-42 ok", &["--no-summary"])
        .success()
        .stdout("id [SECRET] ok");
    Ok(())
}

#[test]
fn invalid_import_reports_line_and_keeps_file() -> Result<()> {
    let (dir, config) = temp_config();
    cleanclip(&config).args(["patterns", "reset"]).assert().success();
    let before = fs::read(&config)?;

    let rules_file = dir.path().join("rules.txt");
    fs::write(&rules_file, "foo -> BAR\nnodelimiterhere\n")?;
    cleanclip(&config)
        .args(["patterns", "import"])
        .arg(&rules_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2"));

    fs::write(&rules_file, "( -> BROKEN\n")?;
    cleanclip(&config)
        .args(["patterns", "import"])
        .arg(&rules_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern '('"));

    assert_eq!(fs::read(&config)?, before);
    Ok(())
}

#[test]
fn show_prints_editor_format() -> Result<()> {
    let (_dir, config) = temp_config();

    cleanclip(&config)
        .args(["patterns", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# One pattern per line"))
        .stdout(predicate::str::contains("-> [CARD]"))
        .stdout(predicate::str::contains("-> [EMAIL]"));
    Ok(())
}

#[test]
fn show_fails_on_broken_config() -> Result<()> {
    let (_dir, config) = temp_config();
    fs::create_dir_all(config.parent().unwrap())?;
    fs::write(&config, "[[\"only-one\"]]")?;

    cleanclip(&config)
        .args(["patterns", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load pattern configuration"));
    Ok(())
}

#[test]
fn reset_restores_defaults() -> Result<()> {
    let (dir, config) = temp_config();
    let rules_file = dir.path().join("rules.txt");
    fs::write(&rules_file, "x -> y\n")?;
    cleanclip(&config).args(["patterns", "import"]).arg(&rules_file).assert().success();

    cleanclip(&config)
        .args(["patterns", "reset"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Restored 2 default patterns"));

    sanitize_stdin(&config, "x", &["--no-summary"]).success().stdout("x");
    Ok(())
}

#[test]
fn path_prints_configured_location() -> Result<()> {
    let (_dir, config) = temp_config();

    cleanclip(&config)
        .args(["patterns", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.to_string_lossy().as_ref()));
    Ok(())
}

#[test]
fn config_flag_overrides_environment() -> Result<()> {
    let (_dir, env_config) = temp_config();
    let (_other, flag_config) = temp_config();

    cleanclip(&env_config)
        .arg("--config")
        .arg(&flag_config)
        .args(["patterns", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(flag_config.to_string_lossy().as_ref()));
    Ok(())
}

#[test]
fn diff_is_written_to_stderr() -> Result<()> {
    let (_dir, config) = temp_config();

    sanitize_stdin(&config, "keep\nmail a@b.io\n", &["--diff", "--no-summary"])
        .success()
        .stdout("keep\nmail [EMAIL]\n")
        .stderr(predicate::str::contains("-mail a@b.io"))
        .stderr(predicate::str::contains("+mail [EMAIL]"));
    Ok(())
}

#[test]
fn quiet_suppresses_messages() -> Result<()> {
    let (_dir, config) = temp_config();

    sanitize_stdin(&config, "a@b.io", &[])
        .success();
    let mut cmd = cleanclip(&config);
    cmd.args(["--quiet", "sanitize", "--stdin"]).write_stdin("a@b.io");
    cmd.assert().success().stdout("[EMAIL]").stderr("");
    Ok(())
}

#[cfg(unix)]
#[test]
fn edit_without_changes_keeps_rules() -> Result<()> {
    let (_dir, config) = temp_config();
    cleanclip(&config).args(["patterns", "reset"]).assert().success();
    let before = fs::read(&config)?;

    cleanclip(&config)
        .env("VISUAL", "true")
        .args(["patterns", "edit"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No changes made."));

    assert_eq!(fs::read(&config)?, before);
    Ok(())
}

#[cfg(unix)]
#[test]
fn failing_editor_saves_nothing() -> Result<()> {
    let (_dir, config) = temp_config();

    cleanclip(&config)
        .env("VISUAL", "false")
        .args(["patterns", "edit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("patterns were not saved"));

    assert!(!config.exists());
    Ok(())
}
