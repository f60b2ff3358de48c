// cleanclip-core/tests/sanitize_tests.rs
//! Behavioral tests for ordered sanitization and the editor text format.

use anyhow::Result;
use tempfile::tempdir;
use test_log::test;

use cleanclip_core::{
    format_for_editor, has_sensitive_data, parse_editor_text, sanitize, CleanclipError,
    PatternStore, RegexEngine, RuleSet, SanitizationEngine,
};

#[test]
fn card_number_is_masked() -> Result<()> {
    let out = sanitize("Card: 4111-1111-1111-1111", &RuleSet::defaults())?;
    assert_eq!(out, "Card: [CARD]");
    Ok(())
}

#[test]
fn card_number_variants_are_masked() -> Result<()> {
    let defaults = RuleSet::defaults();
    assert_eq!(sanitize("pay 4111 1111 1111 1111 now", &defaults)?, "pay [CARD] now");
    assert_eq!(sanitize("pay 4111111111111111 now", &defaults)?, "pay [CARD] now");
    assert_eq!(sanitize("amex 3782 822463 10005", &defaults)?, "amex [CARD]");
    Ok(())
}

#[test]
fn email_is_masked() -> Result<()> {
    let out = sanitize("Contact: alice@example.com", &RuleSet::defaults())?;
    assert_eq!(out, "Contact: [EMAIL]");
    Ok(())
}

#[test]
fn text_without_sensitive_data_is_unchanged() -> Result<()> {
    let defaults = RuleSet::defaults();
    for text in [
        "",
        "Hello world, the meeting moved to 10:30 on 2024-05-01.",
        "Order #12345 shipped in 3 boxes.\nTracking follows tomorrow.",
        "user at example dot com",
    ] {
        let out = sanitize(text, &defaults)?;
        assert_eq!(out, text);
        assert!(!has_sensitive_data(text, &out));
    }
    Ok(())
}

#[test]
fn multiple_matches_across_lines() -> Result<()> {
    let input = "a@b.io\nsecond line with c@d.org and 5500 0000 0000 0004\n";
    let out = sanitize(input, &RuleSet::defaults())?;
    assert_eq!(out, "[EMAIL]\nsecond line with [EMAIL] and [CARD]\n");
    assert!(has_sensitive_data(input, &out));
    Ok(())
}

#[test]
fn rules_chain_in_order() -> Result<()> {
    let forward = RuleSet::from_pairs([("foo", "bar"), ("bar", "baz")])?;
    let reversed = RuleSet::from_pairs([("bar", "baz"), ("foo", "bar")])?;

    // Rule A's output creates a new match for rule B, and B replaces it.
    assert_eq!(sanitize("foo", &forward)?, "baz");
    // The same rules the other way round stop after the first substitution.
    assert_eq!(sanitize("foo", &reversed)?, "bar");
    Ok(())
}

#[test]
fn later_rule_can_match_earlier_placeholder() -> Result<()> {
    let rules = RuleSet::from_pairs([
        (r"[a-z]+@[a-z]+\.com", "[EMAIL]"),
        (r"\[EMAIL\]", "<redacted>"),
    ])?;
    assert_eq!(sanitize("to: joe@shop.com", &rules)?, "to: <redacted>");
    Ok(())
}

#[test]
fn matches_are_leftmost_first_and_non_overlapping() -> Result<()> {
    let rules = RuleSet::from_pairs([("aa", "X")])?;
    assert_eq!(sanitize("aaaaa", &rules)?, "XXa");

    let rules = RuleSet::from_pairs([("a|ab", "X")])?;
    assert_eq!(sanitize("ab", &rules)?, "Xb");
    Ok(())
}

#[test]
fn sanitize_does_not_mutate_inputs() -> Result<()> {
    let rules = RuleSet::defaults();
    let snapshot = rules.clone();
    let text = String::from("mail me: x@y.net");

    let _ = sanitize(&text, &rules)?;
    assert_eq!(rules, snapshot);
    assert_eq!(text, "mail me: x@y.net");
    Ok(())
}

#[test]
fn saved_rules_always_sanitize() -> Result<()> {
    let dir = tempdir()?;
    let store = PatternStore::new(dir.path().join("patterns.json"));
    let rules = parse_editor_text(
        "# custom\n\
         ^\\s*password:.*$ -> password: ***\n\
         (?i)bearer [a-z0-9._-]+ -> Bearer [TOKEN]\n\
         \\b\\d{3}-\\d{2}-\\d{4}\\b -> [SSN]\n",
    )?;
    store.save(&rules)?;

    let engine = RegexEngine::new(store.load()?)?;
    let input = "password: hunter2\nAuthorization: bearer abc.DEF-1\nssn 123-45-6789";
    let (out, summary) = engine.sanitize(input)?;
    assert_eq!(out, "password: ***\nAuthorization: Bearer [TOKEN]\nssn [SSN]");
    assert_eq!(summary.len(), 3);
    assert!(summary.iter().all(|item| item.occurrences == 1));
    Ok(())
}

#[test]
fn editor_scenarios() -> Result<()> {
    assert_eq!(parse_editor_text("# note\nfoo -> BAR\n")?, RuleSet::from_pairs([("foo", "BAR")])?);

    match parse_editor_text("nodelimiterhere") {
        Err(CleanclipError::InvalidRuleLine { line, content }) => {
            assert_eq!(line, 1);
            assert_eq!(content, "nodelimiterhere");
        }
        other => panic!("expected InvalidRuleLine, got {:?}", other),
    }
    Ok(())
}

#[test]
fn defaults_round_trip_through_editor_text() -> Result<()> {
    let defaults = RuleSet::defaults();
    let text = format_for_editor(&defaults);
    assert_eq!(text.lines().count(), defaults.len());
    assert_eq!(parse_editor_text(&text)?, defaults);
    Ok(())
}

#[test]
fn summary_reports_only_rules_that_fired() -> Result<()> {
    let engine = RegexEngine::new(RuleSet::defaults())?;
    let summary = engine.analyze_for_stats("reach me at ops@example.com or dev@example.com")?;
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].rule_position, 2);
    assert_eq!(summary[0].placeholder, "[EMAIL]");
    assert_eq!(summary[0].occurrences, 2);
    Ok(())
}
