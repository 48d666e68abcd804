//! Spelling Rule File Unit Tests
//!
//! Rule files on disk: parsing with bad lines, domain scoping, hot reload
//! and JSON exchange between engines.

use crate::core::preprocess::rules::parse_rules;
use crate::core::preprocess::{
    FileRuleSource, MatchKind, PreprocessError, SpellCheckConfig, SpellCorrectionEngine,
};
use crate::tests::common::{rule_file, RULES_WITH_BAD_LINE};

fn file_engine(path: &std::path::Path) -> SpellCorrectionEngine {
    SpellCorrectionEngine::new(
        Box::new(FileRuleSource::new(path)),
        SpellCheckConfig::default(),
    )
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_bad_line_is_skipped() {
    let parsed = parse_rules(RULES_WITH_BAD_LINE);
    assert_eq!(parsed.rules.len(), 2);
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].line, 3);

    let beijing = &parsed.rules[0];
    assert_eq!(beijing.id, "city.beijing");
    assert_eq!(beijing.weight, 9);
    assert_eq!(beijing.description, "capital");
    assert_eq!(parsed.rules[1].domain, "INTL");
}

#[test]
fn test_bundled_rule_file_is_clean() {
    let parsed = parse_rules(include_str!("../../../data/spellcheck.rules"));
    assert!(parsed.skipped.is_empty(), "skipped: {:?}", parsed.skipped);
    assert_eq!(parsed.rules.len(), 17);
    assert!(parsed.rules.iter().all(|r| r.is_valid()));
}

#[test]
fn test_engine_loads_file() {
    let file = rule_file(RULES_WITH_BAD_LINE);
    let engine = file_engine(file.path());
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.get_correction("北平", "CN"), "北京");
    assert_eq!(engine.get_correction("Shangri La", "INTL"), "香格里拉");
}

// ============================================================================
// Domain Scoping
// ============================================================================

#[test]
fn test_fuzzy_match_respects_domain() {
    let file = rule_file(RULES_WITH_BAD_LINE);
    let engine = file_engine(file.path());

    assert_eq!(engine.get_correction("shangrilla", "CN"), "shangrilla");
    let correction = engine.correct_with_details("shangrilla", "intl").unwrap();
    assert_eq!(correction.corrected, "香格里拉");
    assert_eq!(correction.kind, MatchKind::Fuzzy);
}

#[test]
fn test_direct_hit_ignores_domain() {
    let file = rule_file(RULES_WITH_BAD_LINE);
    let engine = file_engine(file.path());
    assert_eq!(engine.get_correction("shangrila", "CN"), "香格里拉");
}

// ============================================================================
// Reload
// ============================================================================

#[test]
fn test_reload_picks_up_changes_and_keeps_usage() {
    let file = rule_file(RULES_WITH_BAD_LINE);
    let engine = file_engine(file.path());
    engine.get_correction("北平", "ALL");

    let updated = format!("{}\nbrand.hyatt = 凯越 | 凯悦 | 6\n", RULES_WITH_BAD_LINE);
    std::fs::write(file.path(), updated).unwrap();
    assert_eq!(engine.reload().unwrap(), 3);

    assert_eq!(engine.get_correction("凯越", "ALL"), "凯悦");
    let stats = engine.statistics();
    assert_eq!(stats.total_rules, 3);
    assert_eq!(stats.usage.get("city.beijing"), Some(&1));
    assert_eq!(stats.usage.get("brand.hyatt"), Some(&1));
}

#[test]
fn test_failed_reload_keeps_rules() {
    let file = rule_file(RULES_WITH_BAD_LINE);
    let path = file.path().to_path_buf();
    let engine = file_engine(&path);
    drop(file);

    assert!(matches!(engine.reload(), Err(PreprocessError::RulesNotFound(_))));
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.get_correction("北亰", "ALL"), "北京");
}

#[test]
fn test_missing_file_starts_empty() {
    let engine = file_engine(std::path::Path::new("/definitely/not/here.rules"));
    assert!(engine.is_empty());
    assert_eq!(engine.get_correction("北亰", "ALL"), "北亰");
}

#[test]
fn test_config_rules_path() {
    let file = rule_file(RULES_WITH_BAD_LINE);
    let config = SpellCheckConfig {
        rules_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let engine = SpellCorrectionEngine::from_config(config);
    assert_eq!(engine.len(), 2);
}

// ============================================================================
// Exchange
// ============================================================================

#[test]
fn test_export_then_import() {
    let file = rule_file(RULES_WITH_BAD_LINE);
    let source = file_engine(file.path());
    source.get_correction("北平", "ALL");
    let exported = source.export_rules().unwrap();

    let target = SpellCorrectionEngine::empty();
    assert_eq!(target.import_rules(&exported).unwrap(), 2);
    assert_eq!(target.get_correction("shangri la", "ALL"), "香格里拉");

    let beijing = target
        .rules()
        .into_iter()
        .find(|r| r.id == "city.beijing")
        .unwrap();
    assert_eq!(beijing.usage_count, 1);
    assert!(beijing.last_used.is_some());
}

#[test]
fn test_import_skips_invalid_rules() {
    let payload = r#"[
        {"id": "ok", "wrong_forms": ["abcd"], "correct_forms": ["abce"]},
        {"id": "heavy", "wrong_forms": ["wxyz"], "correct_forms": ["wxya"], "weight": 42}
    ]"#;
    let engine = SpellCorrectionEngine::empty();
    assert_eq!(engine.import_rules(payload).unwrap(), 1);
    assert_eq!(engine.len(), 1);
}
