//! Edge case tests: degenerate inputs must not panic.

use devagent::analyzer::{ReviewAssembler, RuleEngine, ScoreCalculator};
use devagent::suggestions::SuggestionEngine;
use devagent::{review_file, Language, Severity};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn write_temp(suffix: &str, content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn empty_file_no_issues() {
    let file = write_temp(".rs", b"");
    let r = review_file(file.path());
    assert!(r.issues.is_empty());
    assert!(r.suggestions.is_empty());
    assert_eq!(r.score, 1.0);
}

#[test]
fn single_newline_counts_as_empty() {
    let file = write_temp(".py", b"\n");
    let r = review_file(file.path());
    assert!(r.issues.is_empty());
    assert_eq!(r.score, 1.0);
}

#[test]
fn line_length_boundary() {
    let engine = RuleEngine::new();
    let at_limit = "a".repeat(120);
    let over = "a".repeat(121);
    assert!(engine.detect(&at_limit, Path::new("x.rs")).is_empty());
    let issues = engine.detect(&over, Path::new("x.rs"));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Low);
}

#[test]
fn line_length_counts_characters_not_bytes() {
    let engine = RuleEngine::new();
    let wide = "é".repeat(120);
    assert!(wide.len() > 120);
    assert!(engine.detect(&wide, Path::new("x.py")).is_empty());
}

#[test]
fn three_rules_on_one_line_in_battery_order() {
    let line = format!("// TODO \"secret\" {}", "x".repeat(120));
    let issues = RuleEngine::new().detect(&line, Path::new("x.js"));
    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|i| i.line == Some(1)));
    assert_eq!(issues[0].severity, Severity::Medium);
    assert_eq!(issues[1].severity, Severity::Low);
    assert_eq!(issues[2].severity, Severity::High);
}

#[test]
fn unwrap_only_flagged_in_rust() {
    let line = "let v = maybe.unwrap();";
    let engine = RuleEngine::new();
    assert_eq!(engine.detect(line, Path::new("a.rs")).len(), 1);
    assert!(engine.detect(line, Path::new("a.ts")).is_empty());
    assert!(engine.detect(line, Path::new("a")).is_empty());
}

#[test]
fn suggestions_not_repeated_per_line() {
    let content = "println!(\"a\");\n".repeat(50);
    let suggestions = SuggestionEngine::new().suggest(&content, Path::new("main.rs"));
    assert_eq!(suggestions.len(), 1);
}

#[test]
fn uppercase_extension_is_recognized() {
    assert_eq!(Language::from_path(Path::new("MAIN.RS")), Some(Language::Rust));
    let file = write_temp(".PY", b"def f():\n    pass\n");
    let r = review_file(file.path());
    assert_eq!(r.suggestions.len(), 1);
}

#[test]
fn crlf_line_endings() {
    let content = "// TODO\r\nfn a() {}\r\n// FIXME\r\n";
    let issues = RuleEngine::new().detect(content, Path::new("a.rs"));
    let lines: Vec<_> = issues.iter().map(|i| i.line).collect();
    assert_eq!(lines, vec![Some(1), Some(3)]);
    assert_eq!(issues[0].code.as_deref(), Some("// TODO"));
}

#[test]
fn score_never_leaves_unit_interval() {
    let issues = RuleEngine::new().detect(&"// TODO\n".repeat(100), Path::new("a.rs"));
    let s = ScoreCalculator::score("// TODO", Some(Language::Rust), &issues);
    assert!((0.0..=1.0).contains(&s));
    let s = ScoreCalculator::score(
        "use tracing::info;\nfn f() -> Result<(), E> {}",
        Some(Language::Rust),
        &[],
    );
    assert_eq!(s, 1.0);
}

#[test]
fn nonexistent_file_is_degraded_not_panic() {
    let r = review_file(Path::new("/no/such/file.rs"));
    assert!(r.is_degraded());
    assert_eq!(r.score, 0.0);
}

#[test]
fn binary_file_is_degraded() {
    let file = write_temp(".c", &[0x00, 0xc3, 0x28, 0xff]);
    let r = review_file(file.path());
    assert!(r.is_degraded());
    assert!(r.issues[0].message.starts_with("Error reading file: "));
}

#[test]
fn directory_without_code_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "TODO").unwrap();
    std::fs::write(dir.path().join("Makefile"), "all:").unwrap();
    assert!(ReviewAssembler::new().review_tree(dir.path()).is_empty());
}

#[test]
fn file_as_review_root() {
    let file = write_temp(".go", b"// TODO\n");
    let reviews = ReviewAssembler::new().review_tree(file.path());
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].issues.len(), 1);
}
