//! Line rules for code review

pub mod hardcoded_secret;
pub mod line_length;
pub mod marker_comment;
pub mod unsafe_unwrap;

pub use hardcoded_secret::HardcodedSecretRule;
pub use line_length::{LineLengthRule, MAX_LINE_LENGTH};
pub use marker_comment::MarkerCommentRule;
pub use unsafe_unwrap::UnsafeUnwrapRule;

use crate::{Issue, Language};
use std::path::Path;

/// Trait for single-line rules
pub trait LineRule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Check one line; fires at most once per line.
    /// `line_no` is 1-indexed, `language` comes from the file's extension.
    fn check(&self, line: &str, line_no: usize, language: Option<Language>) -> Option<Issue>;
}

/// Runs the fixed rule battery over every line of a file
pub struct RuleEngine {
    rules: Vec<Box<dyn LineRule>>,
}

impl RuleEngine {
    /// Create the engine with the battery in its fixed evaluation order
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(MarkerCommentRule::new()),
                Box::new(LineLengthRule::new()),
                Box::new(HardcodedSecretRule::new()),
                Box::new(UnsafeUnwrapRule::new()),
            ],
        }
    }

    /// Names of the rules in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Detect issues in file content. Issues are ordered by line, then by rule order.
    pub fn detect(&self, content: &str, file_path: &Path) -> Vec<Issue> {
        self.detect_for_language(content, Language::from_path(file_path))
    }

    /// Detect issues with an already resolved language
    pub fn detect_for_language(&self, content: &str, language: Option<Language>) -> Vec<Issue> {
        let mut issues = Vec::new();
        for (zero_indexed, line) in content.lines().enumerate() {
            let line_no = zero_indexed + 1;
            issues.extend(
                self.rules
                    .iter()
                    .filter_map(|rule| rule.check(line, line_no, language)),
            );
        }
        issues
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    fn detect(content: &str, path: &str) -> Vec<Issue> {
        RuleEngine::new().detect(content, Path::new(path))
    }

    #[test]
    fn test_empty_file_has_no_issues() {
        assert!(detect("", "a.rs").is_empty());
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            RuleEngine::new().rule_names(),
            vec!["marker-comment", "line-length", "hardcoded-secret", "unsafe-unwrap"]
        );
    }

    #[test]
    fn test_multiple_rules_on_one_line_follow_battery_order() {
        let mut line = String::from("let k = \"secret\"; // TODO rotate");
        while line.chars().count() < 130 {
            line.push('x');
        }
        let issues = detect(&format!("fn main() {{}}\n{}\n", line), "config.py");

        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.line == Some(2)));
        assert_eq!(issues[0].message, "TODO or FIXME comment found");
        assert_eq!(issues[1].message, "Line too long (over 120 characters)");
        assert_eq!(issues[2].message, "Potential hardcoded secret found");
        assert_eq!(
            issues.iter().map(|i| i.severity).collect::<Vec<_>>(),
            vec![Severity::Medium, Severity::Low, Severity::High]
        );
    }

    #[test]
    fn test_issues_ordered_top_to_bottom() {
        let content = "let x = y.unwrap();\n// FIXME later\n";
        let issues = detect(content, "lib.rs");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].line, Some(1));
        assert_eq!(issues[0].message, "Unsafe unwrap() usage found");
        assert_eq!(issues[1].line, Some(2));
    }

    #[test]
    fn test_unwrap_gated_by_language() {
        let line = "value = thing.unwrap()\n";
        assert_eq!(detect(line, "main.rs").len(), 1);
        assert!(detect(line, "main.py").is_empty());
        assert!(detect(line, "notes.txt").is_empty());
    }

    #[test]
    fn test_trailing_newline_not_double_reported() {
        let issues = detect("// TODO\n", "a.js");
        assert_eq!(issues.len(), 1);
        let issues = detect("// TODO", "a.js");
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_no_dedup_across_lines() {
        let issues = detect("// TODO a\n// TODO b\n// TODO c", "a.go");
        assert_eq!(issues.len(), 3);
        assert_eq!(
            issues.iter().map(|i| i.line).collect::<Vec<_>>(),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_crlf_lines() {
        let issues = detect("ok\r\n// TODO here\r\n", "a.c");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, Some(2));
        assert_eq!(issues[0].code.as_deref(), Some("// TODO here"));
    }
}
