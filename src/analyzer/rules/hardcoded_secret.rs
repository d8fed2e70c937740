//! Quoted credential keys left in source.

use super::LineRule;
use crate::{Issue, Language, Severity};

/// Literal substrings (quotes included) that suggest a hardcoded credential
const SECRET_KEYS: &[&str] = &["\"password\"", "\"secret\""];

/// Rule for detecting potential hardcoded secrets
pub struct HardcodedSecretRule;

impl HardcodedSecretRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HardcodedSecretRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for HardcodedSecretRule {
    fn name(&self) -> &'static str {
        "hardcoded-secret"
    }

    fn check(&self, line: &str, line_no: usize, _language: Option<Language>) -> Option<Issue> {
        SECRET_KEYS.iter().any(|k| line.contains(k)).then(|| {
            Issue::at_line(Severity::High, "Potential hardcoded secret found", line_no, line)
        })
    }
}
