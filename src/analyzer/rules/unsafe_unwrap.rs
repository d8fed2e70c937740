//! Panicking unwrap calls in languages that have the idiom.

use super::LineRule;
use crate::{Issue, Language, Severity};

/// Rule for detecting unwrap() on fallible values
pub struct UnsafeUnwrapRule;

impl UnsafeUnwrapRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnsafeUnwrapRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for UnsafeUnwrapRule {
    fn name(&self) -> &'static str {
        "unsafe-unwrap"
    }

    fn check(&self, line: &str, line_no: usize, language: Option<Language>) -> Option<Issue> {
        let marker = language?.unwrap_marker()?;
        line.contains(marker).then(|| {
            Issue::at_line(Severity::High, "Unsafe unwrap() usage found", line_no, line)
        })
    }
}
