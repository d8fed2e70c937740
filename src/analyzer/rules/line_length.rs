//! Overlong lines.

use super::LineRule;
use crate::{Issue, Language, Severity};

/// Longest line (in characters, terminator excluded) that passes
pub const MAX_LINE_LENGTH: usize = 120;

/// Rule for detecting lines longer than [`MAX_LINE_LENGTH`]
pub struct LineLengthRule;

impl LineLengthRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LineLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for LineLengthRule {
    fn name(&self) -> &'static str {
        "line-length"
    }

    fn check(&self, line: &str, line_no: usize, _language: Option<Language>) -> Option<Issue> {
        // Character count, not bytes
        (line.chars().count() > MAX_LINE_LENGTH).then(|| {
            Issue::at_line(
                Severity::Low,
                "Line too long (over 120 characters)",
                line_no,
                line,
            )
        })
    }
}
