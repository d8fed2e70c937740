//! Leftover TODO/FIXME markers.

use super::LineRule;
use crate::{Issue, Language, Severity};

const MARKERS: &[&str] = &["TODO", "FIXME"];

/// Rule for detecting TODO/FIXME markers
pub struct MarkerCommentRule;

impl MarkerCommentRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkerCommentRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRule for MarkerCommentRule {
    fn name(&self) -> &'static str {
        "marker-comment"
    }

    fn check(&self, line: &str, line_no: usize, _language: Option<Language>) -> Option<Issue> {
        MARKERS.iter().any(|m| line.contains(m)).then(|| {
            Issue::at_line(Severity::Medium, "TODO or FIXME comment found", line_no, line)
        })
    }
}
