//! DevAgent: rule-based code review for source trees
//!
//! This library scans source files line by line, reports issues and
//! improvement suggestions, and reduces them to a normalized quality score.

pub mod analyzer;
pub mod config;
pub mod detector;
pub mod error;
pub mod interactive;
pub mod reporter;
pub mod source;
pub mod suggestions;
pub mod vcs;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use detector::Language;
pub use error::ReviewError;

/// Severity of a detected issue, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

/// Expected payoff of applying a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Impact::Low => write!(f, "Low"),
            Impact::Medium => write!(f, "Medium"),
            Impact::High => write!(f, "High"),
        }
    }
}

/// A problem found in a file.
///
/// `line` and `code` are either both set (line-level issue) or both `None`
/// (file-level issue such as an unreadable file). Use [`Issue::at_line`] and
/// [`Issue::file_level`] to keep them paired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity of the issue
    pub severity: Severity,
    /// Human-readable message naming the rule that fired
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Offending line, trimmed
    pub code: Option<String>,
}

impl Issue {
    /// Issue anchored to a line; `raw_line` is stored trimmed
    pub fn at_line(
        severity: Severity,
        message: impl Into<String>,
        line: usize,
        raw_line: &str,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            line: Some(line),
            code: Some(raw_line.trim().to_string()),
        }
    }

    /// Issue that applies to the whole file
    pub fn file_level(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            line: None,
            code: None,
        }
    }
}

/// A proposed improvement, independent of any single issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Short label
    pub title: String,
    /// Rationale
    pub description: String,
    /// Illustrative snippet (may be empty)
    pub code: String,
    pub impact: Impact,
}

/// Outcome of reviewing one file. Built once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Path of the reviewed file, as it was provided
    pub file_path: String,
    /// Issues in detection order (top to bottom, then rule order)
    pub issues: Vec<Issue>,
    /// Suggestions in rule evaluation order
    pub suggestions: Vec<Suggestion>,
    /// Quality score in [0.0, 1.0]
    pub score: f64,
    /// UTC instant the review was created
    pub timestamp: DateTime<Utc>,
}

impl Review {
    /// True when this review stands in for a file that could not be read
    pub fn is_degraded(&self) -> bool {
        self.issues.len() == 1
            && self.issues[0].severity == Severity::Critical
            && self.issues[0].line.is_none()
            && self.suggestions.is_empty()
    }

    /// Highest severity among the issues, if any
    pub fn max_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }
}

/// Review a single file from disk. Never fails: an unreadable file yields a
/// degraded review.
pub fn review_file(path: &std::path::Path) -> Review {
    analyzer::ReviewAssembler::new().review_file(path)
}
