//! JSON reporter for machine-readable output

use crate::analyzer::ReviewSummary;
use crate::Review;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter (compact output)
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report reviews as a JSON array, one record per file
    pub fn report(&self, reviews: &[Review]) -> String {
        if self.pretty {
            serde_json::to_string_pretty(reviews).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(reviews).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Report reviews with an aggregate summary
    pub fn report_with_summary(&self, reviews: &[Review], summary: &ReviewSummary) -> String {
        let output = JsonOutput {
            reviews,
            summary: JsonSummary {
                files_reviewed: summary.files_reviewed,
                total_issues: summary.total_issues,
                total_suggestions: summary.total_suggestions,
                average_score: summary.average_score,
            },
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Write the review array to a report file
    pub fn write_to(&self, path: &Path, reviews: &[Review]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory {}", parent.display())
            })?;
        }
        fs::write(path, self.report(reviews))
            .with_context(|| format!("Failed to write report to {}", path.display()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    reviews: &'a [Review],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    files_reviewed: usize,
    total_issues: usize,
    total_suggestions: usize,
    average_score: f64,
}
