//! Score calculation for code quality

use crate::detector::STRUCTURED_LOGGING_MARKER;
use crate::{Issue, Language};

/// Score deducted per reported issue
pub const PENALTY_PER_ISSUE: f64 = 0.1;
/// Cap on the total issue penalty, so issue count alone never drops a file below 0.5
pub const MAX_ISSUE_PENALTY: f64 = 0.5;
/// Bonus per good practice found in the file
pub const PRACTICE_BONUS: f64 = 0.1;

/// Calculator for code quality scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Score a file in [0.0, 1.0].
    ///
    /// Starts at 1.0, subtracts `min(0.1 * issues, 0.5)`, adds 0.1 for structured
    /// logging usage and 0.1 for a result-type marker in a language that has one,
    /// then clamps. Files without lines score 1.0 outright.
    pub fn score(content: &str, language: Option<Language>, issues: &[Issue]) -> f64 {
        if Self::has_no_lines(content) {
            return 1.0;
        }

        let mut score = 1.0;
        score -= Self::issue_penalty(issues.len());

        if content.contains(STRUCTURED_LOGGING_MARKER) {
            score += PRACTICE_BONUS;
        }
        let uses_result_type = language
            .and_then(Language::result_type_marker)
            .is_some_and(|marker| content.contains(marker));
        if uses_result_type {
            score += PRACTICE_BONUS;
        }

        score.clamp(0.0, 1.0)
    }

    /// Penalty for a number of issues, capped at [`MAX_ISSUE_PENALTY`]
    pub fn issue_penalty(issue_count: usize) -> f64 {
        (issue_count as f64 * PENALTY_PER_ISSUE).min(MAX_ISSUE_PENALTY)
    }

    /// Empty content or a single empty line
    fn has_no_lines(content: &str) -> bool {
        let mut lines = content.lines();
        match (lines.next(), lines.next()) {
            (None, _) => true,
            (Some(first), None) => first.is_empty(),
            _ => false,
        }
    }

    /// Short label for a score, used in console output
    pub fn rating(score: f64) -> &'static str {
        if score >= 0.9 {
            "Excellent"
        } else if score >= 0.7 {
            "Good"
        } else if score >= 0.5 {
            "Fair"
        } else {
            "Poor"
        }
    }
}
