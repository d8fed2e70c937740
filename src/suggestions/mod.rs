//! Suggestions module: whole-file improvement suggestions and patch output

pub mod patch;

pub use patch::{patch_file_name, render_patch, PatchWriter};

use crate::{Impact, Language, Suggestion};
use std::path::Path;

/// A whole-file pattern check that yields at most one suggestion
struct PatternRule {
    /// Returns the language's marker for this pattern, if the language has one
    marker: fn(Language) -> Option<&'static str>,
    title: &'static str,
    description: &'static str,
    code: &'static str,
    impact: Impact,
}

impl PatternRule {
    fn matches(&self, content: &str, language: Option<Language>) -> bool {
        language
            .and_then(self.marker)
            .is_some_and(|m| content.contains(m))
    }

    fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            title: self.title.to_string(),
            description: self.description.to_string(),
            code: self.code.to_string(),
            impact: self.impact,
        }
    }
}

/// Evaluation order is fixed
const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        marker: Language::console_print_marker,
        title: "Use structured logging",
        description: "Consider using a logging framework instead of println!",
        code: "use tracing::{info, warn, error};",
        impact: Impact::Medium,
    },
    PatternRule {
        marker: Language::unwrap_marker,
        title: "Handle errors properly",
        description: "Consider using proper error handling instead of unwrap()",
        code: "// Use .map_err() or ? operator instead",
        impact: Impact::High,
    },
    PatternRule {
        marker: Language::function_definition_marker,
        title: "Add type hints",
        description: "Consider adding type annotations for better code clarity",
        code: "from typing import List, Dict, Optional",
        impact: Impact::Medium,
    },
];

/// Produces improvement suggestions for a whole file
pub struct SuggestionEngine;

impl SuggestionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Suggest improvements for file content; one suggestion per matched pattern
    pub fn suggest(&self, content: &str, file_path: &Path) -> Vec<Suggestion> {
        self.suggest_for_language(content, Language::from_path(file_path))
    }

    /// Suggest with an already resolved language
    pub fn suggest_for_language(
        &self,
        content: &str,
        language: Option<Language>,
    ) -> Vec<Suggestion> {
        PATTERN_RULES
            .iter()
            .filter(|rule| rule.matches(content, language))
            .map(PatternRule::to_suggestion)
            .collect()
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
