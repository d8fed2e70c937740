//! Review engine - orchestrates rules, suggestions and scoring per file

use crate::source::{FileSource, FsSource};
use crate::suggestions::SuggestionEngine;
use crate::{Issue, Language, Review, ReviewError, Severity};
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info, warn};

use super::rules::RuleEngine;
use super::ScoreCalculator;

/// Builds one [`Review`] per file. Read failures degrade that file's review
/// instead of failing the batch.
pub struct ReviewAssembler<S: FileSource = FsSource> {
    source: S,
    rules: RuleEngine,
    suggestions: SuggestionEngine,
}

impl ReviewAssembler<FsSource> {
    /// Create an assembler reading from the filesystem
    pub fn new() -> Self {
        Self::with_source(FsSource::new())
    }
}

impl Default for ReviewAssembler<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FileSource> ReviewAssembler<S> {
    /// Create an assembler over a custom file source
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            rules: RuleEngine::new(),
            suggestions: SuggestionEngine::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Review one file. Never fails: an unreadable file yields a degraded review.
    pub fn review_file(&self, path: &Path) -> Review {
        debug!(file = %path.display(), "reviewing");
        match self
            .source
            .read_to_string(path)
            .map_err(|e| ReviewError::read(path, e))
        {
            Ok(content) => self.review_content(path, &content),
            Err(e) => {
                warn!(file = %e.path().display(), error = %e, "failed to review file");
                Self::degraded(path, &e)
            }
        }
    }

    /// Review already loaded content. `path` supplies the language and the reported file path.
    pub fn review_content(&self, path: &Path, content: &str) -> Review {
        let language = Language::from_path(path);
        let issues = self.rules.detect_for_language(content, language);
        let suggestions = self.suggestions.suggest_for_language(content, language);
        let score = ScoreCalculator::score(content, language, &issues);

        Review {
            file_path: path.display().to_string(),
            issues,
            suggestions,
            score,
            timestamp: Utc::now(),
        }
    }

    /// Review every code file under `root` sequentially, in traversal order.
    /// A missing root yields no reviews.
    pub fn review_tree(&self, root: &Path) -> Vec<Review> {
        if !root.exists() {
            warn!(root = %root.display(), "path does not exist");
            return Vec::new();
        }

        let files = self.source.list_files(root);
        let reviews: Vec<Review> = files.iter().map(|p| self.review_file(p)).collect();
        info!(files = reviews.len(), root = %root.display(), "completed codebase review");
        reviews
    }

    /// Like [`review_tree`](Self::review_tree) but reviews files on the rayon pool.
    /// Results keep traversal order.
    pub fn review_tree_parallel(&self, root: &Path) -> Vec<Review> {
        use rayon::prelude::*;

        if !root.exists() {
            warn!(root = %root.display(), "path does not exist");
            return Vec::new();
        }

        let files = self.source.list_files(root);
        let reviews: Vec<Review> = files.par_iter().map(|p| self.review_file(p)).collect();
        info!(files = reviews.len(), root = %root.display(), "completed codebase review");
        reviews
    }

    fn degraded(path: &Path, error: &ReviewError) -> Review {
        Review {
            file_path: path.display().to_string(),
            issues: vec![Issue::file_level(Severity::Critical, error.to_string())],
            suggestions: Vec::new(),
            score: 0.0,
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate statistics over a batch of reviews
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSummary {
    /// Number of files reviewed, degraded ones included
    pub files_reviewed: usize,
    /// Total number of issues across all files
    pub total_issues: usize,
    /// Total number of suggestions across all files
    pub total_suggestions: usize,
    /// Mean score; 0.0 for an empty batch
    pub average_score: f64,
    /// Reviews that stand in for unreadable files
    pub degraded_files: usize,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }

        let total_score: f64 = reviews.iter().map(|r| r.score).sum();

        Self {
            files_reviewed: reviews.len(),
            total_issues: reviews.iter().map(|r| r.issues.len()).sum(),
            total_suggestions: reviews.iter().map(|r| r.suggestions.len()).sum(),
            average_score: total_score / reviews.len() as f64,
            degraded_files: reviews.iter().filter(|r| r.is_degraded()).count(),
        }
    }
}
