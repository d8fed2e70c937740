//! Console reporter with colored output

use crate::analyzer::{ReviewSummary, ScoreCalculator};
use crate::{Impact, Issue, Review, Severity};
use colored::Colorize;
use std::io::{self, Write};

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output (every issue and suggestion)
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single review to stdout
    pub fn report(&self, review: &Review) {
        let _ = self.write_review(&mut io::stdout().lock(), review);
    }

    /// Report every review followed by the summary block
    pub fn report_many(&self, reviews: &[Review], summary: &ReviewSummary) {
        let mut out = io::stdout().lock();
        for review in reviews {
            let _ = self.write_review(&mut out, review);
        }
        let _ = self.write_summary(&mut out, summary);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, review: &Review) {
        println!(
            "{}: {:.2} ({})",
            review.file_path,
            review.score,
            self.colorize_rating(review.score)
        );
    }

    /// Print the summary block to stdout
    pub fn print_summary(&self, summary: &ReviewSummary) {
        let _ = self.write_summary(&mut io::stdout().lock(), summary);
    }

    /// Write one review: a header line, then issues and suggestions in verbose mode
    pub fn write_review<W: Write>(&self, out: &mut W, review: &Review) -> io::Result<()> {
        let counts = format!(
            "{} issues, {} suggestions",
            review.issues.len(),
            review.suggestions.len()
        );
        writeln!(
            out,
            "{} {} {}",
            self.paint_score(review.score),
            review.file_path.bold(),
            counts.dimmed()
        )?;

        if !self.verbose {
            return Ok(());
        }

        for issue in &review.issues {
            self.write_issue(out, issue)?;
        }
        for suggestion in &review.suggestions {
            writeln!(
                out,
                "   {} [{}] {}: {}",
                "→".cyan(),
                self.colorize_impact(suggestion.impact),
                suggestion.title,
                suggestion.description
            )?;
        }
        Ok(())
    }

    fn write_issue<W: Write>(&self, out: &mut W, issue: &Issue) -> io::Result<()> {
        let icon = match issue.severity {
            Severity::Critical => "✗".red().bold(),
            Severity::High => "✗".red(),
            Severity::Medium => "⚠".yellow(),
            Severity::Low => "ℹ".blue(),
        };

        let location = issue
            .line
            .map(|l| format!("L{}", l))
            .unwrap_or_else(|| "file".to_string());
        writeln!(
            out,
            "   {} {} [{}] {}",
            icon,
            location.dimmed(),
            issue.severity.to_string().dimmed(),
            issue.message
        )?;

        if let Some(ref code) = issue.code {
            writeln!(out, "       {} {}", "│".dimmed(), code.italic())?;
        }
        Ok(())
    }

    /// Write the "Review Summary" block
    pub fn write_summary<W: Write>(&self, out: &mut W, summary: &ReviewSummary) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "=== Review Summary ===".bold())?;
        writeln!(out, "Files reviewed: {}", summary.files_reviewed)?;
        writeln!(out, "Total issues found: {}", summary.total_issues)?;
        writeln!(out, "Total suggestions: {}", summary.total_suggestions)?;
        writeln!(
            out,
            "Average score: {} ({})",
            format!("{:.2}", summary.average_score).bold(),
            self.colorize_rating(summary.average_score)
        )?;
        if summary.degraded_files > 0 {
            writeln!(
                out,
                "{} {} file(s) could not be read",
                "⚠".yellow(),
                summary.degraded_files
            )?;
        }
        Ok(())
    }

    fn paint_score(&self, score: f64) -> String {
        let s = format!("[{:.2}]", score);
        if !self.use_colors {
            return s;
        }
        if score >= 0.9 {
            s.green().to_string()
        } else if score >= 0.7 {
            s.yellow().to_string()
        } else {
            s.red().to_string()
        }
    }

    fn colorize_rating(&self, score: f64) -> colored::ColoredString {
        let rating = ScoreCalculator::rating(score);
        if !self.use_colors {
            return rating.normal();
        }
        match rating {
            "Excellent" => rating.green().bold(),
            "Good" => rating.green(),
            "Fair" => rating.yellow(),
            _ => rating.red(),
        }
    }

    fn colorize_impact(&self, impact: Impact) -> colored::ColoredString {
        let s = impact.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match impact {
            Impact::High => s.red(),
            Impact::Medium => s.yellow(),
            Impact::Low => s.blue(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ReviewAssembler;
    use std::path::Path;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_block() {
        let summary = ReviewSummary {
            files_reviewed: 3,
            total_issues: 4,
            total_suggestions: 2,
            average_score: 2.0 / 3.0,
            degraded_files: 0,
        };
        let reporter = ConsoleReporter::new().without_colors();
        let text = render(|out| reporter.write_summary(out, &summary));

        assert!(text.contains("=== Review Summary ==="));
        assert!(text.contains("Files reviewed: 3"));
        assert!(text.contains("Total issues found: 4"));
        assert!(text.contains("Total suggestions: 2"));
        assert!(text.contains("Average score: 0.67"));
        assert!(!text.contains("could not be read"));
    }

    #[test]
    fn test_summary_mentions_degraded_files() {
        let summary = ReviewSummary {
            files_reviewed: 2,
            degraded_files: 1,
            ..ReviewSummary::default()
        };
        let reporter = ConsoleReporter::new().without_colors();
        let text = render(|out| reporter.write_summary(out, &summary));
        assert!(text.contains("1 file(s) could not be read"));
    }

    #[test]
    fn test_review_line_non_verbose() {
        let review = ReviewAssembler::new()
            .review_content(Path::new("src/lib.rs"), "// TODO\nfn a() { x.unwrap(); }\n");
        let reporter = ConsoleReporter::new().without_colors();
        let text = render(|out| reporter.write_review(out, &review));

        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("src/lib.rs"));
        assert!(text.contains("2 issues, 1 suggestions"));
        assert!(text.contains("[0.80]"));
    }

    #[test]
    fn test_review_verbose_lists_issues_and_suggestions() {
        let review = ReviewAssembler::new()
            .review_content(Path::new("src/lib.rs"), "// TODO\nfn a() { x.unwrap(); }\n");
        let reporter = ConsoleReporter::new().without_colors().verbose();
        let text = render(|out| reporter.write_review(out, &review));

        assert!(text.contains("L1"));
        assert!(text.contains("TODO or FIXME comment found"));
        assert!(text.contains("L2"));
        assert!(text.contains("Handle errors properly"));
        assert!(text.contains("fn a() { x.unwrap(); }"));
    }

    #[test]
    fn test_degraded_issue_rendered_as_file_level() {
        let review = Review {
            file_path: "bad.rs".to_string(),
            issues: vec![Issue::file_level(
                Severity::Critical,
                "Error reading file: boom",
            )],
            suggestions: vec![],
            score: 0.0,
            timestamp: chrono::Utc::now(),
        };
        let reporter = ConsoleReporter::new().without_colors().verbose();
        let text = render(|out| reporter.write_review(out, &review));
        assert!(text.contains("file"));
        assert!(text.contains("Error reading file: boom"));
    }
}
