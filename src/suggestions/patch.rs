//! Patch output for suggestions that carry a code snippet.
//!
//! The output is a minimal diff-style block, not a real unified diff.

use crate::Review;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Filesystem-safe patch name for a (file, suggestion title) pair
pub fn patch_file_name(file_path: &str, title: &str) -> String {
    let safe_file = file_path.replace(['/', '\\'], "_");
    let safe_title = title.replace(' ', "_");
    format!("{}_{}.patch", safe_file, safe_title)
}

/// Diff-style text block carrying the suggested snippet
pub fn render_patch(file_path: &str, code: &str) -> String {
    format!(
        "--- {path}\n+++ {path}\n@@ -1,1 +1,1 @@\n{code}\n",
        path = file_path,
        code = code
    )
}

/// Writes one patch file per suggestion with a non-empty snippet
pub struct PatchWriter {
    out_dir: PathBuf,
}

impl PatchWriter {
    /// Create a writer that puts patches in `out_dir`
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write patches for all reviews; returns the written paths in review order
    pub fn write_all(&self, reviews: &[Review]) -> Result<Vec<PathBuf>> {
        if !self.out_dir.as_os_str().is_empty() && !self.out_dir.exists() {
            fs::create_dir_all(&self.out_dir).with_context(|| {
                format!("Failed to create patch directory {}", self.out_dir.display())
            })?;
        }

        let mut written = Vec::new();
        for review in reviews {
            for suggestion in review.suggestions.iter().filter(|s| !s.code.is_empty()) {
                let path = self
                    .out_dir
                    .join(patch_file_name(&review.file_path, &suggestion.title));
                fs::write(&path, render_patch(&review.file_path, &suggestion.code))
                    .with_context(|| format!("Failed to write patch {}", path.display()))?;
                debug!(patch = %path.display(), "wrote patch");
                written.push(path);
            }
        }

        info!(count = written.len(), "generated patches");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Impact, Suggestion};
    use chrono::Utc;
    use tempfile::TempDir;

    fn review_with(file_path: &str, suggestions: Vec<Suggestion>) -> Review {
        Review {
            file_path: file_path.to_string(),
            issues: vec![],
            suggestions,
            score: 1.0,
            timestamp: Utc::now(),
        }
    }

    fn suggestion(title: &str, code: &str) -> Suggestion {
        Suggestion {
            title: title.to_string(),
            description: "d".to_string(),
            code: code.to_string(),
            impact: Impact::Medium,
        }
    }

    #[test]
    fn test_patch_file_name_is_filesystem_safe() {
        assert_eq!(
            patch_file_name("src/app/main.rs", "Use structured logging"),
            "src_app_main.rs_Use_structured_logging.patch"
        );
        assert_eq!(
            patch_file_name(r"src\win\lib.rs", "Add type hints"),
            "src_win_lib.rs_Add_type_hints.patch"
        );
    }

    #[test]
    fn test_render_patch() {
        let patch = render_patch("src/main.rs", "use tracing::info;");
        assert_eq!(
            patch,
            "--- src/main.rs\n+++ src/main.rs\n@@ -1,1 +1,1 @@\nuse tracing::info;\n"
        );
    }

    #[test]
    fn test_write_all_skips_empty_snippets() {
        let dir = TempDir::new().unwrap();
        let reviews = vec![
            review_with(
                "src/main.rs",
                vec![suggestion("Use structured logging", "use tracing::info;"), suggestion("Empty", "")],
            ),
            review_with("src/util.py", vec![suggestion("Add type hints", "from typing import List")]),
        ];

        let written = PatchWriter::new(dir.path()).write_all(&reviews).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            written[0],
            dir.path().join("src_main.rs_Use_structured_logging.patch")
        );
        let content = fs::read_to_string(&written[1]).unwrap();
        assert!(content.starts_with("--- src/util.py\n+++ src/util.py\n"));
        assert!(content.contains("from typing import List"));
    }

    #[test]
    fn test_write_all_creates_out_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("patches/nested");
        let reviews = vec![review_with("a.rs", vec![suggestion("T", "x")])];
        let written = PatchWriter::new(&out).write_all(&reviews).unwrap();
        assert_eq!(written.len(), 1);
        assert!(out.join("a.rs_T.patch").exists());
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let reviews = vec![review_with("a.rs", vec![suggestion("T", "x")])];
        let result = PatchWriter::new(blocker.join("sub")).write_all(&reviews);
        assert!(result.is_err());
    }
}
