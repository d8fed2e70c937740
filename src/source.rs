//! File source: enumerates code files under a root and reads their text.

use crate::config::is_ignored;
use crate::detector::is_code_file;
use globset::GlobSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where the review engine gets files and their content from
pub trait FileSource: Send + Sync {
    /// Code files under `root` in a stable order; empty when `root` does not exist
    fn list_files(&self, root: &Path) -> Vec<PathBuf>;

    /// Full text of a file. Non-UTF-8 content is an error.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Filesystem-backed source
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    ignore_set: Option<GlobSet>,
}

impl FsSource {
    pub fn new() -> Self {
        Self { ignore_set: None }
    }

    /// Skip paths matching these globs during traversal
    pub fn with_ignore_set(mut self, ignore_set: GlobSet) -> Self {
        self.ignore_set = Some(ignore_set);
        self
    }
}

impl FileSource for FsSource {
    fn list_files(&self, root: &Path) -> Vec<PathBuf> {
        if !root.exists() {
            return Vec::new();
        }

        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_code_file(p))
            .filter(|p| {
                self.ignore_set
                    .as_ref()
                    .map(|set| !is_ignored(p, set))
                    .unwrap_or(true)
            })
            .collect();

        // Sort for consistent output
        files.sort();
        files
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        // The handle is dropped on every return path
        fs::read_to_string(path)
    }
}
