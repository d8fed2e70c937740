//! Config schema and deserialization

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default report file name
pub const DEFAULT_OUTPUT: &str = "code_review_results.json";

/// Root config structure for .devagentrc.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Minimum average score (0.0-1.0); exit 1 if below
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Glob patterns for files/directories to exclude from review
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Report file (default: code_review_results.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Directory for generated patches (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_dir: Option<PathBuf>,

    /// Commit after a batch review (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<bool>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<f64>,
        cli_output: Option<&Path>,
        cli_patch_dir: Option<&Path>,
        cli_no_commit: bool,
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if let Some(output) = cli_output {
            self.output = Some(output.to_path_buf());
        }
        if let Some(dir) = cli_patch_dir {
            self.patch_dir = Some(dir.to_path_buf());
        }
        if cli_no_commit {
            self.commit = Some(false);
        }
        self
    }

    /// Report path, falling back to the default file name
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Patch directory, falling back to the current directory
    pub fn patch_dir(&self) -> PathBuf {
        self.patch_dir.clone().unwrap_or_default()
    }

    /// Whether to commit after a batch review
    pub fn should_commit(&self) -> bool {
        self.commit.unwrap_or(true)
    }
}
