//! Configuration loading for DevAgent

mod schema;

pub use schema::{Config, DEFAULT_OUTPUT};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".devagentrc.json";

/// Find and load the config file. Searches the work directory then its parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(threshold) = config.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!(
                "Invalid threshold {} in {}: must be between 0.0 and 1.0",
                threshold,
                config_path.display()
            );
        }
    }

    Ok(config)
}

/// Search for .devagentrc.json in directory and its parents
fn find_config_in_parents(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Build a GlobSet from ignore patterns for path matching
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a path should be ignored based on config glob patterns
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}

/// Default config written by `devagent init`
pub fn default_config_json(threshold: f64) -> String {
    format!(
        r#"{{
  "threshold": {},
  "ignore": [
    "**/target/**",
    "**/node_modules/**",
    "**/.git/**"
  ],
  "output": "{}",
  "commit": false
}}
"#,
        threshold, DEFAULT_OUTPUT
    )
}
