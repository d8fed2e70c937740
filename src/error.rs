//! Structured error types for per-file review failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Error reading file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReviewError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// File the failure belongs to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } => path,
        }
    }
}
