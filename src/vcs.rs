//! Version control: stage and commit the working tree with git

use std::fmt;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// Message used for every automatic commit
pub const COMMIT_MESSAGE: &str = "Auto-generated code improvements from DevAgent";

/// What happened when committing. None of these is treated as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// `git add` and `git commit` both succeeded
    Committed,
    /// `git add .` exited non-zero (e.g. not a repository)
    AddFailed(String),
    /// `git commit` exited non-zero (usually nothing staged)
    NothingToCommit(String),
    /// git could not be started
    Unavailable(String),
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed)
    }
}

impl fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitOutcome::Committed => write!(f, "Changes committed successfully"),
            CommitOutcome::AddFailed(e) => write!(f, "git add failed: {}", e),
            CommitOutcome::NothingToCommit(e) => write!(f, "Nothing committed: {}", e),
            CommitOutcome::Unavailable(e) => write!(f, "git unavailable: {}", e),
        }
    }
}

/// Stage everything under `work_dir` and commit it.
pub fn commit_changes(work_dir: &Path) -> CommitOutcome {
    let outcome = run_commit(work_dir);
    match &outcome {
        CommitOutcome::Committed => info!(dir = %work_dir.display(), "committed changes"),
        other => warn!(dir = %work_dir.display(), outcome = %other, "commit skipped"),
    }
    outcome
}

fn run_commit(work_dir: &Path) -> CommitOutcome {
    let add = match git(work_dir, &["add", "."]) {
        Ok(output) => output,
        Err(e) => return CommitOutcome::Unavailable(e.to_string()),
    };
    if !add.status.success() {
        return CommitOutcome::AddFailed(stderr_of(&add));
    }

    match git(work_dir, &["commit", "-m", COMMIT_MESSAGE]) {
        Ok(output) if output.status.success() => CommitOutcome::Committed,
        Ok(output) => CommitOutcome::NothingToCommit(stderr_of(&output)),
        Err(e) => CommitOutcome::Unavailable(e.to_string()),
    }
}

fn git(work_dir: &Path, args: &[&str]) -> std::io::Result<std::process::Output> {
    Command::new("git").args(args).current_dir(work_dir).output()
}

fn stderr_of(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        // git commit reports "nothing to commit" on stdout
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    } else {
        stderr
    }
}
