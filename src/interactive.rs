//! Interactive menu loop

use crate::analyzer::{ReviewAssembler, ReviewSummary};
use crate::reporter::{ConsoleReporter, JsonReporter};
use crate::source::FileSource;
use crate::suggestions::PatchWriter;
use crate::vcs;
use crate::Review;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Review,
    Patches,
    Commit,
    Exit,
}

impl MenuChoice {
    /// Parse a trimmed menu entry; `None` for anything else
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Review),
            "2" => Some(MenuChoice::Patches),
            "3" => Some(MenuChoice::Commit),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Everything the menu actions need
pub struct Session<S: FileSource> {
    pub assembler: ReviewAssembler<S>,
    /// Tree to review
    pub root: PathBuf,
    /// Report file for option 1
    pub output: PathBuf,
    /// Patch directory for option 2
    pub patch_dir: PathBuf,
    /// Directory git runs in for option 3
    pub work_dir: PathBuf,
    pub parallel: bool,
}

impl<S: FileSource> Session<S> {
    fn review(&self) -> Vec<Review> {
        if self.parallel {
            self.assembler.review_tree_parallel(&self.root)
        } else {
            self.assembler.review_tree(&self.root)
        }
    }
}

/// Run the menu until the user picks Exit or input ends.
/// Action failures are reported and the loop continues; only a failing
/// `out` writer ends the session with an error.
pub fn run_interactive<S, R, W>(session: &Session<S>, input: R, out: &mut W) -> Result<()>
where
    S: FileSource,
    R: BufRead,
    W: Write,
{
    let reporter = ConsoleReporter::new();
    let mut lines = input.lines();

    loop {
        print_menu(out)?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read menu input")?,
            None => {
                writeln!(out)?;
                return Ok(());
            }
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(out, "Invalid option")?;
            continue;
        };
        debug!(?choice, "menu selection");

        match choice {
            MenuChoice::Review => {
                let reviews = session.review();
                match JsonReporter::new()
                    .pretty()
                    .write_to(&session.output, &reviews)
                {
                    Ok(()) => {
                        writeln!(
                            out,
                            "Review results saved to: {}",
                            session.output.display()
                        )?;
                        reporter.write_summary(out, &ReviewSummary::from_reviews(&reviews))?;
                        writeln!(out, "Code review completed!")?;
                    }
                    Err(e) => writeln!(out, "Error: {:#}", e)?,
                }
            }
            MenuChoice::Patches => {
                let reviews = session.review();
                match PatchWriter::new(session.patch_dir.clone()).write_all(&reviews) {
                    Ok(written) => {
                        for path in &written {
                            writeln!(out, "Generated patch: {}", path.display())?;
                        }
                        writeln!(out, "Patches generated!")?;
                    }
                    Err(e) => writeln!(out, "Error: {:#}", e)?,
                }
            }
            MenuChoice::Commit => {
                let outcome = vcs::commit_changes(&session.work_dir);
                writeln!(out, "{}", outcome)?;
            }
            MenuChoice::Exit => return Ok(()),
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "DevAgent Interactive Mode")?;
    writeln!(out, "1. Review codebase")?;
    writeln!(out, "2. Generate patches")?;
    writeln!(out, "3. Commit changes")?;
    writeln!(out, "4. Exit")?;
    write!(out, "Choose an option: ")?;
    out.flush()?;
    Ok(())
}
