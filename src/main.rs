//! DevAgent: rule-based code review CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use devagent::analyzer::{ReviewAssembler, ReviewSummary};
use devagent::config::{build_ignore_set, default_config_json, load_config, CONFIG_FILENAME};
use devagent::interactive::{run_interactive, Session};
use devagent::reporter::{ConsoleReporter, JsonReporter};
use devagent::source::FsSource;
use devagent::suggestions::PatchWriter;
use devagent::vcs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// DevAgent: scan a source tree, report issues and suggest improvements
#[derive(Parser, Debug)]
#[command(name = "devagent")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to review
    #[arg(long, short, default_value = "./src")]
    path: PathBuf,

    /// Report file (default: code_review_results.json)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Verbose output (every issue and suggestion, info logs)
    #[arg(long, short)]
    verbose: bool,

    /// Quiet mode (one line per file)
    #[arg(long, short)]
    quiet: bool,

    /// Interactive menu instead of the batch pipeline
    #[arg(long, short)]
    interactive: bool,

    /// Print reviews and summary as JSON on stdout
    #[arg(long, short)]
    json: bool,

    /// Minimum average score, 0.0-1.0 (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Directory for generated patches (default: current directory)
    #[arg(long)]
    patch_dir: Option<PathBuf>,

    /// Skip patch generation
    #[arg(long)]
    no_patches: bool,

    /// Skip the git commit after review
    #[arg(long)]
    no_commit: bool,

    /// Review files in parallel
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Path to config file (default: search .devagentrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .devagentrc.json with sensible defaults
    Init {
        /// Minimum average score (e.g. 0.7)
        #[arg(long)]
        threshold: Option<f64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(Commands::Init { threshold, dir }) = &args.command {
        return run_init(*threshold, dir.as_deref());
    }

    if let Some(t) = args.threshold {
        if !(0.0..=1.0).contains(&t) {
            anyhow::bail!("--threshold must be between 0.0 and 1.0, got {}", t);
        }
    }

    let work_dir = std::env::current_dir().context("Failed to get current directory")?;

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(
        args.threshold,
        args.output.as_deref(),
        args.patch_dir.as_deref(),
        args.no_commit,
    );

    let source = if config.ignore.is_empty() {
        FsSource::new()
    } else {
        FsSource::new().with_ignore_set(build_ignore_set(&config.ignore)?)
    };
    let assembler = ReviewAssembler::with_source(source);

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }
    let parallel = args.parallel || args.jobs.is_some();

    if args.interactive {
        let session = Session {
            assembler,
            root: args.path.clone(),
            output: config.output_path(),
            patch_dir: config.patch_dir(),
            work_dir,
            parallel,
        };
        let stdin = io::stdin();
        run_interactive(&session, stdin.lock(), &mut io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    }

    if !args.quiet && !args.json {
        eprintln!("{}: Reviewing {}", "Info".blue(), args.path.display());
    }
    if !args.path.exists() {
        eprintln!(
            "{}: Path {} does not exist",
            "Warning".yellow(),
            args.path.display()
        );
    }

    let reviews = if parallel {
        assembler.review_tree_parallel(&args.path)
    } else {
        assembler.review_tree(&args.path)
    };
    let summary = ReviewSummary::from_reviews(&reviews);

    // Save report
    let output = config.output_path();
    JsonReporter::new().pretty().write_to(&output, &reviews)?;
    if !args.quiet && !args.json {
        eprintln!(
            "{}: Review results saved to {}",
            "Info".blue(),
            output.display()
        );
    }

    // Patches
    if !args.no_patches {
        let written = PatchWriter::new(config.patch_dir()).write_all(&reviews)?;
        if args.verbose && !args.json {
            for path in &written {
                eprintln!("{}: Generated patch {}", "Info".blue(), path.display());
            }
        }
    }

    // Commit only when something was reviewed
    if config.should_commit() && !reviews.is_empty() {
        let outcome = vcs::commit_changes(&work_dir);
        if !args.quiet && !args.json {
            let label = if outcome.is_committed() {
                "Done".green().bold()
            } else {
                "Warning".yellow()
            };
            eprintln!("{}: {}", label, outcome);
        }
    }

    print_results(&args, &reviews, &summary);

    // An empty batch has nothing to hold to the threshold
    if let Some(threshold) = config.threshold.filter(|_| !reviews.is_empty()) {
        if summary.average_score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Average score {:.2} is below threshold {:.2}",
                    "Failed".red().bold(),
                    summary.average_score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_results(args: &Args, reviews: &[devagent::Review], summary: &ReviewSummary) {
    if args.json {
        let reporter = JsonReporter::new().pretty();
        println!("{}", reporter.report_with_summary(reviews, summary));
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for review in reviews {
            reporter.report_quiet(review);
        }
    } else {
        let reporter = if args.verbose {
            ConsoleReporter::new().verbose()
        } else {
            ConsoleReporter::new()
        };
        reporter.report_many(reviews, summary);
    }
}

fn run_init(threshold: Option<f64>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(0.7);
    if !(0.0..=1.0).contains(&threshold_value) {
        anyhow::bail!(
            "--threshold must be between 0.0 and 1.0, got {}",
            threshold_value
        );
    }

    std::fs::write(&config_path, default_config_json(threshold_value))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );
    Ok(ExitCode::SUCCESS)
}
