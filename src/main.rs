//! minup - interactive minor/patch dependency upgrader
//!
//! Lists outdated npm dependencies, separates breaking (major) updates from
//! minor/patch ones, and after confirmation upgrades the non-excluded
//! minor/patch subset one package at a time.

use clap::Parser;
use minup::cli::CliArgs;
use minup::orchestrator::{RunOutcome, SystemOrchestrator};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("minup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let mut orchestrator = SystemOrchestrator::from_args(&args)?;
    let mut stdout = io::stdout();
    let result = orchestrator.run(&mut stdout)?;
    stdout.flush()?;

    if args.verbose {
        if let RunOutcome::Completed(summary) = &result.outcome {
            for failure in summary.failures() {
                eprintln!("  - {} could not be upgraded", failure);
            }
        }
    }

    // Per-package failures are reported in the summary, not via the exit code
    Ok(ExitCode::SUCCESS)
}
