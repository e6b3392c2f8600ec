//! CLI argument parsing module for minup

use clap::Parser;
use std::path::PathBuf;

/// Interactive minor/patch dependency upgrader
#[derive(Parser, Debug, Clone)]
#[command(
    name = "minup",
    version,
    about = "Upgrade non-breaking npm dependencies after confirmation"
)]
pub struct CliArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Show the upgrade plan without prompting or installing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Echo each npm command before running it
    #[arg(long)]
    pub verbose: bool,

    /// Exclusion file (default: .minupignore, or `exclude_file` in minup.toml)
    #[arg(long, value_name = "FILE")]
    pub exclude_file: Option<PathBuf>,
}
