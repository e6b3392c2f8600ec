//! Package manager integration for reading the outdated report and installing upgrades
//!
//! This module provides:
//! - The `PackageManagerRunner` port used by the orchestrator and executor
//! - `SystemPackageManager`, which shells out to npm

use crate::error::{AppError, ReportError};
use std::path::PathBuf;
use std::process::{Command, Output};

/// Default package manager program
pub const DEFAULT_PROGRAM: &str = "npm";

/// Result of a single install invocation
#[derive(Debug, Clone)]
pub struct InstallResult {
    /// The command that was executed
    pub command: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl InstallResult {
    /// Create a successful install result
    pub fn success(command: String, stdout: String, stderr: String) -> Self {
        Self {
            command,
            success: true,
            stdout,
            stderr,
        }
    }

    /// Create a failed install result
    pub fn failure(command: String, stdout: String, stderr: String) -> Self {
        Self {
            command,
            success: false,
            stdout,
            stderr,
        }
    }
}

/// Trait for the external dependency resolver and installer
pub trait PackageManagerRunner {
    /// Verify the tool can be invoked at all
    fn check_available(&self) -> Result<(), AppError>;

    /// Fetch the raw outdated report
    fn outdated_report(&self) -> Result<String, AppError>;

    /// Install `name@version`, bypassing the installer's checks when `forced`
    fn install(&self, name: &str, version: &str, forced: bool) -> InstallResult;
}

/// Package manager runner that executes real npm commands
#[derive(Debug, Clone)]
pub struct SystemPackageManager {
    /// Program to invoke
    program: String,
    /// Project directory all commands run in
    working_dir: PathBuf,
    /// Echo commands to stderr before running them
    verbose: bool,
}

impl SystemPackageManager {
    /// Create a runner for `program` in `working_dir`
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
            verbose: false,
        }
    }

    /// Enable command echoing
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the argument list for an install invocation
    fn install_args(name: &str, version: &str, forced: bool) -> Vec<String> {
        let mut args = vec!["install".to_string(), format!("{}@{}", name, version)];
        if forced {
            args.push("--force".to_string());
        }
        args
    }

    fn command_string(&self, args: &[String]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(args.iter().cloned());
        parts.join(" ")
    }

    /// Run a command and capture output
    fn run_command(&self, args: &[String]) -> std::io::Result<Output> {
        if self.verbose {
            eprintln!("$ {}", self.command_string(args));
        }

        Command::new(&self.program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
    }
}

impl PackageManagerRunner for SystemPackageManager {
    fn check_available(&self) -> Result<(), AppError> {
        let output = self
            .run_command(&["--version".to_string()])
            .map_err(|e| AppError::prerequisite_missing(&self.program, e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AppError::prerequisite_missing(
                &self.program,
                format!(
                    "`{} --version` exited with {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            ))
        }
    }

    fn outdated_report(&self) -> Result<String, AppError> {
        let args = vec!["outdated".to_string(), "--json".to_string()];
        let output = self
            .run_command(&args)
            .map_err(|e| AppError::prerequisite_missing(&self.program, e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        // npm exits 1 whenever something is outdated, so only an empty report
        // from a failing run counts as an error.
        if stdout.trim().is_empty() && !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = self.command_string(&args);
            return Err(ReportError::unavailable(command, stderr.trim()).into());
        }

        Ok(stdout)
    }

    fn install(&self, name: &str, version: &str, forced: bool) -> InstallResult {
        let args = Self::install_args(name, version, forced);
        let command_str = self.command_string(&args);

        match self.run_command(&args) {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();

                if output.status.success() {
                    InstallResult::success(command_str, stdout, stderr)
                } else {
                    InstallResult::failure(command_str, stdout, stderr)
                }
            }
            Err(e) => InstallResult::failure(
                command_str,
                String::new(),
                format!("Failed to execute command: {}", e),
            ),
        }
    }
}
