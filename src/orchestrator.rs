//! Upgrade orchestrator for coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: check npm → fetch report → parse → plan → confirm → upgrade
//! - Rendering of listings, notices and the final summary
//! - Dry-run mode support

use crate::cli::CliArgs;
use crate::config::Config;
use crate::domain::RunSummary;
use crate::error::{AppError, IoError};
use crate::executor::UpgradeExecutor;
use crate::output::{Notice, TextFormatter};
use crate::package_manager::{PackageManagerRunner, SystemPackageManager};
use crate::progress::Progress;
use crate::prompt::{Confirm, LinePrompt};
use crate::update::{parse_report, ExclusionSet, UpdatePlan, UpdatePlanner};
use std::io::{self, IsTerminal, Write};

/// Orchestrator wired to the real npm and the terminal
pub type SystemOrchestrator =
    Orchestrator<SystemPackageManager, LinePrompt<io::StdinLock<'static>, io::Stdout>>;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The report listed no outdated packages
    UpToDate,
    /// Nothing was eligible for upgrade (all major, excluded or invalid)
    NothingToUpdate,
    /// Dry-run stopped before the confirmation gate
    DryRun,
    /// The user declined the confirmation prompt
    Cancelled,
    /// The approved batch was executed
    Completed(RunSummary),
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// The partitioned report
    pub plan: UpdatePlan,
    /// How the run ended
    pub outcome: RunOutcome,
}

impl OrchestratorResult {
    /// Upgrade outcomes, empty unless the batch ran
    pub fn summary(&self) -> Option<&RunSummary> {
        match &self.outcome {
            RunOutcome::Completed(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Orchestrator for coordinating the upgrade workflow
pub struct Orchestrator<R: PackageManagerRunner, C: Confirm> {
    /// Resolver and installer
    runner: R,
    /// Confirmation input
    prompt: C,
    /// Packages never upgraded automatically
    exclusions: ExclusionSet,
    /// Output renderer
    formatter: TextFormatter,
    /// Progress display
    progress: Progress,
    /// Stop before the confirmation gate
    dry_run: bool,
}

impl SystemOrchestrator {
    /// Build an orchestrator from CLI arguments and the project's configuration
    pub fn from_args(args: &CliArgs) -> Result<Self, AppError> {
        if !args.path.is_dir() {
            return Err(IoError::directory_not_found(&args.path).into());
        }

        let config = Config::from_dir(&args.path)?.with_exclude_file(args.exclude_file.clone());
        let exclude_path = config.exclude_path(&args.path);
        let mut exclusions = ExclusionSet::load(&exclude_path)?;
        exclusions.extend(config.exclude.iter().cloned());

        if args.verbose {
            eprintln!(
                "Loaded {} exclusion(s) (file: {})",
                exclusions.len(),
                exclude_path.display()
            );
            if !exclusions.is_empty() {
                eprintln!("Excluding: {}", exclusions.names().join(", "));
            }
        }

        let runner = SystemPackageManager::new(&config.npm, &args.path).with_verbose(args.verbose);
        let formatter = TextFormatter::new(io::stdout().is_terminal()).with_verbose(args.verbose);

        Ok(Orchestrator::new(runner, LinePrompt::stdio(), exclusions)
            .with_formatter(formatter)
            .with_progress(Progress::for_terminal(args.verbose))
            .with_dry_run(args.dry_run))
    }
}

impl<R: PackageManagerRunner, C: Confirm> Orchestrator<R, C> {
    /// Create an orchestrator with plain output and no progress display
    pub fn new(runner: R, prompt: C, exclusions: ExclusionSet) -> Self {
        Self {
            runner,
            prompt,
            exclusions,
            formatter: TextFormatter::new(false),
            progress: Progress::disabled(),
            dry_run: false,
        }
    }

    /// Set the output formatter
    pub fn with_formatter(mut self, formatter: TextFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the progress display
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Enable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The runner (used by tests to inspect recorded calls)
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the workflow, writing human output to `writer`
    ///
    /// Prerequisite, report and terminal errors abort the run. Per-package
    /// upgrade failures never do; they end up in the summary.
    pub fn run(&mut self, writer: &mut dyn Write) -> Result<OrchestratorResult, AppError> {
        // Step 1: Make sure the package manager can be invoked
        self.runner.check_available()?;

        // Step 2: Fetch and parse the outdated report
        self.progress.spinner("Checking for outdated packages...");
        let raw = self.runner.outdated_report();
        self.progress.finish_and_clear();
        let records = parse_report(&raw?)?;

        if records.is_empty() {
            self.formatter.format_notice(Notice::UpToDate, writer)?;
            return Ok(OrchestratorResult {
                plan: UpdatePlan::default(),
                outcome: RunOutcome::UpToDate,
            });
        }

        // Step 3: Partition and display
        let plan = UpdatePlanner::new(&self.exclusions).partition(&records);
        self.formatter.format_majors(&plan.majors, writer)?;
        self.formatter
            .format_minor_patch(&plan.approved, &plan.skipped, writer)?;
        self.formatter.format_warnings(&plan.invalid, writer)?;

        if plan.approved.is_empty() {
            let notice = if plan.skipped.is_empty() {
                Notice::NoMinorPatchUpdates
            } else {
                Notice::NothingAfterExclusions
            };
            self.formatter.format_notice(notice, writer)?;
            return Ok(OrchestratorResult {
                plan,
                outcome: RunOutcome::NothingToUpdate,
            });
        }

        if self.dry_run {
            self.formatter.format_notice(Notice::DryRun, writer)?;
            return Ok(OrchestratorResult {
                plan,
                outcome: RunOutcome::DryRun,
            });
        }

        // Step 4: Confirmation gate
        writer.flush()?;
        let question = format!(
            "Upgrade {} package{} to the latest minor/patch version?",
            plan.approved.len(),
            if plan.approved.len() == 1 { "" } else { "s" }
        );
        if !self.prompt.confirm(&question)? {
            self.formatter.format_notice(Notice::Cancelled, writer)?;
            return Ok(OrchestratorResult {
                plan,
                outcome: RunOutcome::Cancelled,
            });
        }

        // Step 5: Upgrade sequentially and summarize
        let outcomes = UpgradeExecutor::new(&self.runner)
            .run_with_progress(&plan.approved, &mut self.progress);
        let summary = RunSummary::from(outcomes);
        self.formatter.format_summary(&summary, writer)?;

        Ok(OrchestratorResult {
            plan,
            outcome: RunOutcome::Completed(summary),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UpgradeStatus;
    use crate::error::ReportError;
    use crate::package_manager::InstallResult;
    use std::cell::RefCell;
    use tempfile::TempDir;

    const SAMPLE_REPORT: &str = r#"{
        "eslint": {"current": "7.32.0", "wanted": "7.32.0", "latest": "8.5.0"},
        "lodash": {"current": "4.17.20", "wanted": "4.17.21", "latest": "4.17.21"}
    }"#;

    struct FakeRunner {
        available: bool,
        report: String,
        normal_ok: bool,
        forced_ok: bool,
        installs: RefCell<Vec<(String, bool)>>,
    }

    impl FakeRunner {
        fn new(report: &str) -> Self {
            Self {
                available: true,
                report: report.to_string(),
                normal_ok: true,
                forced_ok: true,
                installs: RefCell::new(Vec::new()),
            }
        }

        fn failing_normal(mut self) -> Self {
            self.normal_ok = false;
            self
        }

        fn installs(&self) -> Vec<(String, bool)> {
            self.installs.borrow().clone()
        }
    }

    impl PackageManagerRunner for FakeRunner {
        fn check_available(&self) -> Result<(), AppError> {
            if self.available {
                Ok(())
            } else {
                Err(AppError::prerequisite_missing("npm", "not found"))
            }
        }

        fn outdated_report(&self) -> Result<String, AppError> {
            Ok(self.report.clone())
        }

        fn install(&self, name: &str, version: &str, forced: bool) -> InstallResult {
            self.installs.borrow_mut().push((name.to_string(), forced));
            let ok = if forced { self.forced_ok } else { self.normal_ok };
            let command = format!("npm install {}@{}", name, version);
            if ok {
                InstallResult::success(command, String::new(), String::new())
            } else {
                InstallResult::failure(command, String::new(), "npm ERR!".to_string())
            }
        }
    }

    struct FixedAnswer {
        answer: bool,
        asked: usize,
    }

    impl FixedAnswer {
        fn new(answer: bool) -> Self {
            Self { answer, asked: 0 }
        }
    }

    impl Confirm for FixedAnswer {
        fn confirm(&mut self, _question: &str) -> io::Result<bool> {
            self.asked += 1;
            Ok(self.answer)
        }
    }

    fn run(
        runner: FakeRunner,
        answer: bool,
        exclusions: ExclusionSet,
    ) -> (Result<OrchestratorResult, AppError>, String, Orchestrator<FakeRunner, FixedAnswer>) {
        let mut orchestrator = Orchestrator::new(runner, FixedAnswer::new(answer), exclusions);
        let mut out = Vec::new();
        let result = orchestrator.run(&mut out);
        (result, String::from_utf8(out).unwrap(), orchestrator)
    }

    #[test]
    fn test_confirmed_run_upgrades_approved_only() {
        let (result, output, orchestrator) =
            run(FakeRunner::new(SAMPLE_REPORT), true, ExclusionSet::new());
        let result = result.unwrap();

        assert_eq!(result.plan.majors.len(), 1);
        assert_eq!(result.plan.approved.len(), 1);
        assert_eq!(orchestrator.runner().installs(), vec![("lodash".to_string(), false)]);

        let summary = result.summary().unwrap();
        assert_eq!(summary.outcomes[0].status, UpgradeStatus::Succeeded);
        assert!(output.contains("Major updates (1)"));
        assert!(output.contains("1 updated, 0 forced, 0 failed"));
    }

    #[test]
    fn test_forced_retry_reflected_in_summary() {
        let (result, output, orchestrator) = run(
            FakeRunner::new(SAMPLE_REPORT).failing_normal(),
            true,
            ExclusionSet::new(),
        );
        let summary = result.unwrap().summary().cloned().unwrap();

        assert_eq!(summary.outcomes[0].status, UpgradeStatus::SucceededForced);
        assert_eq!(
            orchestrator.runner().installs(),
            vec![("lodash".to_string(), false), ("lodash".to_string(), true)]
        );
        assert!(output.contains("updated (forced)"));
    }

    #[test]
    fn test_declined_run_installs_nothing() {
        let (result, output, orchestrator) =
            run(FakeRunner::new(SAMPLE_REPORT), false, ExclusionSet::new());

        assert_eq!(result.unwrap().outcome, RunOutcome::Cancelled);
        assert!(orchestrator.runner().installs().is_empty());
        assert_eq!(orchestrator.prompt.asked, 1);
        assert!(output.contains("Update cancelled by user."));
    }

    #[test]
    fn test_all_excluded_skips_prompt() {
        let (result, output, orchestrator) = run(
            FakeRunner::new(SAMPLE_REPORT),
            true,
            ExclusionSet::from_names(["lodash"]),
        );
        let result = result.unwrap();

        assert_eq!(result.outcome, RunOutcome::NothingToUpdate);
        assert_eq!(result.plan.skipped.len(), 1);
        assert_eq!(orchestrator.prompt.asked, 0);
        assert!(orchestrator.runner().installs().is_empty());
        assert!(output.contains("(excluded)"));
        assert!(output.contains("Nothing left to update after exclusions."));
    }

    #[test]
    fn test_only_majors() {
        let report = r#"{"eslint": {"current": "7.32.0", "latest": "8.5.0"}}"#;
        let (result, output, orchestrator) =
            run(FakeRunner::new(report), true, ExclusionSet::new());

        assert_eq!(result.unwrap().outcome, RunOutcome::NothingToUpdate);
        assert_eq!(orchestrator.prompt.asked, 0);
        assert!(output.contains("No minor or patch updates to apply."));
    }

    #[test]
    fn test_no_majors_message() {
        let report = r#"{"lodash": {"current": "4.17.20", "latest": "4.17.21"}}"#;
        let (_, output, _) = run(FakeRunner::new(report), false, ExclusionSet::new());
        assert!(output.contains("No major updates."));
    }

    #[test]
    fn test_empty_report_is_up_to_date() {
        for report in ["", "null", "{}"] {
            let (result, output, orchestrator) =
                run(FakeRunner::new(report), true, ExclusionSet::new());
            let result = result.unwrap();

            assert_eq!(result.outcome, RunOutcome::UpToDate);
            assert_eq!(result.plan.total(), 0);
            assert_eq!(orchestrator.prompt.asked, 0);
            assert_eq!(output, "All dependencies are up to date.\n");
        }
    }

    #[test]
    fn test_malformed_report_aborts() {
        let report = r#"{"lodash": {"latest": "4.17.21"}}"#;
        let (result, output, orchestrator) =
            run(FakeRunner::new(report), true, ExclusionSet::new());

        assert!(matches!(
            result,
            Err(AppError::Report(ReportError::MalformedEntry { .. }))
        ));
        assert!(output.is_empty());
        assert!(orchestrator.runner().installs().is_empty());
    }

    #[test]
    fn test_missing_prerequisite_aborts() {
        let mut runner = FakeRunner::new(SAMPLE_REPORT);
        runner.available = false;
        let (result, output, _) = run(runner, true, ExclusionSet::new());

        assert!(matches!(result, Err(AppError::PrerequisiteMissing { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_dry_run_stops_before_prompt() {
        let mut orchestrator = Orchestrator::new(
            FakeRunner::new(SAMPLE_REPORT),
            FixedAnswer::new(true),
            ExclusionSet::new(),
        )
        .with_dry_run(true);
        let mut out = Vec::new();
        let result = orchestrator.run(&mut out).unwrap();

        assert_eq!(result.outcome, RunOutcome::DryRun);
        assert_eq!(orchestrator.prompt.asked, 0);
        assert!(orchestrator.runner().installs().is_empty());
        assert!(String::from_utf8(out).unwrap().contains("Dry run"));
    }

    #[test]
    fn test_invalid_versions_reported_as_warnings() {
        let report = r#"{"local-lib": {"current": "linked", "latest": "1.0.0"}}"#;
        let (result, output, _) = run(FakeRunner::new(report), true, ExclusionSet::new());

        let result = result.unwrap();
        assert_eq!(result.plan.invalid.len(), 1);
        assert_eq!(result.outcome, RunOutcome::NothingToUpdate);
        assert!(output.contains("Warnings:"));
        assert!(output.contains("local-lib"));
    }

    #[test]
    fn test_from_args_missing_directory() {
        let args = CliArgs {
            path: "/nonexistent/minup/project".into(),
            dry_run: false,
            verbose: false,
            exclude_file: None,
        };
        assert!(matches!(
            SystemOrchestrator::from_args(&args),
            Err(AppError::Io(IoError::DirectoryNotFound { .. }))
        ));
    }

    #[test]
    fn test_from_args_merges_exclusions() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".minupignore"), "lodash\n").unwrap();
        std::fs::write(dir.path().join("minup.toml"), "exclude = [\"react\"]\n").unwrap();

        let args = CliArgs {
            path: dir.path().to_path_buf(),
            dry_run: true,
            verbose: false,
            exclude_file: None,
        };
        let orchestrator = SystemOrchestrator::from_args(&args).unwrap();
        assert_eq!(orchestrator.exclusions.names(), &["lodash", "react"]);
        assert!(orchestrator.dry_run);
    }

    #[test]
    fn test_from_args_malformed_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("minup.toml"), "npm = \n").unwrap();

        let args = CliArgs {
            path: dir.path().to_path_buf(),
            dry_run: false,
            verbose: false,
            exclude_file: None,
        };
        assert!(matches!(
            SystemOrchestrator::from_args(&args),
            Err(AppError::Config(_))
        ));
    }
}
