//! Upgrade executor
//!
//! Upgrades approved packages one at a time. Each package goes through
//! `normal install -> (on failure) forced install`, and a failure is isolated
//! to that package: the batch always runs to the end.

use crate::domain::{DependencyRecord, UpgradeOutcome, UpgradeStatus};
use crate::package_manager::{InstallResult, PackageManagerRunner};
use crate::progress::Progress;

/// Number of stderr lines kept as failure detail
const DETAIL_LINES: usize = 5;

/// Executes approved upgrades sequentially
pub struct UpgradeExecutor<'a, R: PackageManagerRunner> {
    runner: &'a R,
}

impl<'a, R: PackageManagerRunner> UpgradeExecutor<'a, R> {
    /// Create an executor backed by the given runner
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Upgrade every approved record, returning one outcome per record in order
    pub fn run(&self, approved: &[DependencyRecord]) -> Vec<UpgradeOutcome> {
        self.run_with_progress(approved, &mut Progress::disabled())
    }

    /// Upgrade every approved record with a progress bar
    pub fn run_with_progress(
        &self,
        approved: &[DependencyRecord],
        progress: &mut Progress,
    ) -> Vec<UpgradeOutcome> {
        progress.start(approved.len() as u64, "Upgrading");

        let outcomes: Vec<UpgradeOutcome> = approved
            .iter()
            .map(|record| {
                progress.set_message(&format!("Installing {}", record.install_spec()));
                let outcome = self.upgrade(record);
                progress.inc();
                outcome
            })
            .collect();

        progress.finish_and_clear();
        outcomes
    }

    /// Upgrade a single package, retrying once in forced mode
    pub fn upgrade(&self, record: &DependencyRecord) -> UpgradeOutcome {
        let normal = self.runner.install(&record.name, &record.latest, false);
        if normal.success {
            return UpgradeOutcome::new(&record.name, &record.latest, UpgradeStatus::Succeeded);
        }

        let forced = self.runner.install(&record.name, &record.latest, true);
        if forced.success {
            UpgradeOutcome::new(&record.name, &record.latest, UpgradeStatus::SucceededForced)
                .with_detail(failure_detail(&normal))
        } else {
            UpgradeOutcome::new(&record.name, &record.latest, UpgradeStatus::Failed)
                .with_detail(failure_detail(&forced))
        }
    }
}

/// Last few stderr lines of a failed invocation
fn failure_detail(result: &InstallResult) -> String {
    let lines: Vec<&str> = result
        .stderr
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();
    let start = lines.len().saturating_sub(DETAIL_LINES);
    lines[start..].join("\n")
}
