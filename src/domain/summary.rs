//! Run summary types
//!
//! Aggregates per-package upgrade outcomes for the final report.

use super::{UpgradeOutcome, UpgradeStatus};

/// Summary of one upgrade batch, in execution order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// One outcome per approved package
    pub outcomes: Vec<UpgradeOutcome>,
}

impl RunSummary {
    /// Number of packages upgraded without forcing
    pub fn succeeded_count(&self) -> usize {
        self.count(UpgradeStatus::Succeeded)
    }

    /// Number of packages that needed a forced install
    pub fn forced_count(&self) -> usize {
        self.count(UpgradeStatus::SucceededForced)
    }

    /// Number of packages that could not be upgraded
    pub fn failed_count(&self) -> usize {
        self.count(UpgradeStatus::Failed)
    }

    /// Returns true if any package failed
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    /// Returns all failed outcomes
    pub fn failures(&self) -> impl Iterator<Item = &UpgradeOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == UpgradeStatus::Failed)
    }

    fn count(&self, status: UpgradeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

impl From<Vec<UpgradeOutcome>> for RunSummary {
    fn from(outcomes: Vec<UpgradeOutcome>) -> Self {
        Self { outcomes }
    }
}
