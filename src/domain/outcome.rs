//! Upgrade outcome types

use std::fmt;

/// Terminal state of a single package upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeStatus {
    /// Normal install succeeded
    Succeeded,
    /// Normal install failed, forced install succeeded
    SucceededForced,
    /// Both the normal and the forced install failed
    Failed,
}

impl UpgradeStatus {
    /// Returns true if the package ended up upgraded
    pub fn is_success(&self) -> bool {
        !matches!(self, UpgradeStatus::Failed)
    }
}

impl fmt::Display for UpgradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeStatus::Succeeded => write!(f, "updated"),
            UpgradeStatus::SucceededForced => write!(f, "updated (forced)"),
            UpgradeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Result of upgrading one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeOutcome {
    /// Package name
    pub name: String,
    /// Version the upgrade targeted
    pub target: String,
    /// Final state
    pub status: UpgradeStatus,
    /// Error output of the last failed attempt, if any
    pub detail: Option<String>,
}

impl UpgradeOutcome {
    /// Creates a new outcome
    pub fn new(name: impl Into<String>, target: impl Into<String>, status: UpgradeStatus) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            status,
            detail: None,
        }
    }

    /// Attaches failure detail (builder pattern)
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if !detail.trim().is_empty() {
            self.detail = Some(detail);
        }
        self
    }
}

impl fmt::Display for UpgradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}: {}", self.name, self.target, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_success() {
        assert!(UpgradeStatus::Succeeded.is_success());
        assert!(UpgradeStatus::SucceededForced.is_success());
        assert!(!UpgradeStatus::Failed.is_success());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(UpgradeStatus::Succeeded.to_string(), "updated");
        assert_eq!(UpgradeStatus::SucceededForced.to_string(), "updated (forced)");
        assert_eq!(UpgradeStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_with_detail_ignores_blank() {
        let outcome =
            UpgradeOutcome::new("lodash", "4.17.21", UpgradeStatus::Failed).with_detail("  \n");
        assert!(outcome.detail.is_none());

        let outcome = UpgradeOutcome::new("lodash", "4.17.21", UpgradeStatus::Failed)
            .with_detail("ERESOLVE");
        assert_eq!(outcome.detail.as_deref(), Some("ERESOLVE"));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = UpgradeOutcome::new("lodash", "4.17.21", UpgradeStatus::SucceededForced);
        assert_eq!(outcome.to_string(), "lodash@4.17.21: updated (forced)");
    }
}
