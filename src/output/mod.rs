//! Output formatting for the upgrade workflow
//!
//! This module provides:
//! - Listings of major and minor/patch updates
//! - Distinct terminal messages (up to date, cancelled, ...)
//! - The per-package upgrade summary

mod text;

pub use text::TextFormatter;

/// Terminal states of a run that are reported with a single message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The outdated report was empty
    UpToDate,
    /// No breaking updates were found
    NoMajorUpdates,
    /// No minor/patch updates exist at all
    NoMinorPatchUpdates,
    /// Minor/patch updates exist but all are excluded
    NothingAfterExclusions,
    /// The user declined the confirmation prompt
    Cancelled,
    /// Dry-run stopped before the confirmation prompt
    DryRun,
}

impl Notice {
    /// Message text for this notice
    pub fn message(&self) -> &'static str {
        match self {
            Notice::UpToDate => "All dependencies are up to date.",
            Notice::NoMajorUpdates => "No major updates.",
            Notice::NoMinorPatchUpdates => "No minor or patch updates to apply.",
            Notice::NothingAfterExclusions => "Nothing left to update after exclusions.",
            Notice::Cancelled => "Update cancelled by user.",
            Notice::DryRun => "Dry run: no packages were installed.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages_are_distinct() {
        let notices = [
            Notice::UpToDate,
            Notice::NoMajorUpdates,
            Notice::NoMinorPatchUpdates,
            Notice::NothingAfterExclusions,
            Notice::Cancelled,
            Notice::DryRun,
        ];
        for (i, a) in notices.iter().enumerate() {
            for b in &notices[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
