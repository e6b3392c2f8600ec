//! Version comparison
//!
//! Classification only looks at the leading (major) component of each
//! version string. Anything after the first dot is treated as safe to batch.

use crate::error::VersionFormatError;
use semver::Version;

/// Extract the leading numeric component of a version string
pub fn leading_component(version: &str) -> Result<u64, VersionFormatError> {
    version
        .split('.')
        .next()
        .and_then(|major| major.parse::<u64>().ok())
        .ok_or_else(|| VersionFormatError::new(version))
}

/// Returns true iff `latest`'s leading component is strictly greater than `current`'s
pub fn is_breaking(current: &str, latest: &str) -> Result<bool, VersionFormatError> {
    let current_major = leading_component(current)?;
    let latest_major = leading_component(latest)?;
    Ok(latest_major > current_major)
}

/// Finer-grained change kind, used only for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Leading component differs
    Major,
    /// Second component differs
    Minor,
    /// Anything past the second component differs
    Patch,
}

impl ChangeKind {
    /// Determine the change kind between two versions
    ///
    /// Uses full semver parsing when both sides are valid semver, otherwise
    /// falls back to comparing dot-separated components numerically where
    /// both sides parse, textually where they don't.
    pub fn between(current: &str, latest: &str) -> Self {
        if let (Ok(old), Ok(new)) = (Version::parse(current), Version::parse(latest)) {
            return if old.major != new.major {
                ChangeKind::Major
            } else if old.minor != new.minor {
                ChangeKind::Minor
            } else {
                ChangeKind::Patch
            };
        }

        let old: Vec<&str> = current.split('.').collect();
        let new: Vec<&str> = latest.split('.').collect();
        if !same_component(old.first(), new.first()) {
            ChangeKind::Major
        } else if !same_component(old.get(1), new.get(1)) {
            ChangeKind::Minor
        } else {
            ChangeKind::Patch
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
        }
    }
}

fn same_component(old: Option<&&str>, new: Option<&&str>) -> bool {
    match (old, new) {
        (Some(a), Some(b)) => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x == y,
            _ => a == b,
        },
        (None, None) => true,
        _ => false,
    }
}
