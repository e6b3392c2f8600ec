//! Update classification

use std::fmt;

/// Semantic impact of moving from the current to the latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateClass {
    /// Leading version component increases (breaking)
    Major,
    /// Change confined to the second component or later
    MinorPatch,
}

impl UpdateClass {
    /// Classify from the breaking flag produced by the version comparator
    pub fn from_breaking(breaking: bool) -> Self {
        if breaking {
            UpdateClass::Major
        } else {
            UpdateClass::MinorPatch
        }
    }
}

impl fmt::Display for UpdateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateClass::Major => write!(f, "major"),
            UpdateClass::MinorPatch => write!(f, "minor/patch"),
        }
    }
}
