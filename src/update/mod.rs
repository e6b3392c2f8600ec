//! Update planning for outdated dependencies
//!
//! This module provides:
//! - Version comparison (major vs. minor/patch)
//! - Exclusion policy loaded from the exclusion file
//! - Outdated report parsing
//! - The planner that partitions records into majors, approved and skipped

mod exclusion;
mod report;
mod version;

pub use exclusion::ExclusionSet;
pub use report::parse_report;
pub use version::{is_breaking, leading_component, ChangeKind};

use crate::domain::{DependencyRecord, UpdateClass};
use crate::error::VersionFormatError;

/// A record whose versions could not be classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRecord {
    pub record: DependencyRecord,
    pub error: VersionFormatError,
}

/// Partitioned view of the outdated report
///
/// Every input record lands in exactly one of the four groups, and each
/// group keeps the report's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Breaking updates, listed for information only
    pub majors: Vec<DependencyRecord>,
    /// Minor/patch updates that will be offered for upgrade
    pub approved: Vec<DependencyRecord>,
    /// Minor/patch updates held back by the exclusion set
    pub skipped: Vec<DependencyRecord>,
    /// Records with unclassifiable versions
    pub invalid: Vec<InvalidRecord>,
}

impl UpdatePlan {
    /// Total number of records across all groups
    pub fn total(&self) -> usize {
        self.majors.len() + self.approved.len() + self.skipped.len() + self.invalid.len()
    }
}

/// Partitions outdated records by update class and exclusion policy
pub struct UpdatePlanner<'a> {
    exclusions: &'a ExclusionSet,
}

impl<'a> UpdatePlanner<'a> {
    /// Create a planner that applies the given exclusion set
    pub fn new(exclusions: &'a ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// Classify a single record
    pub fn classify(record: &DependencyRecord) -> Result<UpdateClass, VersionFormatError> {
        is_breaking(&record.current, &record.latest).map(UpdateClass::from_breaking)
    }

    /// Partition records into majors, approved, skipped and invalid
    pub fn partition(&self, records: &[DependencyRecord]) -> UpdatePlan {
        let mut plan = UpdatePlan::default();

        for record in records {
            match Self::classify(record) {
                Ok(UpdateClass::Major) => plan.majors.push(record.clone()),
                Ok(UpdateClass::MinorPatch) => {
                    if self.exclusions.contains(&record.name) {
                        plan.skipped.push(record.clone());
                    } else {
                        plan.approved.push(record.clone());
                    }
                }
                Err(error) => plan.invalid.push(InvalidRecord {
                    record: record.clone(),
                    error,
                }),
            }
        }

        plan
    }
}
