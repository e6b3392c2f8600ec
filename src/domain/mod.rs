//! Core domain models for minup
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records parsed from the outdated report
//! - Update classification (major vs. minor/patch)
//! - Per-package upgrade outcomes
//! - The end-of-run summary

mod dependency;
mod outcome;
mod summary;
mod update_class;

pub use dependency::DependencyRecord;
pub use outcome::{UpgradeOutcome, UpgradeStatus};
pub use summary::RunSummary;
pub use update_class::UpdateClass;
