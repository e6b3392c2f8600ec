//! minup - interactive minor/patch dependency upgrader library
//!
//! This library provides the core functionality for:
//! - Parsing the `npm outdated --json` report
//! - Classifying updates as major or minor/patch
//! - Applying a per-project exclusion list
//! - Upgrading the approved packages with a forced retry on failure

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod executor;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod prompt;
pub mod update;
