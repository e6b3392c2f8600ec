//! Project configuration reader
//!
//! Reads the optional `minup.toml` in the project directory:
//!
//! ```toml
//! npm = "npm"
//! exclude_file = ".minupignore"
//! exclude = ["typescript"]
//! ```
//!
//! A missing file means defaults; a malformed one is an error.

use crate::error::ConfigError;
use crate::package_manager::DEFAULT_PROGRAM;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE: &str = "minup.toml";

/// Default exclusion file name
pub const DEFAULT_EXCLUDE_FILE: &str = ".minupignore";

/// Project configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Package manager program
    pub npm: String,
    /// Exclusion file, relative to the project directory
    pub exclude_file: PathBuf,
    /// Extra exclusions appended after the file's entries
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            npm: DEFAULT_PROGRAM.to_string(),
            exclude_file: PathBuf::from(DEFAULT_EXCLUDE_FILE),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::toml_parse_error(path, e.to_string()))
    }

    /// Read `minup.toml` from a directory, falling back to defaults when absent
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content, &path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::read_error(path, e)),
        }
    }

    /// Override the exclusion file (CLI flag takes precedence)
    pub fn with_exclude_file(mut self, exclude_file: Option<PathBuf>) -> Self {
        if let Some(path) = exclude_file {
            self.exclude_file = path;
        }
        self
    }

    /// Resolve the exclusion file against the project directory
    pub fn exclude_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.exclude_file)
    }
}
