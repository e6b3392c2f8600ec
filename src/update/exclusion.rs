//! Exclusion policy
//!
//! Packages listed in the exclusion file are reported but never upgraded.
//! The file is newline-delimited; blank lines and `#` comments are ignored.

use crate::error::IoError;
use std::path::Path;

/// Ordered set of package names to skip, immutable for the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from package names, keeping first-seen order
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.extend(names);
        set
    }

    /// Parse exclusion file content
    pub fn parse(content: &str) -> Self {
        Self::from_names(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load the exclusion file; a missing file yields an empty set
    pub fn load(path: &Path) -> Result<Self, IoError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(IoError::read_error(path, e)),
        }
    }

    /// Append names not already present
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !name.is_empty() && !self.contains(&name) {
                self.names.push(name);
            }
        }
    }

    /// Exact-match membership check
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Excluded names in load order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
