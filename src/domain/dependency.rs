//! Dependency record parsed from the outdated report

use std::fmt;

/// A package whose installed version differs from the latest published one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Package name
    pub name: String,
    /// Currently installed version
    pub current: String,
    /// Latest published version
    pub latest: String,
}

impl DependencyRecord {
    /// Creates a new dependency record
    pub fn new(
        name: impl Into<String>,
        current: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            current: current.into(),
            latest: latest.into(),
        }
    }

    /// Install specifier targeting the latest version (`name@latest`)
    pub fn install_spec(&self) -> String {
        format!("{}@{}", self.name, self.latest)
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.name, self.current, self.latest)
    }
}
