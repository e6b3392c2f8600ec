//! Application error types using thiserror
//!
//! Error hierarchy:
//! - PrerequisiteMissing: a required external tool is unavailable
//! - ReportError: the outdated report could not be obtained or parsed
//! - ConfigError: issues with the minup.toml configuration file
//! - IoError: file system or terminal operation failures
//!
//! VersionFormatError is non-fatal: records carrying it are set aside by the
//! planner and surfaced as warnings.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A required external tool is not available
    #[error("required tool '{tool}' is not available: {message}")]
    PrerequisiteMissing { tool: String, message: String },

    /// Outdated report related errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to the outdated report
#[derive(Error, Debug)]
pub enum ReportError {
    /// The report is not valid JSON or not a JSON object
    #[error("failed to parse outdated report: {message}")]
    Parse { message: String },

    /// A package entry is missing a required field
    #[error("malformed report entry for '{package}': {message}")]
    MalformedEntry { package: String, message: String },

    /// The resolver ran but produced no report
    #[error("'{command}' produced no report: {message}")]
    Unavailable { command: String, message: String },
}

/// A version string whose leading component is not an integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid version '{version}': leading component is not numeric")]
pub struct VersionFormatError {
    /// The offending version string
    pub version: String,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read a file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from or write to the terminal
    #[error("terminal IO error: {source}")]
    Terminal {
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Creates a new PrerequisiteMissing error
    pub fn prerequisite_missing(tool: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::PrerequisiteMissing {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        AppError::Io(IoError::Terminal { source })
    }
}

impl ReportError {
    /// Creates a new Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        ReportError::Parse {
            message: message.into(),
        }
    }

    /// Creates a new MalformedEntry error
    pub fn malformed_entry(package: impl Into<String>, message: impl Into<String>) -> Self {
        ReportError::MalformedEntry {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Unavailable error
    pub fn unavailable(command: impl Into<String>, message: impl Into<String>) -> Self {
        ReportError::Unavailable {
            command: command.into(),
            message: message.into(),
        }
    }
}

impl VersionFormatError {
    /// Creates a new VersionFormatError
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::ReadError {
            path: path.into(),
            source,
        }
    }
}
