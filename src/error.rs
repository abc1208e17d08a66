//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReportError: Issues reading the dependency-updates report
//! - BuildFileError: Failures writing the regenerated build file
//! - ConfigError: Issues with CLI or `versions-only.toml` configuration
//!
//! A missing or unreadable target build file is not an error: it is
//! treated as "no block found" and the snippet is printed instead.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dependency report related errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Build file related errors
    #[error(transparent)]
    BuildFile(#[from] BuildFileError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the dependency-updates report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report file not found
    #[error("dependency report not found: {path} (run ./gradlew dependencyUpdates first)")]
    NotFound { path: PathBuf },

    /// Failed to read the report
    #[error("failed to read dependency report {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report is not valid JSON or has an unexpected shape
    #[error("failed to parse dependency report {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors related to the regenerated build file
#[derive(Error, Debug)]
pub enum BuildFileError {
    /// Failed to write the build file
    #[error("failed to write build file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refused to replace a file that was not generated by versions-only
    #[error("refusing to overwrite {path}: not a generated Versions.kt (remove it or pick another --file)")]
    NotGenerated { path: PathBuf },

    /// Failed to print the copy-paste snippet
    #[error("failed to print snippet: {source}")]
    OutputError {
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys
    #[error("failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// A marker is empty or the two markers are identical
    #[error("invalid block markers: {message}")]
    InvalidMarkers { message: String },
}

impl ReportError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ReportError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReportError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl BuildFileError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildFileError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new NotGenerated error
    pub fn not_generated(path: impl Into<PathBuf>) -> Self {
        BuildFileError::NotGenerated { path: path.into() }
    }

    /// Creates a new OutputError
    pub fn output_error(source: std::io::Error) -> Self {
        BuildFileError::OutputError { source }
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

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidMarkers error
    pub fn invalid_markers(message: impl Into<String>) -> Self {
        ConfigError::InvalidMarkers {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_not_found() {
        let err = ReportError::not_found("build/dependencyUpdates/report.json");
        let msg = format!("{}", err);
        assert!(msg.contains("dependency report not found"));
        assert!(msg.contains("report.json"));
        assert!(msg.contains("dependencyUpdates"));
    }

    #[test]
    fn test_report_error_parse() {
        let err = ReportError::parse_error("report.json", "expected value at line 1");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse dependency report"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_report_error_read() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReportError::read_error("report.json", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read dependency report"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_build_file_error_write() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = BuildFileError::write_error("build.gradle", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write build file build.gradle"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_build_file_error_not_generated() {
        let err = BuildFileError::not_generated("build.gradle.kts");
        let msg = format!("{}", err);
        assert!(msg.contains("refusing to overwrite build.gradle.kts"));
    }

    #[test]
    fn test_build_file_error_output() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = BuildFileError::output_error(io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to print snippet"));
        assert!(msg.contains("pipe closed"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::parse_error("versions-only.toml", "unknown field `mdoe`");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse config file"));
        assert!(msg.contains("mdoe"));
    }

    #[test]
    fn test_config_error_invalid_markers() {
        let err = ConfigError::invalid_markers("start marker is empty");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid block markers"));
        assert!(msg.contains("start marker is empty"));
    }

    #[test]
    fn test_app_error_from_report_error() {
        let app_err: AppError = ReportError::not_found("/missing.json").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("dependency report not found"));
    }

    #[test]
    fn test_app_error_from_build_file_error() {
        let io = std::io::Error::other("disk full");
        let app_err: AppError = BuildFileError::write_error("build.gradle", io).into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to write build file"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::invalid_markers("identical markers").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("identical markers"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ReportError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
