//! Run orchestration: settings → report → block writer
//!
//! This module provides:
//! - Early exit when no dialect is configured
//! - Loading dependencies from the report
//! - Routing the object dialect to `Versions.kt` generation and every other
//!   dialect to block regeneration

use crate::block::{BlockWriter, Outcome};
use crate::config::Settings;
use crate::domain::Dialect;
use crate::error::AppError;
use crate::report::load_report;
use std::io::Write;
use tracing::debug;

/// Orchestrator for a single regeneration run
pub struct Orchestrator {
    /// Effective settings
    settings: Settings,
}

impl Orchestrator {
    /// Create a new orchestrator with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the regeneration, printing any snippet to `out`
    pub fn run(&self, out: &mut dyn Write) -> Result<Outcome, AppError> {
        let Some(dialect) = self.settings.mode else {
            debug!("versions-only mode not set, skipping");
            return Ok(Outcome::Disabled);
        };

        let dependencies = load_report(&self.settings.report)?;
        debug!(
            report = %self.settings.report.display(),
            count = dependencies.len(),
            %dialect,
            "regenerating versions"
        );

        let writer = BlockWriter::new(
            self.settings.markers.clone(),
            self.settings.output.formatter(),
        );
        let file = self.settings.file.as_deref();

        let outcome = match dialect {
            Dialect::KotlinObject => writer.write_versions_object(file, &dependencies, out)?,
            _ => writer.regenerate(file, Some(dialect), &dependencies, out)?,
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Markers;
    use crate::error::ReportError;
    use crate::output::OutputConfig;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const REPORT: &str = r#"{
        "current": { "dependencies": [{ "group": "junit", "name": "junit", "version": "4.13.2" }] },
        "outdated": { "dependencies": [{
            "group": "com.squareup.okhttp3", "name": "okhttp", "version": "4.9.0",
            "available": { "release": "4.10.0" }
        }] }
    }"#;

    fn settings(dir: &Path, mode: Option<Dialect>, file: Option<PathBuf>) -> Settings {
        let report = dir.join("report.json");
        fs::write(&report, REPORT).unwrap();
        Settings {
            mode,
            file,
            report,
            markers: Markers::default(),
            output: OutputConfig::from_cli(false, false, true),
        }
    }

    #[test]
    fn test_run_disabled_does_not_read_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = settings(temp_dir.path(), None, None);
        settings.report = temp_dir.path().join("missing.json");
        let mut out = Vec::new();

        let outcome = Orchestrator::new(settings).run(&mut out).unwrap();
        assert_eq!(outcome, Outcome::Disabled);
    }

    #[test]
    fn test_run_missing_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = settings(temp_dir.path(), Some(Dialect::KotlinVal), None);
        settings.report = temp_dir.path().join("missing.json");
        let mut out = Vec::new();

        let err = Orchestrator::new(settings).run(&mut out).unwrap_err();
        assert!(matches!(err, AppError::Report(ReportError::NotFound { .. })));
    }

    #[test]
    fn test_run_rewrites_block() {
        let temp_dir = TempDir::new().unwrap();
        let build_file = temp_dir.path().join("build.gradle");
        fs::write(&build_file, "// <versions-only>\n// </versions-only>\n").unwrap();
        let settings = settings(
            temp_dir.path(),
            Some(Dialect::GroovyDef),
            Some(build_file.clone()),
        );
        let mut out = Vec::new();

        let outcome = Orchestrator::new(settings).run(&mut out).unwrap();

        assert!(matches!(outcome, Outcome::Rewritten { declarations: 2, .. }));
        let content = fs::read_to_string(&build_file).unwrap();
        assert!(content.contains("def junit = '4.13.2'\n"));
        assert!(content.contains("def okhttp = '4.9.0' // available: '4.10.0'\n"));
    }

    #[test]
    fn test_run_prints_snippet_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings(temp_dir.path(), Some(Dialect::GradleProperties), None);
        let mut out = Vec::new();

        let outcome = Orchestrator::new(settings).run(&mut out).unwrap();

        assert!(matches!(outcome, Outcome::Printed { .. }));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("\njunit=4.13.2\n"));
        assert!(printed.contains("# available: 4.10.0\nokhttp=4.9.0\n"));
    }

    #[test]
    fn test_run_routes_kotlin_object() {
        let temp_dir = TempDir::new().unwrap();
        let versions_kt = temp_dir.path().join("Versions.kt");
        let settings = settings(
            temp_dir.path(),
            Some(Dialect::KotlinObject),
            Some(versions_kt.clone()),
        );
        let mut out = Vec::new();

        let outcome = Orchestrator::new(settings).run(&mut out).unwrap();

        assert!(matches!(
            outcome,
            Outcome::Rewritten {
                dialect: Dialect::KotlinObject,
                ..
            }
        ));
        let content = fs::read_to_string(&versions_kt).unwrap();
        assert!(content.contains("const val okhttp: String = \"4.9.0\""));
    }
}
