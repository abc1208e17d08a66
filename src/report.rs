//! Dependency-updates report loader
//!
//! Reads the JSON report written by `./gradlew dependencyUpdates`
//! (gradle-versions-plugin):
//!
//! ```json
//! {
//!   "current":    { "dependencies": [{ "group": "junit", "name": "junit", "version": "4.13.2" }] },
//!   "outdated":   { "dependencies": [{ "group": "...", "name": "...", "version": "...",
//!                                      "available": { "release": "...", "milestone": null } }] },
//!   "exceeded":   { "dependencies": [{ "group": "...", "name": "...", "version": "...", "latest": "..." }] },
//!   "unresolved": { "dependencies": [{ "group": "...", "name": "...", "version": "..." }] }
//! }
//! ```

use crate::domain::{escape_identifier, AvailableVersions, Dependency};
use crate::error::ReportError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

/// Default location of the report, relative to the project root
pub const DEFAULT_REPORT_PATH: &str = "build/dependencyUpdates/report.json";

#[derive(Debug, Default, Deserialize)]
struct Report {
    #[serde(default)]
    current: Section,
    #[serde(default)]
    outdated: Section,
    #[serde(default)]
    exceeded: Section,
    #[serde(default)]
    unresolved: Section,
}

#[derive(Debug, Default, Deserialize)]
struct Section {
    #[serde(default)]
    dependencies: Vec<ReportEntry>,
}

#[derive(Debug, Deserialize)]
struct ReportEntry {
    group: String,
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    available: Option<AvailableVersions>,
    #[serde(default)]
    latest: Option<String>,
}

/// Load dependencies from a report file
pub fn load_report(path: &Path) -> Result<Vec<Dependency>, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReportError::not_found(path)
        } else {
            ReportError::read_error(path, e)
        }
    })?;
    parse_report(&content, path)
}

/// Parse dependencies from report content
///
/// Entries are deduplicated by coordinates and sorted by version name.
/// Unresolved entries and entries without a version are skipped.
pub fn parse_report(content: &str, path: &Path) -> Result<Vec<Dependency>, ReportError> {
    let report: Report =
        serde_json::from_str(content).map_err(|e| ReportError::parse_error(path, e.to_string()))?;

    for entry in &report.unresolved.dependencies {
        warn!(
            dependency = %format!("{}:{}", entry.group, entry.name),
            "skipping unresolved dependency"
        );
    }

    let entries = report
        .current
        .dependencies
        .into_iter()
        .chain(report.outdated.dependencies)
        .chain(report.exceeded.dependencies);

    let mut seen = HashSet::new();
    let mut dependencies = Vec::new();
    for entry in entries {
        let Some(version) = entry.version.filter(|v| !v.trim().is_empty()) else {
            warn!(
                dependency = %format!("{}:{}", entry.group, entry.name),
                "skipping dependency without a version"
            );
            continue;
        };
        if !seen.insert((entry.group.clone(), entry.name.clone())) {
            debug!(group = %entry.group, name = %entry.name, "duplicate report entry");
            continue;
        }

        let mut dependency = Dependency::new(entry.group, entry.name, version);
        if let Some(available) = entry.available {
            dependency = dependency.with_available(available);
        }
        if let Some(latest) = entry.latest {
            dependency = dependency.with_latest(latest);
        }
        dependencies.push(dependency);
    }

    assign_version_names(&mut dependencies);
    dependencies.sort_by(|a, b| a.version_name.cmp(&b.version_name));
    debug!(count = dependencies.len(), "loaded dependencies from report");

    Ok(dependencies)
}

/// Gives every dependency a unique version name
///
/// Artifacts whose escaped names collide are qualified with their group,
/// e.g. `com_squareup_okhttp3_okhttp`.
pub fn assign_version_names(dependencies: &mut [Dependency]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for dependency in dependencies.iter() {
        *counts.entry(escape_identifier(&dependency.name)).or_default() += 1;
    }

    for dependency in dependencies.iter_mut() {
        let short = escape_identifier(&dependency.name);
        dependency.version_name = if counts[&short] > 1 {
            escape_identifier(&format!("{}_{}", dependency.group, dependency.name))
        } else {
            short
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const REPORT: &str = r#"{
        "current": {
            "dependencies": [
                { "group": "junit", "name": "junit", "version": "4.13.2", "projectUrl": "http://junit.org" }
            ],
            "count": 1
        },
        "outdated": {
            "dependencies": [
                {
                    "group": "com.squareup.okhttp3",
                    "name": "okhttp",
                    "version": "4.9.0",
                    "available": { "release": "4.10.0", "milestone": null, "integration": null }
                }
            ],
            "count": 1
        },
        "exceeded": {
            "dependencies": [
                { "group": "org.jetbrains.kotlin", "name": "kotlin-stdlib", "version": "1.9.0-dev", "latest": "1.8.22" }
            ],
            "count": 1
        },
        "unresolved": {
            "dependencies": [
                { "group": "com.example", "name": "missing", "version": "1.0", "reason": "not found" }
            ],
            "count": 1
        },
        "count": 4,
        "gradle": { "enabled": false }
    }"#;

    fn report_path() -> PathBuf {
        PathBuf::from(DEFAULT_REPORT_PATH)
    }

    #[test]
    fn test_parse_report() {
        let deps = parse_report(REPORT, &report_path()).unwrap();
        let names: Vec<&str> = deps.iter().map(|d| d.version_name.as_str()).collect();
        assert_eq!(names, vec!["junit", "kotlin_stdlib", "okhttp"]);
    }

    #[test]
    fn test_parse_report_keeps_version_information() {
        let deps = parse_report(REPORT, &report_path()).unwrap();

        let okhttp = deps.iter().find(|d| d.name == "okhttp").unwrap();
        assert_eq!(okhttp.version_information(), " // available: \"4.10.0\"");

        let stdlib = deps.iter().find(|d| d.name == "kotlin-stdlib").unwrap();
        assert_eq!(stdlib.latest.as_deref(), Some("1.8.22"));

        let junit = deps.iter().find(|d| d.name == "junit").unwrap();
        assert_eq!(junit.version_information(), "");
    }

    #[test]
    fn test_parse_report_skips_unresolved() {
        let deps = parse_report(REPORT, &report_path()).unwrap();
        assert!(deps.iter().all(|d| d.name != "missing"));
    }

    #[test]
    fn test_parse_report_missing_sections() {
        let deps = parse_report("{}", &report_path()).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_parse_report_skips_entries_without_version() {
        let content = r#"{ "current": { "dependencies": [
            { "group": "a", "name": "b" },
            { "group": "c", "name": "d", "version": "1.0" }
        ] } }"#;
        let deps = parse_report(content, &report_path()).unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "d");
    }

    #[test]
    fn test_parse_report_deduplicates() {
        let content = r#"{
            "current": { "dependencies": [{ "group": "a", "name": "b", "version": "1.0" }] },
            "outdated": { "dependencies": [{ "group": "a", "name": "b", "version": "1.0" }] }
        }"#;
        let deps = parse_report(content, &report_path()).unwrap();
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_parse_report_invalid_json() {
        let err = parse_report("{ not json", &report_path()).unwrap_err();
        assert!(matches!(err, ReportError::ParseError { .. }));
    }

    #[test]
    fn test_assign_version_names_qualifies_collisions() {
        let mut deps = vec![
            Dependency::new("com.squareup.okhttp3", "okhttp", "4.9.0"),
            Dependency::new("com.squareup.okhttp", "okhttp", "2.7.5"),
            Dependency::new("junit", "junit", "4.13.2"),
        ];
        assign_version_names(&mut deps);

        assert_eq!(deps[0].version_name, "com_squareup_okhttp3_okhttp");
        assert_eq!(deps[1].version_name, "com_squareup_okhttp_okhttp");
        assert_eq!(deps[2].version_name, "junit");
    }

    #[test]
    fn test_load_report_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_report(&temp_dir.path().join("report.json")).unwrap_err();
        assert!(matches!(err, ReportError::NotFound { .. }));
    }

    #[test]
    fn test_load_report_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        std::fs::write(&path, REPORT).unwrap();

        let deps = load_report(&path).unwrap();
        assert_eq!(deps.len(), 3);
    }
}
