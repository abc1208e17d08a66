//! Dependency records driving the generated declarations

use regex::Regex;
use semver::Version;
use serde::Deserialize;
use std::fmt;
use std::sync::LazyLock;

static NON_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid identifier regex"));

/// Newer versions reported for a dependency
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AvailableVersions {
    /// Newer stable release
    #[serde(default)]
    pub release: Option<String>,
    /// Newer milestone (alpha, beta, RC)
    #[serde(default)]
    pub milestone: Option<String>,
    /// Newer integration build (snapshot)
    #[serde(default)]
    pub integration: Option<String>,
}

impl AvailableVersions {
    /// Candidates in order of preference
    fn candidates(&self) -> impl Iterator<Item = &str> {
        [&self.release, &self.milestone, &self.integration]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.trim().is_empty())
    }
}

/// A declared library and the version it is pinned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Maven group
    pub group: String,
    /// Artifact name
    pub name: String,
    /// Currently declared version
    pub version: String,
    /// Identifier used as the variable or property key
    pub version_name: String,
    /// Newer versions, if the dependency is outdated
    pub available: Option<AvailableVersions>,
    /// Latest known version when the declared one is ahead of it
    pub latest: Option<String>,
}

impl Dependency {
    /// Creates a new dependency whose version name is derived from the artifact name
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            group: group.into(),
            version_name: escape_identifier(&name),
            name,
            version: version.into(),
            available: None,
            latest: None,
        }
    }

    /// Overrides the version name (builder pattern)
    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = version_name.into();
        self
    }

    /// Records newer available versions (builder pattern)
    pub fn with_available(mut self, available: AvailableVersions) -> Self {
        self.available = Some(available);
        self
    }

    /// Records the latest known version for an exceeded dependency (builder pattern)
    pub fn with_latest(mut self, latest: impl Into<String>) -> Self {
        self.latest = Some(latest.into());
        self
    }

    /// The first available version strictly newer than the declared one
    pub fn available_update(&self) -> Option<&str> {
        self.available
            .as_ref()?
            .candidates()
            .find(|candidate| is_newer(candidate, &self.version))
    }

    /// Trailing comment appended after the declaration
    ///
    /// Written with `"` quotes and a `//` marker; the generator substitutes
    /// both for the target dialect.
    pub fn version_information(&self) -> String {
        if let Some(latest) = &self.latest {
            return format!(" // exceed the version found: \"{}\"", latest);
        }
        match self.available_update() {
            Some(update) => format!(" // available: \"{}\"", update),
            None => String::new(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// Turns an arbitrary coordinate fragment into a valid identifier
pub fn escape_identifier(raw: &str) -> String {
    let escaped = NON_IDENTIFIER.replace_all(raw, "_").into_owned();
    match escaped.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", escaped),
        None => "_".to_string(),
        _ => escaped,
    }
}

/// Returns true if `candidate` is a newer version than `current`
///
/// Versions that do not fit semver (four components, `.RELEASE` suffixes)
/// are only compared for inequality.
pub fn is_newer(candidate: &str, current: &str) -> bool {
    match (lenient_semver(candidate), lenient_semver(current)) {
        (Some(candidate), Some(current)) => candidate > current,
        _ => candidate != current,
    }
}

/// Parses `1.2`, `v1.2.3` or `1.2.3-RC1` into a semver version
fn lenient_semver(version: &str) -> Option<Version> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    let (core, pre) = match version.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (version, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() > 3
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let mut padded = parts.join(".");
    for _ in parts.len()..3 {
        padded.push_str(".0");
    }
    if let Some(pre) = pre {
        padded.push('-');
        padded.push_str(pre);
    }
    Version::parse(&padded).ok()
}
