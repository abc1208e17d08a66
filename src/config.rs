//! Configuration loading
//!
//! Settings come from (in priority order):
//! - Command-line flags
//! - `versions-only.toml` (or the file given with `--config`)
//! - Built-in defaults
//!
//! ```toml
//! mode = "groovy-def"
//! file = "build.gradle"
//! report = "build/dependencyUpdates/report.json"
//!
//! [markers]
//! start = "<versions-only>"
//! end = "</versions-only>"
//! ```

use crate::block::Markers;
use crate::cli::CliArgs;
use crate::domain::Dialect;
use crate::error::ConfigError;
use crate::output::OutputConfig;
use crate::report::DEFAULT_REPORT_PATH;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "versions-only.toml";

/// Contents of `versions-only.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Output dialect
    pub mode: Option<Dialect>,
    /// Build file holding the versions block
    pub file: Option<PathBuf>,
    /// Dependency-updates report
    pub report: Option<PathBuf>,
    /// Block sentinels
    #[serde(default)]
    pub markers: MarkerConfig,
}

/// `[markers]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl FileConfig {
    /// Parse config content; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::parse_error(path, e.to_string()))
    }

    /// Load a config file, resolving relative paths against its directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        let config = Self::parse(&content, path)?;
        debug!(path = %path.display(), "loaded config file");

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            file: config.file.map(|f| base.join(f)),
            report: config.report.map(|r| base.join(r)),
            ..config
        })
    }

    /// Load `--config` if given, else `versions-only.toml` if it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Effective settings for a run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Output dialect; None disables regeneration
    pub mode: Option<Dialect>,
    /// Build file holding the versions block
    pub file: Option<PathBuf>,
    /// Dependency-updates report
    pub report: PathBuf,
    /// Block sentinels
    pub markers: Markers,
    /// Console output options
    pub output: OutputConfig,
}

impl Settings {
    /// Build settings from CLI arguments and the discovered config file
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let config = FileConfig::discover(args.config.as_deref())?;
        Self::merge(args, config)
    }

    /// Merge CLI arguments over a config file; flags win
    pub fn merge(args: &CliArgs, config: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Markers::default();
        let start = args
            .start_marker
            .clone()
            .or(config.markers.start)
            .unwrap_or(defaults.start);
        let end = args
            .end_marker
            .clone()
            .or(config.markers.end)
            .unwrap_or(defaults.end);

        Ok(Self {
            mode: args.mode.or(config.mode),
            file: args.file.clone().or(config.file),
            report: args
                .report
                .clone()
                .or(config.report)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH)),
            markers: Markers::new(start, end)?,
            output: OutputConfig::from_cli(args.verbose, args.quiet, args.no_color),
        })
    }
}
