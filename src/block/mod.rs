//! Marker-delimited version block handling
//!
//! A managed block looks like this in a Kotlin build script:
//!
//! ```text
//! // <versions-only>
//! // Generated by versions-only
//! // See https://github.com/jmfayard/buildSrcVersions/issues/54
//! val okhttp = "4.9.0" // available: "4.10.0"
//! // </versions-only>
//! ```
//!
//! This module provides:
//! - Block location and indentation detection (`locator`)
//! - Rendering of the replacement lines per dialect (`generator`)
//! - Splicing into the build file or printing a snippet (`writer`)
//! - Generation of the `Versions.kt` object for the object dialect (`object`)

mod generator;
mod locator;
mod object;
mod writer;

pub use generator::{render_block, render_dependency};
pub use locator::{derive_indent, find_block, locate_block, read_lines};
pub use object::{is_versions_object, render_versions_object, VERSIONS_OBJECT_NAME};
pub use writer::{splice, BlockWriter, Outcome};

use crate::error::ConfigError;

/// Sentinel opening the managed block
pub const DEFAULT_START_MARKER: &str = "<versions-only>";

/// Sentinel closing the managed block
pub const DEFAULT_END_MARKER: &str = "</versions-only>";

/// Indentation used when the end-marker line carries no comment marker
pub const DEFAULT_INDENT: &str = "    ";

/// Indentation used to render the snippet when no block was found
pub const NO_BLOCK_INDENT: &str = "";

/// Where the versions-only mode is documented
pub const REFERENCE_URL: &str = "https://github.com/jmfayard/buildSrcVersions/issues/54";

/// Line following the start marker in every generated block
const GENERATED_BY: &str = "Generated by versions-only";

/// Location of the managed block in a build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBounds {
    /// Index of the start-marker line (0-based)
    pub start: usize,
    /// Index of the end-marker line (0-based)
    pub end: usize,
    /// Indentation reused for the regenerated lines
    pub indent: String,
}

/// Start and end sentinels of the managed block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl Markers {
    /// Creates markers, rejecting pairs that cannot be told apart
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, ConfigError> {
        let start = start.into().trim().to_string();
        let end = end.into().trim().to_string();

        if start.is_empty() || end.is_empty() {
            return Err(ConfigError::invalid_markers("markers must not be empty"));
        }
        // Markers are matched by suffix, so one must not end with the other
        if start.ends_with(&end) || end.ends_with(&start) {
            return Err(ConfigError::invalid_markers(format!(
                "'{}' and '{}' cannot be told apart",
                start, end
            )));
        }
        // Nor may either match the generated intro lines, or the next run
        // would stop the block early
        let reference = format!("See {}", REFERENCE_URL);
        for marker in [&start, &end] {
            for line in [GENERATED_BY, reference.as_str()] {
                if line.ends_with(marker.as_str()) || marker.ends_with(line) {
                    return Err(ConfigError::invalid_markers(format!(
                        "'{}' matches the generated line '{}'",
                        marker, line
                    )));
                }
            }
        }

        Ok(Self { start, end })
    }

    /// Comment lines opening every generated block
    ///
    /// The first line is the start marker, so a regenerated block is found
    /// again on the next run.
    pub fn intro(&self) -> Vec<String> {
        vec![
            self.start.clone(),
            GENERATED_BY.to_string(),
            format!("See {}", REFERENCE_URL),
        ]
    }
}
