//! Build file regeneration
//!
//! This module provides:
//! - BlockWriter for replacing the managed block in place
//! - Console fallback when no file is configured or no block is found
//! - Whole-file generation for the Kotlin object dialect

use super::{
    is_versions_object, locate_block, read_lines, render_block, render_versions_object,
    BlockBounds, Markers, NO_BLOCK_INDENT,
};
use crate::domain::{Dependency, Dialect};
use crate::error::BuildFileError;
use crate::output::TextFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a regeneration run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No dialect configured
    Disabled,
    /// The block (or the whole `Versions.kt`) was written to `path`
    Rewritten {
        path: PathBuf,
        dialect: Dialect,
        declarations: usize,
    },
    /// The block was printed as a copy-paste snippet
    Printed {
        dialect: Dialect,
        declarations: usize,
    },
}

/// Writer that regenerates the managed block of a build file
pub struct BlockWriter {
    /// Sentinels delimiting the block
    markers: Markers,
    /// Formatter for the copy-paste snippet
    formatter: TextFormatter,
}

impl BlockWriter {
    /// Create a new BlockWriter
    pub fn new(markers: Markers, formatter: TextFormatter) -> Self {
        Self { markers, formatter }
    }

    /// Rewrite the managed block of `file`, or print it to `out`
    ///
    /// The file is only touched when both markers are found in it. Content
    /// outside the block is preserved and no backup is kept.
    ///
    /// # Panics
    /// Panics for `Dialect::KotlinObject`; use `write_versions_object`.
    pub fn regenerate(
        &self,
        file: Option<&Path>,
        dialect: Option<Dialect>,
        dependencies: &[Dependency],
        out: &mut dyn Write,
    ) -> Result<Outcome, BuildFileError> {
        let Some(dialect) = dialect else {
            debug!("no versions-only mode configured");
            return Ok(Outcome::Disabled);
        };

        let bounds = locate_block(file, dialect, &self.markers);
        let indent = bounds
            .as_ref()
            .map_or(NO_BLOCK_INDENT, |b| b.indent.as_str());
        let block = render_block(dialect, indent, dependencies, &self.markers);

        if let (Some(path), Some(bounds)) = (file, &bounds) {
            if let Some(lines) = read_lines(path).filter(|lines| bounds.end < lines.len()) {
                let content = splice(&lines, bounds, &block);
                fs::write(path, content).map_err(|e| BuildFileError::write_error(path, e))?;
                info!(
                    path = %path.display(),
                    dialect = %dialect,
                    declarations = dependencies.len(),
                    "rewrote versions block"
                );
                return Ok(Outcome::Rewritten {
                    path: path.to_path_buf(),
                    dialect,
                    declarations: dependencies.len(),
                });
            }
        }

        self.formatter
            .format_snippet(dialect, &block, out)
            .map_err(BuildFileError::output_error)?;
        Ok(Outcome::Printed {
            dialect,
            declarations: dependencies.len(),
        })
    }

    /// Write `Versions.kt` to `file`, or print it to `out` without a file
    ///
    /// The whole file is replaced, so an existing non-empty file is only
    /// overwritten when it was generated by a previous run.
    pub fn write_versions_object(
        &self,
        file: Option<&Path>,
        dependencies: &[Dependency],
        out: &mut dyn Write,
    ) -> Result<Outcome, BuildFileError> {
        let lines = render_versions_object(dependencies);

        let Some(path) = file else {
            self.formatter
                .format_snippet(Dialect::KotlinObject, &lines, out)
                .map_err(BuildFileError::output_error)?;
            return Ok(Outcome::Printed {
                dialect: Dialect::KotlinObject,
                declarations: dependencies.len(),
            });
        };

        if let Ok(existing) = fs::read_to_string(path) {
            if !existing.trim().is_empty() && !is_versions_object(&existing) {
                return Err(BuildFileError::not_generated(path));
            }
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BuildFileError::write_error(path, e))?;
        }
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(path, content).map_err(|e| BuildFileError::write_error(path, e))?;
        info!(path = %path.display(), "wrote versions object");

        Ok(Outcome::Rewritten {
            path: path.to_path_buf(),
            dialect: Dialect::KotlinObject,
            declarations: dependencies.len(),
        })
    }
}

/// Replaces lines `bounds.start..=bounds.end` with `block`
///
/// Lines are joined with `\n` and the result ends with a newline.
pub fn splice(lines: &[String], bounds: &BlockBounds, block: &[String]) -> String {
    let before = &lines[..bounds.start];
    let after = &lines[bounds.end + 1..];

    let mut content = before
        .iter()
        .chain(block)
        .chain(after)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');
    content
}
