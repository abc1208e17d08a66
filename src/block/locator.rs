//! Block detection in an existing build file

use super::{BlockBounds, Markers, DEFAULT_INDENT};
use crate::domain::Dialect;
use std::path::Path;
use tracing::debug;

/// Reads the lines of a build file
///
/// Returns None if the file cannot be read; callers treat that the same as
/// a file without a managed block.
pub fn read_lines(path: &Path) -> Option<Vec<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content.lines().map(str::to_string).collect()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot read build file");
            None
        }
    }
}

/// Locates the managed block in `file`
pub fn locate_block(
    file: Option<&Path>,
    dialect: Dialect,
    markers: &Markers,
) -> Option<BlockBounds> {
    let path = file?;
    let lines = read_lines(path)?;
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

    let bounds = find_block(&lines, dialect, markers);
    match &bounds {
        Some(b) => debug!(
            path = %path.display(),
            start = b.start,
            end = b.end,
            "found versions block"
        ),
        None => debug!(path = %path.display(), "no versions block markers found"),
    }
    bounds
}

/// Finds the block bounds among `lines`
///
/// Only the first line matching each marker is considered. An end marker
/// placed before the start marker counts as no block.
pub fn find_block(lines: &[&str], dialect: Dialect, markers: &Markers) -> Option<BlockBounds> {
    let start = lines
        .iter()
        .position(|line| line.trim().ends_with(markers.start.as_str()))?;
    let end = lines
        .iter()
        .position(|line| line.trim().ends_with(markers.end.as_str()))?;

    if end < start {
        debug!(start, end, "end marker precedes start marker");
        return None;
    }

    let indent = match dialect {
        Dialect::GradleProperties => String::new(),
        _ => derive_indent(lines[end], dialect.comment()),
    };

    Some(BlockBounds { start, end, indent })
}

/// Text of `line` before the comment marker, or DEFAULT_INDENT without one
pub fn derive_indent(line: &str, comment: &str) -> String {
    match line.find(comment) {
        Some(idx) => line[..idx].to_string(),
        None => DEFAULT_INDENT.to_string(),
    }
}
