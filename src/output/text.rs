//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The copy-paste snippet with setup instructions
//! - A short report of the run outcome

use crate::block::{Outcome, REFERENCE_URL};
use crate::domain::Dialect;
use crate::output::Verbosity;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Write the rendered block followed by setup instructions
    ///
    /// The block itself is never colored so it can be pasted as is.
    pub fn format_snippet(
        &self,
        dialect: Dialect,
        block: &[String],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let header = "== 📋 copy-paste needed! 📋 ==";
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}", header.yellow().bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }
        writeln!(writer)?;
        writeln!(writer, "Copy-paste the snippet below:")?;
        writeln!(writer)?;
        for line in block {
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer)?;
        writeln!(writer, "in the file you configure with something like:")?;
        writeln!(writer)?;
        writeln!(writer, "# versions-only.toml")?;
        writeln!(writer, "mode = \"{}\"", dialect.as_str())?;
        writeln!(writer, "file = \"{}\"", dialect.suggested_filename())?;
        writeln!(writer)?;
        writeln!(writer, "or on the command line:")?;
        writeln!(writer)?;
        writeln!(
            writer,
            "versions-only --mode {} --file {}",
            dialect.as_str(),
            dialect.suggested_filename()
        )?;
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "See {}", REFERENCE_URL.cyan())?;
        } else {
            writeln!(writer, "See {}", REFERENCE_URL)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Write a short report of what the run did
    pub fn format_outcome(&self, outcome: &Outcome, writer: &mut dyn Write) -> std::io::Result<()> {
        match outcome {
            Outcome::Rewritten {
                path,
                dialect,
                declarations,
            } => {
                if self.verbosity == Verbosity::Quiet {
                    return Ok(());
                }
                if self.color {
                    writeln!(
                        writer,
                        "{} Regenerated {} version(s) in {} ({})",
                        "✓".green(),
                        declarations.to_string().green(),
                        path.display().to_string().bold(),
                        dialect
                    )?;
                } else {
                    writeln!(
                        writer,
                        "Regenerated {} version(s) in {} ({})",
                        declarations,
                        path.display(),
                        dialect
                    )?;
                }
            }
            Outcome::Printed {
                dialect,
                declarations,
            } => {
                if self.verbosity == Verbosity::Verbose {
                    writeln!(
                        writer,
                        "No versions block found: printed {} version(s) as {}",
                        declarations, dialect
                    )?;
                }
            }
            Outcome::Disabled => {
                if self.verbosity == Verbosity::Quiet {
                    return Ok(());
                }
                let message = "versions-only mode is not set, nothing to do (use --mode or versions-only.toml)";
                if self.color {
                    writeln!(writer, "{}", message.dimmed())?;
                } else {
                    writeln!(writer, "{}", message)?;
                }
            }
        }
        Ok(())
    }
}
