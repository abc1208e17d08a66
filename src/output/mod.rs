//! Console output
//!
//! This module provides:
//! - The copy-paste snippet printed when no managed block can be rewritten
//! - A one-line report of what a run did

mod text;

pub use text::TextFormatter;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only the snippet, when one is needed
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(verbose: bool, quiet: bool, no_color: bool) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            verbosity,
            color: !no_color,
        }
    }

    /// Create the formatter for this configuration
    pub fn formatter(&self) -> TextFormatter {
        TextFormatter::with_color(self.verbosity, self.color)
    }
}
