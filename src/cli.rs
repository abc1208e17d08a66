//! CLI argument parsing module for versions-only

use crate::domain::Dialect;
use clap::Parser;
use std::path::PathBuf;

/// Parse a dialect name such as `kotlin-val` or `GROOVY_EXT`
fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse()
}

/// Regenerates the versions block of a Gradle build file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "versions-only",
    version,
    about = "Regenerates the versions block of a Gradle build file"
)]
pub struct CliArgs {
    /// Dependency-updates JSON report (default: build/dependencyUpdates/report.json)
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Output dialect: kotlin-val, kotlin-object, groovy-def, groovy-ext, gradle-properties
    #[arg(short, long, value_parser = parse_dialect)]
    pub mode: Option<Dialect>,

    /// Build file holding the versions block (kotlin-object replaces the whole file)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Configuration file (default: versions-only.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Text marking the start of the versions block
    #[arg(long)]
    pub start_marker: Option<String>,

    /// Text marking the end of the versions block
    #[arg(long)]
    pub end_marker: Option<String>,

    // Output options
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output and debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}
