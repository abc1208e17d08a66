//! versions-only - Gradle versions block generator CLI
//!
//! Reads the dependency-updates report and rewrites the versions block of
//! the configured build file, or prints a snippet to paste into it.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use versions_only::cli::CliArgs;
use versions_only::config::Settings;
use versions_only::orchestrator::Orchestrator;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Debug logging goes to stderr so snippets on stdout stay clean
    if args.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("Warning: failed to install log subscriber");
        }
    }

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::from_cli(&args)?;

    if args.verbose {
        eprintln!("versions-only v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Report: {}", settings.report.display());
        if let Some(file) = &settings.file {
            eprintln!("File: {}", file.display());
        }
    }

    let formatter = settings.output.formatter();
    let orchestrator = Orchestrator::new(settings);

    let mut stdout = io::stdout().lock();
    let outcome = orchestrator.run(&mut stdout)?;
    formatter.format_outcome(&outcome, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
