use std::io;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;

mod cli;
mod commands;
mod config;
mod error;
mod input;

use error::CommandError;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    match commands::run_command(cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err)),
    }
}

/// Logs go to stderr; stdout carries only the document.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Print `err` to stderr and return the process exit status for it.
///
/// A refused merge target is guidance, not a failure, and exits 0. A missing
/// argument is a usage error and exits 2. Everything else exits 1.
fn report(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CommandError>() {
        Some(refusal @ CommandError::UnsafeMergeTarget(_)) => {
            eprintln!("{} {refusal}", "note:".yellow().bold());
            0
        }
        Some(usage @ CommandError::MissingArgument { .. }) => {
            eprintln!("{} {usage}", "error:".red().bold());
            2
        }
        None => {
            eprintln!("{} {err:#}", "error:".red().bold());
            1
        }
    }
}
