//! mfd CLI - single-host deployment lifecycle manager
//!
//! Usage: mfd <COMMAND>
//!
//! Commands:
//!   list      List available deployments
//!   deploy    Resolve, fetch, build, and activate a revision
//!   rollback  Activate the previous deployment
//!   clean     Remove old deployments

mod commands;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mfd::presentation::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(err),
    };
    init_logging(cli.verbose);

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Errors go to stdout; stderr carries logs and child output.
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Help and version exit 0; every usage error exits 1, on stdout like any other error
fn usage_exit(err: clap::Error) -> ExitCode {
    print!("{}", err.render());
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
