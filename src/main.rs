//! Transit - explore a weighted transportation network
//!
//! Builds the network, then reports its summary figures, depth-first and
//! breadth-first visit orders, and Dijkstra shortest paths.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use transit_core::error::{ExitCode as TransitExitCode, TransitError};
use transit_core::format::OutputFormat;
use transit_core::logging::{self, LogSettings};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return exit_on_parse_error(err),
    };

    let settings = LogSettings::from_flags(cli.verbose, cli.log_level.as_deref(), cli.log_json);
    if let Err(e) = logging::init_tracing(&settings) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(TransitExitCode::Success as u8),
        Err(e) => report_failure(&cli, &e),
    }
}

/// Clap errors are printed by clap itself unless JSON output was requested,
/// in which case they become a usage-error envelope on stderr.
fn exit_on_parse_error(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !requests_json(std::env::args().skip(1))
    {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => TransitError::UsageError(err.to_string()),
        _ => TransitError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn report_failure(cli: &Cli, error: &TransitError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Whether raw arguments ask for `--format json`, checked before clap succeeds
fn requests_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
