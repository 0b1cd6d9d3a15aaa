//! # argcursor
//!
//! Demonstration binary for the `argcursor` library: it takes a flat
//! argument list, splits it into commands on a separator token and runs
//! each command against its own slice of the arguments.
//!
//! ## Usage
//!
//! ```sh
//! argcursor echo hello world ";" sum 1 2 3 ";" repeat --times 2 hi
//! argcursor --separator , head 2 a b c , echo done
//! ```
//!
//! Malformed values (`sum 1 x`) are reported on stderr without stopping the
//! run. Missing arguments (`head 5 a`) stop it with exit code 2.

use anyhow::Result;
use argcursor::cli::Args;
use argcursor::error::CliError;
use clap::Parser as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match argcursor::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<CliError>()
                    .map_or(1, CliError::exit_code),
            );
        }
    }
}
