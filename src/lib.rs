//! `ArgCursor` - a forward-scanning cursor over command-line arguments
//!
//! This library wraps a raw argument vector in a stateful cursor that can
//! peek, consume and slice tokens into nested sub-commands, and extract typed
//! values with optional numeric range checks. Missing arguments are returned
//! as `CursorError`; malformed values are reported to an injectable log sink.

pub mod cli;
pub mod cursor;
pub mod error;
pub mod parse;
pub mod sink;

pub use cursor::ArgCursor;
pub use error::{CliError, CursorError, ParseError};
pub use parse::{Extraction, ParseToken, RangeParse, RangeValue};
pub use sink::{LogSink, MemoryLog};

use anyhow::Result;
use cli::Args;
use std::io;
use tracing::debug;

/// Main entry point for the argcursor binary
///
/// Dispatches the command chain in `args` with output on stdout and argument
/// diagnostics on stderr.
pub fn run(args: &Args) -> Result<()> {
    let mut cursor = args.cursor();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let executed = cli::dispatch(&mut cursor, &args.separator, &mut out)?;
    debug!(executed, "Command line finished");

    Ok(())
}
