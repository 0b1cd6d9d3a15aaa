//! Command dispatch over an argument cursor
//!
//! The command line is a chain of commands split by a separator token:
//!
//! ```text
//! argcursor echo hello world ; sum 1 2.5 ; repeat --times 2 hi ; head 1 a b
//! ```
//!
//! Each command is carved out with `subcommand_until` and only sees its own
//! slice, named after the command word.

use crate::cursor::ArgCursor;
use crate::error::CliError;
use std::io::Write;
use tracing::debug;

/// Run every command on the cursor, returning how many were executed
///
/// Stray separators (leading, trailing or doubled) are skipped.
///
/// # Errors
///
/// Returns the first `CliError` raised by a command; commands before it have
/// already written their output
pub fn dispatch(
    cursor: &mut ArgCursor,
    separator: &str,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let mut executed = 0;

    while !cursor.is_empty() {
        if cursor.peek()? == separator {
            cursor.advance()?;
            continue;
        }

        let command = cursor.subcommand_until(|token| token == separator)?;
        debug!(
            command = command.name(),
            arguments = command.remaining_count(),
            "Dispatching command"
        );
        execute(command, out)?;
        executed += 1;
    }

    Ok(executed)
}

/// Execute a single command against its own argument slice
fn execute(command: ArgCursor, out: &mut dyn Write) -> Result<(), CliError> {
    let name = command.name().to_owned();
    match name.as_str() {
        "echo" => echo(command, out),
        "sum" => sum(command, out),
        "repeat" => repeat(command, out),
        "head" => head(command, out),
        _ => Err(CliError::unknown_command(name)),
    }
}

/// `echo WORDS...`
fn echo(command: ArgCursor, out: &mut dyn Write) -> Result<(), CliError> {
    let words: Vec<String> = command.collect();
    writeln!(out, "{}", words.join(" "))?;
    Ok(())
}

/// `sum NUMBERS...`; tokens that are not numbers are reported and skipped
fn sum(mut command: ArgCursor, out: &mut dyn Write) -> Result<(), CliError> {
    let mut total = 0.0_f64;
    while !command.is_empty() {
        let mut value = 0.0_f64;
        if command.extract(&mut value)?.is_assigned() {
            total += value;
        }
    }
    writeln!(out, "{total}")?;
    Ok(())
}

const MAX_REPEAT: u32 = 100;

/// `repeat [--times N] WORD`, with N expected in `[1, 100]`
///
/// A count above the range is reported and then capped.
fn repeat(mut command: ArgCursor, out: &mut dyn Write) -> Result<(), CliError> {
    let mut times = 1_u32;
    while command.peek()? == "--times" {
        command.advance()?;
        command
            .range_between(1.0, f64::from(MAX_REPEAT))
            .extract(&mut times)?;
    }
    let times = times.min(MAX_REPEAT);

    let word = command.consume()?;
    for _ in 0..times {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// `head N ITEMS...`; prints the first N items
fn head(mut command: ArgCursor, out: &mut dyn Write) -> Result<(), CliError> {
    let mut count = 0_usize;
    command.range(0.0).extract(&mut count)?;

    for item in command.slice(count)? {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
