use crate::cursor::ArgCursor;
use clap::Parser;

/// Command-line arguments for the argcursor binary
///
/// Only the binary's own flags are handled by clap; everything after the
/// first command word is kept raw and scanned with `ArgCursor`.
#[derive(Parser, Debug, Clone)]
#[command(name = "argcursor")]
#[command(about = "Dispatch a chain of commands from a flat argument list")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Token separating consecutive commands
    #[arg(
        long,
        value_name = "SEP",
        default_value = ";",
        env = "ARGCURSOR_SEPARATOR"
    )]
    pub separator: String,

    /// Commands to run: echo, sum, repeat, head
    #[arg(
        value_name = "COMMAND LINE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command_line: Vec<String>,
}

impl Args {
    /// Cursor over the raw command line, named after the binary
    #[must_use]
    pub fn cursor(&self) -> ArgCursor {
        let mut cursor: ArgCursor = self.command_line.iter().cloned().collect();
        cursor.set_name("argcursor");
        cursor
    }
}
