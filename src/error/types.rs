//! Error types for cursor, parse and dispatch failures

use thiserror::Error;

/// Structural error raised by cursor operations
///
/// Returned whenever a caller asks for a token position that does not exist.
/// A failing operation never changes the cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CursorError {
    /// The requested position lies outside the argument vector
    #[error("{message}")]
    OutOfRange { message: String },
}

impl CursorError {
    /// Create an out-of-range error
    #[inline]
    pub fn out_of_range<S: Into<String>>(message: S) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Message carried by the error
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::OutOfRange { message } => message,
        }
    }
}

/// Content error produced while converting a token to a typed value
///
/// These never leave `ArgCursor::extract`; they are reported to the log sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Nothing but whitespace was found
    #[error("empty input")]
    Empty,

    /// The text does not start with a valid value
    #[error("invalid value: {text}")]
    Invalid { text: String },

    /// The value does not fit the target type
    #[error("value out of bounds for target type: {text}")]
    Overflow { text: String },
}

impl ParseError {
    /// Create an invalid-value error
    #[inline]
    pub fn invalid<S: Into<String>>(text: S) -> Self {
        Self::Invalid { text: text.into() }
    }

    /// Create an overflow error
    #[inline]
    pub fn overflow<S: Into<String>>(text: S) -> Self {
        Self::Overflow { text: text.into() }
    }
}

/// Errors raised by the command dispatcher
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CliError {
    /// The command line ran out of arguments
    #[error("Usage error: {0}")]
    Cursor(#[from] CursorError),

    /// No handler is registered for the command name
    #[error("Unknown command: '{name}'")]
    UnknownCommand { name: String },

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Cursor(_) => 2,
            Self::UnknownCommand { .. } => 3,
            Self::Output(_) => 4,
        }
    }

    /// Create an unknown-command error
    #[inline]
    pub fn unknown_command<S: Into<String>>(name: S) -> Self {
        Self::UnknownCommand { name: name.into() }
    }
}
