//! Forward-scanning cursor over an argument vector
//!
//! `ArgCursor` owns a list of tokens, a read position and a name label.
//! Every operation checks its bounds before touching any state, so a call
//! that fails leaves the cursor exactly as it was. Dispatch code can probe
//! for an argument and fall back to another path without repairing anything.

use crate::error::CursorError;
use crate::sink::LogSink;

mod slice;

const NOTHING_TO_PEEK: &str = "No argument left to peek.";
const TOO_SHORT: &str = "Argument vector too short.";
const NEGATIVE_INDEX: &str = "The index must not become negative.";
const NOTHING_TO_SHIFT: &str = "No arguments left to shift.";

/// Command-line argument vector with a read position
///
/// # Example
/// ```
/// use argcursor::ArgCursor;
///
/// let mut args = ArgCursor::new(["git", "remote", "add", "origin", "url"]);
/// assert_eq!(args.name(), "git");
///
/// let mut remote = args.subcommand(3).unwrap();
/// assert_eq!(remote.name(), "remote");
/// assert_eq!(remote.consume().unwrap(), "add");
/// assert_eq!(args.remaining_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgCursor {
    tokens: Vec<String>,
    name: String,
    position: usize,
    log: LogSink,
}

impl ArgCursor {
    /// Wrap an external argument list
    ///
    /// The first item becomes the name (like a program path) and the rest
    /// become the tokens. Diagnostics go to standard error.
    #[must_use]
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let name = args.next().unwrap_or_default();
        Self {
            tokens: args.collect(),
            name,
            position: 0,
            log: LogSink::stderr(),
        }
    }

    /// Wrap the arguments of the current process
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    /// Cursor with no name and no tokens, to be filled with `push_back`
    #[must_use]
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Child cursor sharing this cursor's log sink
    fn child(&self, tokens: Vec<String>, name: String) -> Self {
        Self {
            tokens,
            name,
            position: 0,
            log: self.log.clone(),
        }
    }

    /// Number of tokens not yet consumed
    #[must_use]
    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// Number of tokens held, consumed or not
    #[must_use]
    #[inline]
    pub fn total_count(&self) -> usize {
        self.tokens.len()
    }

    /// Index of the next token
    #[must_use]
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether every token has been consumed
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Tokens not yet consumed
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        &self.tokens[self.position..]
    }

    /// Every token, consumed or not
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Look at the next token without consuming it
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if no token is left
    pub fn peek(&self) -> Result<&str, CursorError> {
        self.tokens
            .get(self.position)
            .map(String::as_str)
            .ok_or_else(|| CursorError::out_of_range(NOTHING_TO_PEEK))
    }

    /// Look at the token `offset` places away from the next one
    ///
    /// An offset of zero behaves like `peek`; negative offsets look back at
    /// consumed tokens.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if the resulting index is negative
    /// or past the end of the vector
    pub fn peek_at(&self, offset: isize) -> Result<&str, CursorError> {
        let index = match self.position.checked_add_signed(offset) {
            Some(index) => index,
            None if offset < 0 => return Err(CursorError::out_of_range(NEGATIVE_INDEX)),
            None => return Err(CursorError::out_of_range(TOO_SHORT)),
        };

        self.tokens
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CursorError::out_of_range(TOO_SHORT))
    }

    /// Move past the next token
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if no token is left
    pub fn advance(&mut self) -> Result<(), CursorError> {
        if self.is_empty() {
            return Err(CursorError::out_of_range(NOTHING_TO_SHIFT));
        }

        self.position += 1;
        Ok(())
    }

    /// Take the next token and move past it
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if no token is left; the cursor
    /// does not move in that case
    pub fn consume(&mut self) -> Result<String, CursorError> {
        let token = self.peek()?.to_owned();
        self.position += 1;
        Ok(token)
    }

    /// Append a token at the end of the vector
    pub fn push_back<S: Into<String>>(&mut self, token: S) {
        self.tokens.push(token.into());
    }

    /// Destination of content diagnostics
    #[must_use]
    #[inline]
    pub const fn log(&self) -> &LogSink {
        &self.log
    }

    /// Redirect content diagnostics
    pub fn set_log(&mut self, log: LogSink) {
        self.log = log;
    }

    /// Name label, usually the program or sub-command name
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name label
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }
}

impl Iterator for ArgCursor {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.consume().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_count();
        (remaining, Some(remaining))
    }
}

impl FromIterator<String> for ArgCursor {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}
