//! Carving sub-cursors out of an argument vector
//!
//! A slice copies a contiguous run of tokens, starting at the read position,
//! into a new cursor and moves the parent past them. The child shares the
//! parent's log sink and nothing else.

use super::ArgCursor;
use crate::error::CursorError;

const NOT_ENOUGH_FOR_SLICE: &str = "Not enough arguments to form subarg.";

impl ArgCursor {
    /// Take the next `size` tokens as a new, nameless cursor
    ///
    /// Exactly `size` remaining tokens is enough.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if fewer than `size` tokens remain;
    /// the cursor does not move in that case
    pub fn slice(&mut self, size: usize) -> Result<Self, CursorError> {
        if size > self.remaining_count() {
            return Err(CursorError::out_of_range(NOT_ENOUGH_FOR_SLICE));
        }

        let end = self.position + size;
        let child = self.child(self.tokens[self.position..end].to_vec(), String::new());
        self.position = end;
        Ok(child)
    }

    /// Take tokens up to, not including, the first one matching `predicate`
    ///
    /// When no token matches, every remaining token is taken. The matching
    /// token stays in this cursor as the next one to read.
    pub fn slice_until<P>(&mut self, mut predicate: P) -> Self
    where
        P: FnMut(&str) -> bool,
    {
        let rest = self.remaining();
        let size = rest
            .iter()
            .position(|token| predicate(token.as_str()))
            .unwrap_or(rest.len());

        let end = self.position + size;
        let child = self.child(self.tokens[self.position..end].to_vec(), String::new());
        self.position = end;
        child
    }

    /// Consume the next token as a name, then take `size` tokens after it
    ///
    /// Moves this cursor by `size + 1`.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if there is no name token or fewer
    /// than `size` tokens follow it; the cursor does not move in that case
    pub fn subcommand(&mut self, size: usize) -> Result<Self, CursorError> {
        let start = self.position;
        let name = self.consume()?;

        match self.slice(size) {
            Ok(mut child) => {
                child.name = name;
                Ok(child)
            }
            Err(err) => {
                self.position = start;
                Err(err)
            }
        }
    }

    /// Consume the next token as a name, then `slice_until` the predicate
    ///
    /// The name token is never tested against `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if there is no name token
    pub fn subcommand_until<P>(&mut self, predicate: P) -> Result<Self, CursorError>
    where
        P: FnMut(&str) -> bool,
    {
        let name = self.consume()?;
        let mut child = self.slice_until(predicate);
        child.name = name;
        Ok(child)
    }
}
