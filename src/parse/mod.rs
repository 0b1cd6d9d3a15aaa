//! Typed extraction of argument values
//!
//! `ArgCursor::extract` consumes one token and converts it through the
//! target type's `ParseToken` implementation. Malformed content is never an
//! error: it is reported to the cursor's log sink and the caller decides what
//! to do next. Only a missing token is returned as `CursorError`.

use crate::cursor::ArgCursor;
use crate::error::{CursorError, ParseError};
use tracing::debug;

pub mod number;
pub mod range;

pub use range::{RangeParse, RangeValue};

/// Conversion from the start of a token to a typed value
///
/// Implementations parse the longest valid prefix of `text` and return the
/// value along with the number of bytes it used. Anything after that is
/// reported by the caller as an unparsed suffix.
///
/// Numeric types follow stream-extraction rules (see `number`). Types
/// registered with `whole_token!`, `String` included, convert the entire
/// token instead: `"hello world"` is one clean `String` rather than the word
/// `hello` followed by an unparsed `" world"`, and an empty token is a valid
/// empty `String` rather than a failure.
pub trait ParseToken: Sized {
    /// Parse a value from the start of `text`
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if no value can be read from the start of `text`
    fn parse_prefix(text: &str) -> Result<(Self, usize), ParseError>;
}

/// Outcome of a typed extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The whole token was converted
    Clean,
    /// A prefix was converted and assigned; the rest was reported
    Partial,
    /// Nothing could be converted; the target was left alone
    Failed,
}

impl Extraction {
    /// Whether the target received a new value
    #[must_use]
    #[inline]
    pub const fn is_assigned(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Implement `ParseToken` for types whose `FromStr` takes the whole token
///
/// Conversion either consumes the full token or fails; it never reports an
/// unparsed suffix.
///
/// ```
/// use argcursor::{ArgCursor, whole_token};
/// use std::str::FromStr;
///
/// #[derive(Debug, PartialEq)]
/// struct Level(u8);
///
/// impl FromStr for Level {
///     type Err = ();
///     fn from_str(text: &str) -> Result<Self, ()> {
///         text.strip_prefix('L').and_then(|n| n.parse().ok()).map(Level).ok_or(())
///     }
/// }
///
/// whole_token!(Level);
///
/// let mut args = ArgCursor::new(["prog", "L3"]);
/// assert_eq!(args.parse::<Level>().unwrap(), Some(Level(3)));
/// ```
#[macro_export]
macro_rules! whole_token {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::parse::ParseToken for $ty {
                fn parse_prefix(
                    text: &str,
                ) -> ::core::result::Result<(Self, usize), $crate::error::ParseError> {
                    text.parse::<$ty>()
                        .map(|value| (value, text.len()))
                        .map_err(|_| $crate::error::ParseError::invalid(text))
                }
            }
        )*
    };
}

crate::whole_token!(
    String,
    bool,
    char,
    std::path::PathBuf,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
);

impl ArgCursor {
    /// Consume the next token and convert it into `target`
    ///
    /// - Clean conversion: `target` is assigned, nothing is logged.
    /// - Trailing text: `target` gets the parsed prefix and a warning naming
    ///   the unparsed bit is logged.
    /// - No value at all: `target` is untouched and an error is logged.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if no token is left
    pub fn extract<T: ParseToken>(&mut self, target: &mut T) -> Result<Extraction, CursorError> {
        let (value, outcome) = self.convert_next::<T>()?;
        if let Some(value) = value {
            *target = value;
        }
        Ok(outcome)
    }

    /// Consume the next token and convert it, returning `None` on failure
    ///
    /// Diagnostics are logged exactly as in `extract`.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if no token is left
    pub fn parse<T: ParseToken>(&mut self) -> Result<Option<T>, CursorError> {
        let (value, _) = self.convert_next::<T>()?;
        Ok(value)
    }

    fn convert_next<T: ParseToken>(&mut self) -> Result<(Option<T>, Extraction), CursorError> {
        let token = self.consume()?;

        match T::parse_prefix(&token) {
            Err(err) => {
                debug!(token = %token, error = %err, "token could not be converted");
                self.log()
                    .line(format_args!("Error: could not parse {token}."));
                Ok((None, Extraction::Failed))
            }
            Ok((value, used)) if used < token.len() => {
                let unparsed = token.get(used..).unwrap_or_default();
                self.log().line(format_args!(
                    "Warning: partially parsed string\nUnparsed bit: '{unparsed}'"
                ));
                Ok((Some(value), Extraction::Partial))
            }
            Ok((value, _)) => Ok((Some(value), Extraction::Clean)),
        }
    }
}
