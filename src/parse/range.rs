//! Range-checked numeric extraction
//!
//! `RangeParse` binds a numeric range to a cursor for a single extraction.
//! Values outside the range are still assigned; the violation is only
//! reported to the cursor's log sink.

use super::{Extraction, ParseToken};
use crate::cursor::ArgCursor;
use crate::error::CursorError;
use std::fmt;

/// Numeric value that can be compared against `f64` bounds
pub trait RangeValue: Copy + fmt::Display {
    /// Value widened to `f64` for comparison
    fn to_f64(self) -> f64;

    /// Bound converted to this type for display
    fn from_f64(value: f64) -> Self;
}

macro_rules! range_value {
    ($($ty:ty),*) => {
        $(
            impl RangeValue for $ty {
                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_precision_loss,
                    clippy::unnecessary_cast
                )]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

range_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Range constraint bound to a cursor for the next extraction
///
/// The range is `[min, max]`, or `[min, ∞)` when `min == max`.
///
/// # Example
/// ```
/// use argcursor::{ArgCursor, sink::MemoryLog};
///
/// let log = MemoryLog::new();
/// let mut args = ArgCursor::new(["prog", "--jobs", "20"]);
/// args.set_log(log.sink());
///
/// let mut jobs = 1_u32;
/// if args.consume().unwrap() == "--jobs" {
///     args.range_between(2.0, 14.0).extract(&mut jobs).unwrap();
/// }
///
/// assert_eq!(jobs, 20);
/// assert_eq!(log.contents(), "Error: argument to --jobs must be smaller than 14.\n");
/// ```
#[derive(Debug)]
#[must_use = "a range does nothing until a value is extracted through it"]
pub struct RangeParse<'a> {
    cursor: &'a mut ArgCursor,
    min: f64,
    max: f64,
}

impl<'a> RangeParse<'a> {
    /// Bind `[min, max]` to `cursor`; `min == max` leaves the top open
    pub fn new(cursor: &'a mut ArgCursor, min: f64, max: f64) -> Self {
        Self { cursor, min, max }
    }

    /// Lower bound
    #[must_use]
    #[inline]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound; equal to `min` for an open range
    #[must_use]
    #[inline]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether the range has no upper bound
    #[must_use]
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_open(&self) -> bool {
        self.min == self.max
    }

    /// Extract the next token into `target`, then check it against the range
    ///
    /// Content diagnostics are the same as `ArgCursor::extract`. The range is
    /// checked against whatever `target` holds afterwards, so a default left
    /// in place by a failed parse is reported too.
    ///
    /// # Errors
    ///
    /// Returns `CursorError::OutOfRange` if no token is left
    pub fn extract<T>(self, target: &mut T) -> Result<Extraction, CursorError>
    where
        T: ParseToken + RangeValue,
    {
        let prefix = self.message_prefix();
        let outcome = self.cursor.extract(target)?;

        let value = target.to_f64();
        if value < self.min {
            self.cursor.log().line(format_args!(
                "{prefix} must be greater than {}.",
                T::from_f64(self.min)
            ));
        }
        if !self.is_open() && value > self.max {
            self.cursor.log().line(format_args!(
                "{prefix} must be smaller than {}.",
                T::from_f64(self.max)
            ));
        }

        Ok(outcome)
    }

    /// Name the value after the token before it, when there is one
    ///
    /// Best effort: any consumed token is taken to be the flag the value
    /// belongs to.
    fn message_prefix(&self) -> String {
        if self.cursor.remaining_count() < self.cursor.total_count() {
            if let Ok(previous) = self.cursor.peek_at(-1) {
                return format!("Error: argument to {previous}");
            }
        }
        "Error: number".to_owned()
    }
}

impl ArgCursor {
    /// Range `[min, ∞)` for the next extraction
    pub fn range(&mut self, min: f64) -> RangeParse<'_> {
        RangeParse::new(self, min, min)
    }

    /// Range `[min, max]` for the next extraction
    pub fn range_between(&mut self, min: f64, max: f64) -> RangeParse<'_> {
        RangeParse::new(self, min, max)
    }
}
