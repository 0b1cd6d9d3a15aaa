//! Prefix scanning for numeric tokens
//!
//! Numbers are read the way stream extraction reads them: leading whitespace
//! is skipped, the longest valid number is taken, and whatever follows is
//! left for the caller to report.

use super::ParseToken;
use crate::error::ParseError;

/// Byte offset of the first non-whitespace character
fn skip_whitespace(text: &str) -> usize {
    text.len() - text.trim_start_matches(|c: char| c.is_ascii_whitespace()).len()
}

/// Length of the run of ASCII digits at the start of `bytes`
fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Locate an integer literal: optional sign followed by decimal digits
///
/// Returns the byte span `(start, end)` of the literal.
fn scan_integer(text: &str, signed: bool) -> Result<(usize, usize), ParseError> {
    let bytes = text.as_bytes();
    let start = skip_whitespace(text);
    if start == bytes.len() {
        return Err(ParseError::Empty);
    }

    let mut end = start;
    match bytes[end] {
        b'+' => end += 1,
        b'-' if signed => end += 1,
        _ => {}
    }

    let count = digits(&bytes[end..]);
    if count == 0 {
        return Err(ParseError::invalid(text));
    }

    Ok((start, end + count))
}

/// Locate a floating-point literal
///
/// Accepts `[sign] digits [. digits] [(e|E) [sign] digits]` with at least one
/// mantissa digit, as well as `inf`, `infinity` and `nan` in any case. An
/// exponent marker is only taken when digits follow it.
fn scan_float(text: &str) -> Result<(usize, usize), ParseError> {
    let bytes = text.as_bytes();
    let start = skip_whitespace(text);
    if start == bytes.len() {
        return Err(ParseError::Empty);
    }

    let mut end = start;
    if matches!(bytes[end], b'+' | b'-') {
        end += 1;
    }

    let rest = &bytes[end..];
    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return Ok((start, end + word.len()));
        }
    }

    let whole = digits(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(&bytes[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }

    if whole == 0 && fraction == 0 {
        return Err(ParseError::invalid(text));
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let count = digits(&bytes[exponent..]);
        if count > 0 {
            end = exponent + count;
        }
    }

    Ok((start, end))
}

macro_rules! integer_token {
    ($signed:expr => $($ty:ty),*) => {
        $(
            impl ParseToken for $ty {
                fn parse_prefix(text: &str) -> Result<(Self, usize), ParseError> {
                    let (start, end) = scan_integer(text, $signed)?;
                    let literal = &text[start..end];
                    let value = literal
                        .parse::<$ty>()
                        .map_err(|_| ParseError::overflow(literal))?;
                    Ok((value, end))
                }
            }
        )*
    };
}

integer_token!(true => i8, i16, i32, i64, i128, isize);
integer_token!(false => u8, u16, u32, u64, u128, usize);

macro_rules! float_token {
    ($($ty:ty),*) => {
        $(
            impl ParseToken for $ty {
                fn parse_prefix(text: &str) -> Result<(Self, usize), ParseError> {
                    let (start, end) = scan_float(text)?;
                    let literal = &text[start..end];
                    let value = literal
                        .parse::<$ty>()
                        .map_err(|_| ParseError::invalid(literal))?;
                    Ok((value, end))
                }
            }
        )*
    };
}

float_token!(f32, f64);
