//! Command-line input: tokenization, strict integer parsing and validation.
//!
//! A single argument is split on spaces; several arguments are one token each.
//! A token is an optional sign followed by ASCII digits and must fit in `i32`.

use std::collections::HashSet;
use std::num::IntErrorKind;

use thiserror::Error;

/// Reasons an input is rejected. The binaries report all of them as `Error`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing to sort.
    #[error("no values given")]
    Empty,
    /// More values than the configured capacity.
    #[error("too many values: {len} > {max}")]
    TooMany { len: usize, max: usize },
    /// Token is not a signed decimal integer.
    #[error("not an integer: {0:?}")]
    NotInteger(String),
    /// Token is an integer outside the 32-bit range.
    #[error("out of 32-bit range: {0}")]
    OutOfRange(String),
    /// Same value given twice.
    #[error("duplicate value: {0}")]
    Duplicate(i32),
}

/// Split raw arguments into value tokens.
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> Vec<&str> {
    match args {
        [single] => single
            .as_ref()
            .split(' ')
            .filter(|t| !t.is_empty())
            .collect(),
        many => many.iter().map(|s| s.as_ref()).collect(),
    }
}

/// Parse one token strictly: `[+-]?[0-9]+`, within `i32`.
pub fn parse_value(token: &str) -> Result<i32, InputError> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotInteger(token.to_owned()));
    }
    token.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::OutOfRange(token.to_owned())
        }
        _ => InputError::NotInteger(token.to_owned()),
    })
}

/// Tokenize, parse and validate command-line values.
///
/// Already ascending input is accepted here; callers decide whether to skip it
/// (see [`is_ascending`]).
pub fn parse_args<S: AsRef<str>>(args: &[S], max_len: usize) -> Result<Vec<i32>, InputError> {
    let tokens = tokenize(args);
    if tokens.is_empty() {
        return Err(InputError::Empty);
    }
    if tokens.len() > max_len {
        return Err(InputError::TooMany {
            len: tokens.len(),
            max: max_len,
        });
    }
    let values = tokens
        .into_iter()
        .map(parse_value)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::with_capacity(values.len());
    if let Some(&dup) = values.iter().find(|&&v| !seen.insert(v)) {
        return Err(InputError::Duplicate(dup));
    }
    Ok(values)
}

/// Strictly ascending (true for zero or one value).
pub fn is_ascending(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
