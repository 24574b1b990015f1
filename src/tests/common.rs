//! Common types and helper functions for tests.
//!
//! This module contains:
//! - `Boom`: A message-carrying error used as a payload in channel tests
//! - `MonthError`: Error types for month parsing
//! - `Month`: A validated calendar month
//! - Parsers built from the combinators: `read_int`, `parse_month`,
//!   `read_month_by_name`, `read_month`

use crate::{from_optional, ok, Outcome};

// ============================================================================
// Error Types
// ============================================================================

/// An error value that carries a message, used as an ordinary payload.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{message}")]
pub struct Boom {
    /// The message this error was created with.
    pub message: String,
}

impl Boom {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Errors that can occur while reading a month.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum MonthError {
    /// The input is not an integer.
    #[error("Input: \"{0}\" can not be read as an Int")]
    NotAnInt(String),

    /// The integer is not a month number.
    #[error("Number: {0} is not with-in 0 to 12 month range")]
    OutOfRange(i64),

    /// The input is not the English name of a month.
    #[error("Input \"{0}\" is not a valid month name")]
    UnknownName(String),
}

// ============================================================================
// Month Type
// ============================================================================

/// A calendar month, 1 through 12.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Month(pub u8);

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

// ============================================================================
// Parsers
// ============================================================================

/// Read a decimal integer.
pub fn read_int(input: &str) -> Outcome<MonthError, i64> {
    from_optional(
        MonthError::NotAnInt(input.to_string()),
        input.trim().parse().ok(),
    )
}

/// Accept only integers in the month range.
pub fn to_valid_month(n: i64) -> Outcome<MonthError, Month> {
    match u8::try_from(n) {
        Ok(month @ 1..=12) => ok(Month(month)),
        _ => Outcome::Failure(MonthError::OutOfRange(n)),
    }
}

/// Read a month number, method form.
pub fn parse_month(input: &str) -> Outcome<MonthError, Month> {
    read_int(input).chain(to_valid_month)
}

fn from_month_name(name: &str) -> Option<Month> {
    let name = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| Month(index as u8 + 1))
}

/// Read an English month name, case-insensitively.
pub fn read_month_by_name(input: &str) -> Outcome<MonthError, Month> {
    from_optional(
        MonthError::UnknownName(input.to_string()),
        from_month_name(input),
    )
}

/// Read a month as a number or, failing that, as a name.
///
/// When both readings fail, the two messages are joined with ` & `.
pub fn read_month(input: &str) -> Outcome<String, Month> {
    parse_month(input).capture(|int_error| {
        read_month_by_name(input).format(|name_error| format!("{int_error} & {name_error}"))
    })
}
