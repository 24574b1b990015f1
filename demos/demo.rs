//! Month parsing demo showing both channels of an outcome.
//!
//! Run with: cargo run --example demo

use outcome::{attempt, from_optional, ok, Outcome};
use thiserror::Error;

// ============================================================================
// Error and domain types
// ============================================================================

#[derive(Debug, Clone, Error, PartialEq)]
enum MonthError {
    #[error("Input: \"{0}\" can not be read as an Int")]
    NotAnInt(String),
    #[error("Number: {0} is not with-in 0 to 12 month range")]
    OutOfRange(i64),
    #[error("Input \"{0}\" is not a valid month name")]
    UnknownName(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Month(u8);

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

/// Step 1: read an integer
fn read_int(input: &str) -> Outcome<MonthError, i64> {
    from_optional(
        MonthError::NotAnInt(input.to_string()),
        input.trim().parse().ok(),
    )
}

/// Step 2: check the month range
fn to_valid_month(n: i64) -> Outcome<MonthError, Month> {
    match u8::try_from(n) {
        Ok(month @ 1..=12) => ok(Month(month)),
        _ => Outcome::Failure(MonthError::OutOfRange(n)),
    }
}

fn parse_month(input: &str) -> Outcome<MonthError, Month> {
    read_int(input).chain(to_valid_month)
}

/// Fallback: read an English month name
fn read_month_by_name(input: &str) -> Outcome<MonthError, Month> {
    let name = input.to_lowercase();
    let found = MONTH_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| Month(index as u8 + 1));

    from_optional(MonthError::UnknownName(input.to_string()), found)
}

fn read_month(input: &str) -> Outcome<String, Month> {
    parse_month(input).capture(|int_error| {
        read_month_by_name(input).format(|name_error| format!("{int_error} & {name_error}"))
    })
}

/// Both ends of a range, written with `attempt!` instead of `chain`.
fn read_range(start: &str, end: &str) -> Outcome<String, (Month, Month)> {
    let start = attempt!(read_month(start));
    let end = attempt!(read_month(end));
    if start.0 > end.0 {
        return Outcome::Failure(format!("Range {} to {} runs backwards", start.0, end.0));
    }
    ok((start, end))
}

fn report<E: std::fmt::Display, A: std::fmt::Debug>(label: &str, outcome: &Outcome<E, A>) {
    match outcome {
        Outcome::Success(value) => println!("  ✓ {label:<12} {value:?}"),
        Outcome::Failure(error) => println!("  ✗ {label:<12} {error}"),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

fn run_numbers() {
    println!("┌──────────────────────────────────────────────────────────────┐");
    println!("│ Scenario 1: Numbers - map and chain on the success channel   │");
    println!("└──────────────────────────────────────────────────────────────┘\n");

    for input in ["4", "13", "abc"] {
        report(input, &parse_month(input));
    }

    let next = parse_month("4").map(|Month(m)| Month(m % 12 + 1));
    report("after 4", &next);
    println!();
}

fn run_names() {
    println!("┌──────────────────────────────────────────────────────────────┐");
    println!("│ Scenario 2: Names - capture and format on the failure channel│");
    println!("└──────────────────────────────────────────────────────────────┘\n");

    for input in ["3", "June", "17", "Jude"] {
        report(input, &read_month(input));
    }
    println!();
}

fn run_fallbacks() {
    println!("┌──────────────────────────────────────────────────────────────┐");
    println!("│ Scenario 3: Fallbacks - or, recover, and extraction          │");
    println!("└──────────────────────────────────────────────────────────────┘\n");

    let default_month: Outcome<String, Month> = ok(Month(1));
    report("or", &read_month("Smarch").or(default_month));

    let recovered = parse_month("0").recover(|_| Month(12));
    report("recover", &recovered);

    println!("  value        {}", read_int("abc").to_value(0));
    println!("  optional     {:?}", read_int("42").to_optional());
    println!();
}

fn run_ranges() {
    println!("┌──────────────────────────────────────────────────────────────┐");
    println!("│ Scenario 4: Ranges - attempt! and and                        │");
    println!("└──────────────────────────────────────────────────────────────┘\n");

    report("mar-jun", &read_range("March", "6"));
    report("jun-mar", &read_range("June", "3"));
    report("mar-???", &read_range("3", "Jude"));

    let both = read_month("5").and(read_month("October"));
    report("and", &both);
    println!();
}

fn main() {
    run_numbers();
    run_names();
    run_fallbacks();
    run_ranges();
}
