#![deny(missing_docs)]

//! Outcome: typed success-or-failure values with a small, lawful algebra.
//!
//! # Design Goals
//!
//! Outcome is focused on **failure as a value**:
//!
//! - **Closed sum type**: `Success` and `Failure` are the only shapes, matched exhaustively
//! - **Total combinators**: No operation panics; failures flow until explicitly handled
//! - **Two symmetric channels**: Every success-side combinator has a failure-side twin
//!
//! # Core Concepts
//!
//! - [`Outcome`]: The two-variant value, error type first
//! - Combinators: `map`/`chain` on the success channel, `format`/`capture`/`recover`
//!   on the failure channel, eager `and`/`or` choice, and `to_value`/`to_optional`
//!   extraction
//! - [`functions`]: The same combinators as free functions taking the outcome last
//!
//! ```
//! use outcome::{from_optional, Outcome};
//!
//! fn read_int(input: &str) -> Outcome<String, i64> {
//!     from_optional(
//!         format!("Input: \"{input}\" can not be read as an Int"),
//!         input.parse().ok(),
//!     )
//! }
//!
//! assert_eq!(read_int("123").to_value(0), 123);
//! assert_eq!(read_int("abc").to_value(0), 0);
//! ```
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Outcome`]
//! - `tracing`: emit trace events where the failure channel is handled

// Modules
pub mod functions;
mod macros;
pub mod outcome;

// Re-exports for convenience
pub use functions::{
    and, capture, chain, error, format, from_optional, map, ok, or, recover, to_optional,
    to_value,
};
pub use outcome::Outcome;

#[cfg(test)]
mod tests;
