//! Tests for the outcome algebra.
//!
//! ## Test Organization
//!
//! - `common`: Shared error types, the `Month` type, and month parsers
//! - `success`: Every combinator applied to a `Success` (method form)
//! - `failure`: Every combinator applied to a `Failure` (method form)
//! - `free_functions`: The same cases through the free functions
//! - `laws`: Functor, monad, and channel-independence laws
//! - `walkthrough`: Month parsing built from the combinators
//! - `attempt`: The `attempt!` macro
//! - `serialization`: Serialized representation (`serde` feature only)
//!
//! ## Test Domain
//!
//! The walkthrough and macro tests parse calendar months:
//! - `read_int`: Reads an integer, failing with the offending input
//! - `to_valid_month`: Accepts 1 through 12
//! - `read_month_by_name`: Reads an English month name
//! - `read_month`: Tries the number first, then the name

mod common;
