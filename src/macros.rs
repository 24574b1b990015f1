//! Macros for writing outcome pipelines as straight-line code.
//!
//! - `attempt!`: Unwrap a `Success` or return its `Failure` from the enclosing function

/// Unwrap the value of a `Success`, or return the `Failure` early.
///
/// The enclosing function must return an `Outcome`. The error is passed
/// through `From::from`, so a narrower error type can be widened on the way
/// out. A sequence of `attempt!` calls means the same thing as the matching
/// chain of [`Outcome::chain`](crate::Outcome::chain) calls.
///
/// ```
/// use outcome::{attempt, error, ok, Outcome};
///
/// fn halve(n: u32) -> Outcome<String, u32> {
///     if n % 2 == 0 {
///         ok(n / 2)
///     } else {
///         error(format!("{n} is odd"))
///     }
/// }
///
/// fn quarter(n: u32) -> Outcome<String, u32> {
///     let half = attempt!(halve(n));
///     halve(half)
/// }
///
/// assert_eq!(quarter(12), ok(3));
/// assert_eq!(quarter(6), error("3 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! attempt {
    ($outcome:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            }
        }
    };
}
