//! Free-function forms of the [`Outcome`] combinators.
//!
//! Each function takes the outcome as its last argument (extractors take it
//! first) and delegates to the method of the same name, so the two forms can
//! never disagree.

use crate::outcome::Outcome;

/// Create a successful outcome holding `value`.
pub const fn ok<E, A>(value: A) -> Outcome<E, A> {
    Outcome::ok(value)
}

/// Create a failed outcome holding `error`.
pub const fn error<E, A>(error: E) -> Outcome<E, A> {
    Outcome::error(error)
}

/// Lift an optional value, using `error` when it is absent.
pub fn from_optional<E, A>(error: E, value: Option<A>) -> Outcome<E, A> {
    Outcome::from_optional(error, value)
}

/// See [`Outcome::map`].
pub fn map<E, A, B, F>(f: F, outcome: Outcome<E, A>) -> Outcome<E, B>
where
    F: FnOnce(A) -> B,
{
    outcome.map(f)
}

/// See [`Outcome::format`].
pub fn format<E, E2, A, F>(f: F, outcome: Outcome<E, A>) -> Outcome<E2, A>
where
    F: FnOnce(E) -> E2,
{
    outcome.format(f)
}

/// See [`Outcome::chain`].
pub fn chain<E, A, B, F>(next: F, outcome: Outcome<E, A>) -> Outcome<E, B>
where
    F: FnOnce(A) -> Outcome<E, B>,
{
    outcome.chain(next)
}

/// See [`Outcome::capture`].
pub fn capture<E, E2, A, F>(next: F, outcome: Outcome<E, A>) -> Outcome<E2, A>
where
    F: FnOnce(E) -> Outcome<E2, A>,
{
    outcome.capture(next)
}

/// See [`Outcome::recover`].
pub fn recover<E, A, F>(f: F, outcome: Outcome<E, A>) -> Outcome<E, A>
where
    F: FnOnce(E) -> A,
{
    outcome.recover(f)
}

/// Returns `right` if `left` is a `Success`, otherwise `left`'s `Failure`.
pub fn and<E, A, B>(left: Outcome<E, A>, right: Outcome<E, B>) -> Outcome<E, B> {
    left.and(right)
}

/// Returns `left` if it is a `Success`, otherwise `right`.
pub fn or<E, E2, A>(left: Outcome<E, A>, right: Outcome<E2, A>) -> Outcome<E2, A> {
    left.or(right)
}

/// See [`Outcome::to_value`].
pub fn to_value<E, A>(outcome: Outcome<E, A>, fallback: A) -> A {
    outcome.to_value(fallback)
}

/// See [`Outcome::to_optional`].
pub fn to_optional<E, A>(outcome: Outcome<E, A>) -> Option<A> {
    outcome.to_optional()
}
