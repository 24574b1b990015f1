//! The `Outcome` type and its combinators.
//!
//! An `Outcome<E, A>` is either a `Success` carrying a value of type `A` or a
//! `Failure` carrying an error of type `E`. Every combinator consumes the
//! outcome and returns a new one; none of them can panic.
//!
//! The success channel is transformed with [`Outcome::map`] and sequenced with
//! [`Outcome::chain`]. The failure channel mirrors them with
//! [`Outcome::format`] and [`Outcome::capture`].

/// The outcome of a computation that either succeeded with a value or failed
/// with an error.
///
/// The error type comes first, the value type second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<E, A> {
    /// The computation succeeded with a value.
    Success(A),
    /// The computation failed with an error.
    Failure(E),
}

// ============================================================================
// Construction
// ============================================================================

impl<E, A> Outcome<E, A> {
    /// Create a successful outcome holding `value`.
    pub const fn ok(value: A) -> Self {
        Self::Success(value)
    }

    /// Create a failed outcome holding `error`.
    pub const fn error(error: E) -> Self {
        Self::Failure(error)
    }

    /// Lift an optional value, using `error` when it is absent.
    ///
    /// A present value is always a success, even if it is itself "empty"
    /// (an empty string, a `()`, a nested `None`).
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::from_optional("Oops", Some(3)), Outcome::Success(3));
    /// assert_eq!(Outcome::<_, i32>::from_optional("Oops", None), Outcome::Failure("Oops"));
    /// ```
    pub fn from_optional(error: E, value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(present = false, "outcome.from_optional");

                Self::Failure(error)
            }
        }
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl<E, A> Outcome<E, A> {
    /// Returns `true` if this is a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the value, if this is a `Success`.
    pub fn success(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error, if this is a `Failure`.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<E, A>` to `Outcome<&E, &A>`.
    ///
    /// Lets the consuming combinators run without giving up the original.
    pub fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

// ============================================================================
// Combinators
// ============================================================================

impl<E, A> Outcome<E, A> {
    /// Transform the value of a `Success`, leaving a `Failure` untouched.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let parsed: Outcome<&str, i32> = Outcome::ok(5);
    /// assert_eq!(parsed.map(|x| x + 7), Outcome::ok(12));
    /// ```
    pub fn map<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error of a `Failure`, leaving a `Success` untouched.
    pub fn format<E2, F>(self, f: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Continue with `next` if this is a `Success`.
    ///
    /// The outcome returned by `next` is returned as-is. A `Failure`
    /// short-circuits and `next` is never called.
    pub fn chain<B, F>(self, next: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Continue with `next` if this is a `Failure`.
    ///
    /// The failure-channel counterpart of [`Outcome::chain`]: `next` may
    /// recover into a `Success` or fail again with a different error type.
    pub fn capture<E2, F>(self, next: F) -> Outcome<E2, A>
    where
        F: FnOnce(E) -> Outcome<E2, A>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(channel = "failure", "outcome.capture");

                next(error)
            }
        }
    }

    /// Turn a `Failure` into a `Success` by computing a value from the error.
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> A,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(channel = "failure", "outcome.recover");

                Self::Success(f(error))
            }
        }
    }

    /// Returns `other` if this is a `Success`, otherwise this `Failure`.
    ///
    /// Both outcomes are already evaluated; only the returned one differs.
    pub fn and<B>(self, other: Outcome<E, B>) -> Outcome<E, B> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this `Success`, otherwise `other`.
    ///
    /// Both outcomes are already evaluated; only the returned one differs.
    pub fn or<E2>(self, other: Outcome<E2, A>) -> Outcome<E2, A> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(channel = "failure", "outcome.or");

                other
            }
        }
    }
}

// ============================================================================
// Extraction
// ============================================================================

impl<E, A> Outcome<E, A> {
    /// Returns the value of a `Success`, or `fallback` for a `Failure`.
    pub fn to_value(self, fallback: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(channel = "failure", "outcome.to_value");

                fallback
            }
        }
    }

    /// Returns the value of a `Success` as `Some`, discarding any error.
    pub fn to_optional(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Convert into a standard library `Result`.
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    fn from(outcome: Outcome<E, A>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
