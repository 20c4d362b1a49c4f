//! The two-variant success/failure container and its combinators

use std::fmt;

/// A computation's outcome: either a success value or a typed failure.
///
/// `Outcome` replaces exception-style control flow with an explicit value.
/// The variants are the stable tag consumers match on; exactly one is ever
/// populated, the container is immutable once constructed, and every
/// combinator produces a new `Outcome` rather than mutating its input.
///
/// # Examples
///
/// ```
/// use railguard_outcome::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     match raw.parse() {
///         Ok(port) => Outcome::success(port),
///         Err(_) => Outcome::failure(format!("not a port: {raw}")),
///     }
/// }
///
/// let label = parse_port("8080")
///     .map(|port| port + 1)
///     .fold(|port| format!("ok:{port}"), |err| format!("err:{err}"));
/// assert_eq!(label, "ok:8081");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error-like value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap a success value. Never validates `value`.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wrap a failure value. Constructing the container itself cannot fail.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Check whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Check whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow both channels, leaving the original in place.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the success value; a failure passes through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure value; a success passes through untouched.
    pub fn map_failure<F, M>(self, f: M) -> Outcome<T, F>
    where
        M: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Sequence a dependent fallible step.
    ///
    /// On success, `f` runs with the payload and its outcome is returned
    /// directly; on failure, `f` is never invoked and the failure is returned
    /// as-is. Chains built this way short-circuit at the first failure.
    ///
    /// ```
    /// use railguard_outcome::Outcome;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// };
    /// assert_eq!(Outcome::success(8).and_then(halve).and_then(halve), Outcome::success(2));
    /// assert_eq!(Outcome::success(3).and_then(halve).and_then(halve), Outcome::failure("odd"));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure with another fallible step.
    ///
    /// The dual of [`and_then`](Self::and_then): on failure, `f` may remap the
    /// error or produce a fresh success; a success passes through untouched.
    pub fn or_else<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Collapse both channels into a single value.
    ///
    /// Exactly one of the two functions runs, exactly once. Every other way of
    /// consuming an `Outcome` is a convenience form of this.
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Return the success value or `default`. Total, never panics.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the success value or compute one from the failure.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Return the success value, panicking with the failure's message.
    ///
    /// The one sanctioned bridge back into panic-based ambient flow, for
    /// callers that have already delegated to crash handling. Everywhere else,
    /// prefer [`fold`](Self::fold) or matching on the variants.
    pub fn unwrap(self) -> T
    where
        E: fmt::Display,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::unwrap()` on a `Failure`: {error}")
            }
        }
    }

    /// Return the failure value, panicking on a success.
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success`: {value:?}")
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Convert into the standard library result, for `?` at the boundary.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Build an outcome from a standard library result.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
