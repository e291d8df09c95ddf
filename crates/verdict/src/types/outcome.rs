//! The success/failure container.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::types::NormalizedError;

/// The outcome of an operation that may fail.
///
/// Exactly one of `data` / `error` is present, and [`is_success`](Self::is_success)
/// agrees with which one. Outcomes are plain values: built once by a
/// constructor, inspected, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome may be a failure, which should be inspected"]
pub enum Outcome<T, E = NormalizedError> {
    /// The operation produced a value.
    Success(T),

    /// The operation failed.
    Failure(E),
}

/// Wraps a value as a successful outcome. Never fails.
///
/// # Examples
///
/// ```
/// use verdict::success;
///
/// let outcome = success(42);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.data(), Some(&42));
/// assert!(outcome.error().is_none());
/// ```
pub fn success<T>(data: T) -> Outcome<T> {
    Outcome::Success(data)
}

/// Applies `f` to a successful payload. See [`Outcome::map`].
pub fn map<T, U, F>(outcome: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// Chains an outcome-returning function. See [`Outcome::flat_map`].
pub fn flat_map<T, U, F>(outcome: Outcome<T>, f: F) -> Outcome<U>
where
    F: FnOnce(T) -> Outcome<U>,
{
    outcome.flat_map(f)
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// The error, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome, keeping the success payload.
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Consumes the outcome, keeping the error.
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Extracts the success value, panicking if the outcome failed.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::success;
    ///
    /// assert_eq!(success(42).unwrap(), 42);
    /// ```
    #[allow(clippy::panic)]
    pub fn unwrap(self) -> T
    where
        E: std::fmt::Display,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => panic!("called `unwrap()` on Failure: {}", error),
        }
    }

    /// Returns the success value, or a default if the outcome failed.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes it from the error.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(error) => f(error),
        }
    }
}

impl<T> Outcome<T> {
    /// Maps `Outcome<T>` to `Outcome<U>` by applying `f` to the success payload.
    ///
    /// `f` runs exactly once on success. A failure is passed through the
    /// normalizer again, which keeps its code and message but re-captures
    /// the stack here under the policy the failure was built with. A panic
    /// inside `f` is not caught.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(error) => error.renormalizer().failure(error),
        }
    }

    /// Chains an outcome-returning function.
    ///
    /// On success the result of `f` is returned as is. Failures behave as
    /// in [`map`](Self::map).
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(data) => f(data),
            Outcome::Failure(error) => error.renormalizer().failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// Serializes as `{"data": ..., "error": ..., "isSuccess": ...}` with the
/// absent side set to `null`.
impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("error", &self.error())?;
        state.serialize_field("isSuccess", &self.is_success())?;
        state.end()
    }
}
