use std::fmt::Debug;

use twofold_shared::{Error, Transformer};

use crate::{Optional, unwind::raise};

/// The outcome of an operation: a success value `T` or a failure value `E`.
///
/// Operations consume the receiver. On a failure receiver, callbacks that take the success
/// value are never invoked and the error moves into the returned container.
#[must_use = "a Result may be a failure, check it or chain on it"]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Result<T, E> {
    outcome: std::result::Result<T, E>,
}

impl<T, E> Result<T, E> {
    pub const fn success(value: T) -> Self {
        Self { outcome: Ok(value) }
    }

    pub const fn failure(error: E) -> Self {
        Self { outcome: Err(error) }
    }

    pub const fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub const fn is_err(&self) -> bool {
        self.outcome.is_err()
    }

    /// Returns `other` on success, otherwise keeps this failure.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self.outcome {
            Ok(_) => other,
            Err(error) => Result::failure(error),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: Transformer<T, Result<U, E>>,
    {
        match self.outcome {
            Ok(value) => f(value),
            Err(error) => Result::failure(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: Transformer<T, U>,
    {
        match self.outcome {
            Ok(value) => Result::success(f(value)),
            Err(error) => Result::failure(error),
        }
    }

    pub fn map_err<O, F>(self, f: F) -> Result<T, O>
    where
        F: Transformer<E, O>,
    {
        match self.outcome {
            Ok(value) => Result::success(value),
            Err(error) => Result::failure(f(error)),
        }
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: Transformer<T, U>,
    {
        match self.outcome {
            Ok(value) => f(value),
            Err(_) => default,
        }
    }

    /// Maps the success value with `f`, or the error with `default`.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: Transformer<E, U>,
        F: Transformer<T, U>,
    {
        match self.outcome {
            Ok(value) => f(value),
            Err(error) => default(error),
        }
    }

    /// The success value, discarding any error.
    pub fn ok(self) -> Optional<T> {
        match self.outcome {
            Ok(value) => Optional::present(value),
            Err(_) => Optional::absent(),
        }
    }

    /// The error value, discarding any success.
    pub fn err(self) -> Optional<E> {
        match self.outcome {
            Ok(_) => Optional::absent(),
            Err(error) => Optional::present(error),
        }
    }

    /// Keeps this success untouched, otherwise returns `other`.
    pub fn or<O>(self, other: Result<T, O>) -> Result<T, O> {
        match self.outcome {
            Ok(value) => Result::success(value),
            Err(_) => other,
        }
    }

    pub fn or_else<O, F>(self, f: F) -> Result<T, O>
    where
        F: Transformer<E, Result<T, O>>,
    {
        match self.outcome {
            Ok(value) => Result::success(value),
            Err(error) => f(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::UnmetExpectation`] carrying `message` on failure.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }

    pub fn try_expect(self, message: &str) -> std::result::Result<T, Error> {
        self.outcome.map_err(|_| Error::UnmetExpectation(message.to_owned()))
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::UnmetExpectation`] carrying `message` on success.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self.try_expect_err(message) {
            Ok(error) => error,
            Err(error) => raise(error),
        }
    }

    pub fn try_expect_err(self, message: &str) -> std::result::Result<E, Error> {
        match self.outcome {
            Ok(_) => Err(Error::UnmetExpectation(message.to_owned())),
            Err(error) => Ok(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::UnwrappedFailure`] on failure. The message is the `Debug`
    /// rendering of the error value.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }

    pub fn try_unwrap(self) -> std::result::Result<T, Error>
    where
        E: Debug,
    {
        self.outcome.map_err(|error| Error::unwrapped_failure(&error))
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with [`Error::UnwrappedSuccess`] on success.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(error) => raise(error),
        }
    }

    pub fn try_unwrap_err(self) -> std::result::Result<E, Error> {
        match self.outcome {
            Ok(_) => Err(Error::UnwrappedSuccess),
            Err(error) => Ok(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.outcome {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: Transformer<E, T>,
    {
        match self.outcome {
            Ok(value) => value,
            Err(error) => f(error),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.outcome.unwrap_or_default()
    }

    pub fn as_ref(&self) -> Result<&T, &E> {
        Result { outcome: self.outcome.as_ref() }
    }

    pub fn iter(&self) -> std::result::Iter<'_, T> {
        self.outcome.iter()
    }

    pub fn into_std(self) -> std::result::Result<T, E> {
        self.outcome
    }
}

impl<T: Debug, E: Debug> Debug for Result<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Ok(value) => f.debug_tuple("Success").field(value).finish(),
            Err(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(outcome: std::result::Result<T, E>) -> Self {
        Self { outcome }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.outcome
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = std::result::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcome.into_iter()
    }
}
