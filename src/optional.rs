use std::fmt::Debug;

use twofold_shared::{Error, Predicate, Producer, Transformer};

use crate::{Result, unwind::raise};

/// A value that is either present or absent.
///
/// Every operation except [`Optional::replace`] consumes the receiver and returns a new
/// container, so chaining never writes through an operand. Callbacks run at most once and
/// never run on an absent receiver.
#[must_use = "an Optional may be absent, check it or chain on it"]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    /// An optional with no value.
    pub const fn absent() -> Self {
        Self { slot: None }
    }

    /// An optional holding `value`, whatever it is.
    pub const fn present(value: T) -> Self {
        Self { slot: Some(value) }
    }

    pub const fn is_present(&self) -> bool {
        self.slot.is_some()
    }

    pub const fn is_absent(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns `other` if this is present, otherwise absent.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self.slot {
            Some(_) => other,
            None => Optional::absent(),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: Transformer<T, Optional<U>>,
    {
        match self.slot {
            Some(value) => f(value),
            None => Optional::absent(),
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Predicate<T>,
    {
        match self.slot {
            Some(value) => {
                if predicate(&value) {
                    Self::present(value)
                } else {
                    Self::absent()
                }
            }
            None => Self::absent(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: Transformer<T, U>,
    {
        match self.slot {
            Some(value) => Optional::present(f(value)),
            None => Optional::absent(),
        }
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: Transformer<T, U>,
    {
        match self.slot {
            Some(value) => f(value),
            None => default,
        }
    }

    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: Producer<U>,
        F: Transformer<T, U>,
    {
        match self.slot {
            Some(value) => f(value),
            None => default(),
        }
    }

    /// Success with the value, or failure with `error` when absent.
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self.slot {
            Some(value) => Result::success(value),
            None => Result::failure(error),
        }
    }

    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: Producer<E>,
    {
        match self.slot {
            Some(value) => Result::success(value),
            None => Result::failure(error()),
        }
    }

    pub fn or(self, other: Self) -> Self {
        match self.slot {
            Some(_) => self,
            None => other,
        }
    }

    pub fn or_else<F>(self, f: F) -> Self
    where
        F: Producer<Self>,
    {
        match self.slot {
            Some(_) => self,
            None => f(),
        }
    }

    /// Puts `value` in place and returns whatever was there before.
    ///
    /// The receiver is present afterwards regardless of its previous state. This is the
    /// only operation that mutates a container.
    pub fn replace(&mut self, value: T) -> Self {
        Self { slot: self.slot.replace(value) }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the [`Error::EmptyValue`] message if absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.slot {
            Some(value) => value,
            None => raise(Error::EmptyValue),
        }
    }

    /// Like [`Optional::unwrap`], but hands the error back instead of panicking.
    pub fn try_unwrap(self) -> std::result::Result<T, Error> {
        self.slot.ok_or(Error::EmptyValue)
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.slot {
            Some(value) => value,
            None => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: Producer<T>,
    {
        match self.slot {
            Some(value) => value,
            None => f(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.slot.unwrap_or_default()
    }

    /// Present only if exactly one of the two operands is present.
    pub fn xor(self, other: Self) -> Self {
        match (self.slot, other.slot) {
            (Some(value), None) | (None, Some(value)) => Self::present(value),
            _ => Self::absent(),
        }
    }

    /// Pairs the two values, `(self, other)`, if both are present.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self.slot, other.slot) {
            (Some(left), Some(right)) => Optional::present((left, right)),
            _ => Optional::absent(),
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional { slot: self.slot.as_ref() }
    }

    pub fn as_mut(&mut self) -> Optional<&mut T> {
        Optional { slot: self.slot.as_mut() }
    }

    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.slot.iter()
    }

    pub fn into_option(self) -> Option<T> {
        self.slot
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.slot {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.slot
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slot.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
