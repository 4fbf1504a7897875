//! Two containers for code that would rather not juggle null checks and panics:
//! [`Optional`], a value that may be absent, and [`Result`], a success or a failure.
//!
//! ```
//! use twofold::{Optional, err, ok, present};
//!
//! let total = present(5).map(|v: i32| v * 2).map(|v: i32| v * 10).unwrap_or(0);
//! assert_eq!(total, 100);
//!
//! let checked = ok::<_, &str>("abc")
//!     .and_then(|v: &str| if v.len() == 3 { ok(true) } else { err("bad") });
//! assert!(checked.unwrap());
//!
//! let nothing: Optional<i32> = Optional::absent();
//! assert_eq!(nothing.map(|v: i32| v * 2).unwrap_or(0), 0);
//! ```

pub mod optional;
pub mod result;
pub mod unwind;

pub use optional::Optional;
pub use result::Result;
pub use twofold_shared::{Error, Predicate, Producer, Transformer};
pub use unwind::{Panic, attempt};

/// An optional with no value.
pub const fn absent<T>() -> Optional<T> {
    Optional::absent()
}

/// An optional holding `value`.
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::present(value)
}

/// A successful result holding `value`.
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Result::success(value)
}

/// A failed result holding `error`.
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Result::failure(error)
}
