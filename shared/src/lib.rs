//! Pieces shared by the `twofold` containers: the callback shapes every operation is
//! written against, and the errors raised when an accessor is called on the wrong case.

mod callback;
mod error;

pub use callback::{Predicate, Producer, Transformer};
pub use error::Error;
