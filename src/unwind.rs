use std::{
    any::Any,
    cell::RefCell,
    fmt::{self, Display},
    panic::{AssertUnwindSafe, catch_unwind, resume_unwind},
};

use twofold_shared::{Error, Producer};

use crate::Result;

thread_local! {
    static RAISED: RefCell<Option<Error>> = const { RefCell::new(None) };
}

/// Panics with the error's message, so an uncaught accessor failure reads like
/// `No value to unwrap.` in the panic output.
///
/// The typed error is parked in a thread local so [`attempt`] can hand it back through
/// [`Panic::error`].
#[cold]
#[track_caller]
pub(crate) fn raise(error: Error) -> ! {
    tracing::trace!(%error, "container accessor called on the wrong case");
    let message = error.to_string();
    RAISED.with(|raised| *raised.borrow_mut() = Some(error));
    panic!("{message}")
}

/// Runs `f` and turns a panic into a failure.
///
/// A normal return becomes a success. Any panic, whatever its payload, is caught and kept
/// untouched inside the [`Panic`].
pub fn attempt<T, F>(f: F) -> Result<T, Panic>
where
    F: Producer<T>,
{
    RAISED.with(|raised| *raised.borrow_mut() = None);
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Result::success(value),
        Err(payload) => {
            let raised = RAISED.with(|raised| raised.borrow_mut().take());
            let mut panic = Panic { payload, error: None };
            // Only claim the error if it is what actually unwound.
            let unwound = raised.filter(|error| panic.message() == Some(&*error.to_string()));
            panic.error = unwound;
            tracing::trace!(%panic, "attempt caught a panic");
            Result::failure(panic)
        }
    }
}

/// The payload of a panic caught by [`attempt`].
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
    error: Option<Error>,
}

impl Panic {
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref()
    }

    /// Takes the payload out as an `E`, or hands the panic back if it holds something else.
    pub fn downcast<E: Any>(self) -> std::result::Result<E, Self> {
        match self.payload.downcast::<E>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self { payload, error: self.error }),
        }
    }

    /// The text of a `panic!("...")` style payload.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(*message);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// The container error, if the panic came from an accessor like `unwrap`.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = self.error() {
            return Display::fmt(error, f);
        }
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str("[Panic]"),
        }
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Panic").field(&format_args!("{self}")).finish()
    }
}
