/// Raised when a container accessor is called on the case it cannot handle.
///
/// These are programmer errors. The panicking accessors raise the value itself as the panic
/// payload, the `try_*` accessors hand it back as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `unwrap` on an absent optional.
    #[error("No value to unwrap.")]
    EmptyValue,
    /// `unwrap` on a failed result. Holds the rendered error payload.
    #[error("{0}")]
    UnwrappedFailure(String),
    /// `unwrap_err` on a successful result.
    #[error("There is no Err value to unwrap.")]
    UnwrappedSuccess,
    /// `expect` or `expect_err` on the other case. Holds the caller's message verbatim.
    #[error("{0}")]
    UnmetExpectation(String),
}

impl Error {
    /// Renders a failure payload for [`Error::UnwrappedFailure`].
    pub fn unwrapped_failure(payload: &impl std::fmt::Debug) -> Self {
        Self::UnwrappedFailure(format!("{payload:?}"))
    }

    pub fn is_empty_value(&self) -> bool {
        matches!(self, Self::EmptyValue)
    }

    pub fn is_unwrapped_failure(&self) -> bool {
        matches!(self, Self::UnwrappedFailure(_))
    }

    pub fn is_unwrapped_success(&self) -> bool {
        matches!(self, Self::UnwrappedSuccess)
    }

    pub fn is_unmet_expectation(&self) -> bool {
        matches!(self, Self::UnmetExpectation(_))
    }
}
