use thiserror::Error;

use crate::guard::{CapturedError, GuardViolation};

/// The generic Error type, which provides coverage for all errors this library can
/// potentially return.
///
/// This enum covers the three ways a guard can fail: a malformed construction call, an
/// expectation that was not met at scope exit, and an unexpected error allowed to bubble
/// through a guard whose wrap policy is disabled.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::InvalidArgument`] - A guard was constructed with invalid arguments
///
/// ## Scope-Exit Errors
/// - [`Error::Violation`] - The guarded scope did not fail with an expected error
/// - [`Error::Unexpected`] - An unexpected error propagated unchanged (wrapping disabled)
///
/// # Examples
///
/// ```rust
/// use errscope::{Error, ErrorType, ExpectedError, Status};
///
/// let mut guard = ExpectedError::new([ErrorType::of::<std::num::ParseIntError>()])?;
///
/// match guard.run(|_| Ok("nothing went wrong")) {
///     Ok(()) => println!("an expected error was raised"),
///     Err(Error::Violation(violation)) => {
///         assert_eq!(Status::UnexpectedCompleted, violation.status());
///     }
///     Err(Error::Unexpected(original)) => {
///         eprintln!("bubbled through: {original}");
///     }
///     Err(e) => {
///         eprintln!("error: {e}");
///     }
/// }
/// # Ok::<(), errscope::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A guard was constructed with invalid arguments.
    ///
    /// This error occurs synchronously at construction time, before any code is guarded.
    /// It is not retryable; the call site has to be fixed. The only argument shape that
    /// can be rejected at runtime is an empty set of expected error types - every
    /// [`crate::ErrorType`] entry is necessarily a valid error type by construction.
    #[error("Invalid argument - {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// A guarded scope exited without meeting its expectation.
    ///
    /// Raised when the guarded code completed without failing, or failed with an error
    /// matching none of the expected types while the guard's wrap policy is enabled.
    /// The wrapped [`GuardViolation`] carries the terminal status and, for unexpected
    /// errors, the original error object as its cause.
    #[error("{0}")]
    Violation(#[from] GuardViolation),

    /// An unexpected error bubbling out of a guard with wrapping disabled.
    ///
    /// Display and the error source chain delegate entirely to the original error
    /// object, so reporting tooling sees the real failure. The object itself is the
    /// same instance the guard captured, recoverable by matching this variant.
    #[error(transparent)]
    Unexpected(CapturedError),
}
