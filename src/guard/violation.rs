use std::error::Error as StdError;
use std::fmt;

use crate::guard::status::Status;
use crate::guard::types::CapturedError;

/// Error raised when a guarded scope exits without meeting its expectation.
///
/// Two situations produce a violation: the guarded code completed without failing, or it
/// failed with an error matching none of the expected types while the guard's wrap
/// policy is enabled. The violation carries enough structured data to report a precise
/// failure without parsing its message: the terminal [`Status`] and, for unexpected
/// errors, the original error object.
///
/// The original error is attached as this error's cause, so reporting tooling that walks
/// [`source`](StdError::source) chains prints the real failure.
///
/// # Examples
///
/// ```rust
/// use errscope::{Error, ErrorType, ExpectedError, Status};
///
/// let mut guard = ExpectedError::new([ErrorType::of::<std::num::ParseIntError>()])?;
///
/// let err = guard.run(|_| Ok(7)).unwrap_err();
/// match err {
///     Error::Violation(violation) => {
///         assert_eq!(Status::UnexpectedCompleted, violation.status());
///         assert!(violation.error().is_none());
///     }
///     other => panic!("unexpected error: {other}"),
/// }
/// # Ok::<(), errscope::Error>(())
/// ```
#[derive(Debug)]
pub struct GuardViolation {
    status: Status,
    error: Option<CapturedError>,
}

impl GuardViolation {
    pub(crate) fn completed() -> Self {
        GuardViolation {
            status: Status::UnexpectedCompleted,
            error: None,
        }
    }

    pub(crate) fn unexpected(error: CapturedError) -> Self {
        GuardViolation {
            status: Status::UnexpectedRaised,
            error: Some(error),
        }
    }

    /// Returns the terminal status that triggered this violation
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the unexpected error if one was raised, `None` otherwise.
    #[must_use]
    pub fn error(&self) -> Option<&CapturedError> {
        self.error.as_ref()
    }
}

impl fmt::Display for GuardViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(
                f,
                "an unexpected error was raised in the guarded scope: {error}"
            ),
            None => write!(f, "the guarded scope completed without raising an expected error"),
        }
    }
}

impl StdError for GuardViolation {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.error {
            Some(error) => Some(&**error),
            None => None,
        }
    }
}
