use std::fmt;
use std::sync::Arc;

use crate::guard::status::Status;
use crate::guard::types::{CapturedError, DynError, ErrorType};
use crate::guard::violation::GuardViolation;
use crate::{Error, Result};

/// Scoped guard asserting that a block of fallible code fails with one of a fixed set of
/// expected error types.
///
/// A guard owns all of its state: the expected type set and wrap policy (fixed at
/// construction), and the resulting [`Status`] plus captured error (written when the
/// guarded scope exits). Run a closure under the guard with [`run`](Self::run), or wrap
/// a callable with [`wrap`](Self::wrap) to re-apply the same checks on every invocation.
///
/// Exactly one of three things happens when the guarded scope exits:
///
/// 1. The closure completed without failing: the status becomes
///    [`Status::UnexpectedCompleted`] and a [`GuardViolation`] is raised. A missing
///    expected error is always an error, regardless of the wrap policy.
/// 2. The closure failed with an error matching one of the expected types (the error
///    itself or any link of its `source()` chain): the status becomes
///    [`Status::ExpectedRaised`], the error is captured, and `run` returns `Ok(())`.
/// 3. The closure failed with anything else: the status becomes
///    [`Status::UnexpectedRaised`] and the error is captured. With the wrap policy
///    enabled (the default) a [`GuardViolation`] carrying the original error as its
///    cause is raised; with it disabled the original error propagates untouched as
///    [`Error::Unexpected`].
///
/// A guard instance belongs to one logical scope. Construct a fresh guard per scope;
/// the one supported reuse pattern is [`wrap`](Self::wrap), where each invocation of the
/// wrapped callable overwrites the status and captured error of the same instance.
///
/// # Examples
///
/// ```rust
/// use errscope::{ErrorType, ExpectedError, Status};
///
/// let mut guard = ExpectedError::new([ErrorType::of::<std::num::ParseIntError>()])?;
///
/// guard.run(|g| {
///     assert_eq!(Status::Pending, g.status());
///     let number: i32 = "not a number".parse()?;
///     Ok(number)
/// })?;
///
/// assert_eq!(Status::ExpectedRaised, guard.status());
/// assert!(guard.captured_error().unwrap().is::<std::num::ParseIntError>());
/// # Ok::<(), errscope::Error>(())
/// ```
///
/// Letting an unexpected error bubble through instead of wrapping it:
///
/// ```rust
/// use errscope::{Error, ErrorType, ExpectedError, Status};
///
/// let mut guard = ExpectedError::with_wrap_policy(
///     [ErrorType::of::<std::num::ParseIntError>()],
///     false,
/// )?;
///
/// let err = guard
///     .run(|_| {
///         std::fs::read("/definitely/not/a/real/path")?;
///         Ok(())
///     })
///     .unwrap_err();
///
/// assert!(matches!(err, Error::Unexpected(_)));
/// assert_eq!(Status::UnexpectedRaised, guard.status());
/// # Ok::<(), errscope::Error>(())
/// ```
#[derive(Debug)]
pub struct ExpectedError {
    expected: Vec<ErrorType>,
    wrap_unexpected: bool,
    status: Status,
    captured: Option<CapturedError>,
}

impl ExpectedError {
    /// Creates a guard expecting one of `expected_types`, wrapping unexpected errors.
    ///
    /// The set's insertion order is preserved for reporting; matching itself is
    /// order-independent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `expected_types` yields no types.
    pub fn new<I>(expected_types: I) -> Result<Self>
    where
        I: IntoIterator<Item = ErrorType>,
    {
        Self::with_wrap_policy(expected_types, true)
    }

    /// Creates a guard expecting one of `expected_types`, with an explicit wrap policy.
    ///
    /// With `wrap_unexpected_error` set to `false`, an unexpected error raised in the
    /// guarded scope propagates untouched as [`Error::Unexpected`] instead of being
    /// wrapped in a [`GuardViolation`]. The policy only affects unexpected errors; a
    /// scope that completes without failing always raises a violation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `expected_types` yields no types.
    pub fn with_wrap_policy<I>(expected_types: I, wrap_unexpected_error: bool) -> Result<Self>
    where
        I: IntoIterator<Item = ErrorType>,
    {
        let expected: Vec<ErrorType> = expected_types.into_iter().collect();
        if expected.is_empty() {
            return Err(Error::InvalidArgument {
                message: "at least one expected error type must be provided".to_string(),
            });
        }

        Ok(ExpectedError {
            expected,
            wrap_unexpected: wrap_unexpected_error,
            status: Status::Pending,
            captured: None,
        })
    }

    /// Creates a guard expecting the single error type `E`, wrapping unexpected errors.
    ///
    /// Infallible shorthand for the common single-type case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use errscope::{ExpectedError, Status};
    ///
    /// let mut guard = ExpectedError::expecting::<std::num::ParseIntError>();
    /// guard.run(|_| "x".parse::<i32>().map_err(Into::into))?;
    /// assert_eq!(Status::ExpectedRaised, guard.status());
    /// # Ok::<(), errscope::Error>(())
    /// ```
    #[must_use]
    pub fn expecting<E>() -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ExpectedError {
            expected: vec![ErrorType::of::<E>()],
            wrap_unexpected: true,
            status: Status::Pending,
            captured: None,
        }
    }

    /// Returns the current status of this guard
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the error captured on scope exit, `None` if no error occurred yet.
    #[must_use]
    pub fn captured_error(&self) -> Option<&CapturedError> {
        self.captured.as_ref()
    }

    /// Returns the expected error types, in insertion order
    #[must_use]
    pub fn expected_types(&self) -> &[ErrorType] {
        &self.expected
    }

    /// Returns true if unexpected errors are wrapped in a [`GuardViolation`]
    #[must_use]
    pub fn wraps_unexpected(&self) -> bool {
        self.wrap_unexpected
    }

    /// Runs `body` under this guard and classifies its outcome.
    ///
    /// The closure receives a shared reference to the guard, so code inside the scope
    /// can read [`status`](Self::status) and observe [`Status::Pending`] before the
    /// failing statement. The closure's success value is discarded: completing without
    /// an error is always a violation.
    ///
    /// # Errors
    ///
    /// - [`Error::Violation`] if the closure completed without failing, or failed with
    ///   an unexpected error while the wrap policy is enabled.
    /// - [`Error::Unexpected`] if the closure failed with an unexpected error and the
    ///   wrap policy is disabled; the original error object propagates untouched.
    pub fn run<T, F>(&mut self, body: F) -> Result<()>
    where
        F: FnOnce(&Self) -> std::result::Result<T, DynError>,
    {
        let outcome = body(&*self);
        self.conclude(outcome)
    }

    /// Wraps `callable` so that every invocation runs under this guard.
    ///
    /// The returned [`WrappedCallable`] owns the guard; each call re-runs the full
    /// check sequence and overwrites the guard's status and captured error. The guard
    /// remains readable between calls through [`WrappedCallable::guard`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use errscope::{ErrorType, ExpectedError, Status};
    ///
    /// let guard = ExpectedError::new([ErrorType::of::<std::num::ParseIntError>()])?;
    /// let mut parse_port = guard.wrap(|| {
    ///     let port: u16 = "70000".parse()?;
    ///     Ok(port)
    /// });
    ///
    /// parse_port.call()?;
    /// assert_eq!(Status::ExpectedRaised, parse_port.guard().status());
    /// # Ok::<(), errscope::Error>(())
    /// ```
    #[must_use]
    pub fn wrap<T, F>(self, callable: F) -> WrappedCallable<F>
    where
        F: FnMut() -> std::result::Result<T, DynError>,
    {
        WrappedCallable {
            guard: self,
            callable,
        }
    }

    /// The single transition point of the status machine.
    ///
    /// State is written before any error leaves this function; the guard is readable
    /// even when the outcome propagates.
    fn conclude<T>(&mut self, outcome: std::result::Result<T, DynError>) -> Result<()> {
        match outcome {
            Ok(_) => {
                self.captured = None;
                self.status = Status::UnexpectedCompleted;
                Err(Error::Violation(GuardViolation::completed()))
            }
            Err(error) => {
                let error: CapturedError = Arc::from(error);
                let matched = self.expected.iter().any(|expected| expected.matches(&*error));

                self.captured = Some(Arc::clone(&error));
                if matched {
                    self.status = Status::ExpectedRaised;
                    Ok(())
                } else {
                    self.status = Status::UnexpectedRaised;
                    if self.wrap_unexpected {
                        Err(Error::Violation(GuardViolation::unexpected(error)))
                    } else {
                        Err(Error::Unexpected(error))
                    }
                }
            }
        }
    }
}

/// A callable wrapped by an [`ExpectedError`] guard.
///
/// Produced by [`ExpectedError::wrap`]. Invoking [`call`](Self::call) runs the wrapped
/// callable under the guard's full check sequence; the guard's status and captured
/// error are overwritten on each invocation and stay readable between calls.
pub struct WrappedCallable<F> {
    guard: ExpectedError,
    callable: F,
}

impl<F> WrappedCallable<F> {
    /// Invokes the wrapped callable under the guard.
    ///
    /// # Errors
    ///
    /// Same contract as [`ExpectedError::run`]: a [`Error::Violation`] when the
    /// expectation is not met, or [`Error::Unexpected`] when an unexpected error
    /// bubbles through a guard with wrapping disabled.
    pub fn call<T>(&mut self) -> Result<()>
    where
        F: FnMut() -> std::result::Result<T, DynError>,
    {
        let outcome = (self.callable)();
        self.guard.conclude(outcome)
    }

    /// Returns the guard backing this callable
    #[must_use]
    pub fn guard(&self) -> &ExpectedError {
        &self.guard
    }

    /// Consumes the wrapper and returns the guard backing it
    #[must_use]
    pub fn into_guard(self) -> ExpectedError {
        self.guard
    }
}

impl<F> fmt::Debug for WrappedCallable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedCallable")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
