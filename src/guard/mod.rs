//! Expected-error guards.
//!
//! The centerpiece of this module is [`ExpectedError`], a scoped guard that runs a block
//! of fallible code and classifies what happened inside it:
//!
//! - the block failed with one of the expected error types → the error is captured and
//!   suppressed,
//! - the block failed with anything else → a [`GuardViolation`] is raised (or the
//!   original error bubbles through, depending on the wrap policy),
//! - the block completed without failing → a [`GuardViolation`] is always raised.
//!
//! Expected types are described by [`ErrorType`] values; matching walks the thrown
//! error's `source()` chain, so expecting a low-level error type also accepts
//! higher-level errors that carry it as their cause.
//!
//! The same guard can alternatively wrap a callable via [`ExpectedError::wrap`], which
//! yields a [`WrappedCallable`] re-running the full check sequence on every invocation.

mod expected;
mod status;
mod types;
mod violation;

pub use expected::{ExpectedError, WrappedCallable};
pub use status::Status;
pub use types::{CapturedError, DynError, ErrorType};
pub use violation::GuardViolation;
