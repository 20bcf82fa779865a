use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// The error channel of a guarded block.
///
/// Guarded closures report failure through the standard boxed-error type, so any error
/// type can be raised with `?` without further ceremony.
pub type DynError = Box<dyn StdError + Send + Sync + 'static>;

/// Shared handle to the error captured by a guard.
///
/// The error thrown inside a guarded scope is converted to shared ownership exactly once
/// on scope exit; the guard and any [`crate::GuardViolation`] referring to it hold clones
/// of the same handle. Object identity is observable via [`Arc::ptr_eq`].
pub type CapturedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Identifies one error type a guard accepts as expected.
///
/// An `ErrorType` is a lightweight, copyable descriptor created with [`ErrorType::of`].
/// Matching is chain-inclusive: a thrown error matches when the error itself, or any
/// link of its [`source`](StdError::source) chain, is of the described type. Expecting a
/// low-level error type therefore also accepts higher-level errors that carry it as
/// their cause.
///
/// # Examples
///
/// ```rust
/// use errscope::ErrorType;
/// use std::num::ParseIntError;
///
/// let expected = ErrorType::of::<ParseIntError>();
/// assert!(expected.name().contains("ParseIntError"));
///
/// let error: Box<dyn std::error::Error + Send + Sync> =
///     "zero".parse::<u8>().unwrap_err().into();
/// assert!(expected.matches(&*error));
/// ```
#[derive(Clone, Copy)]
pub struct ErrorType {
    name: &'static str,
    matches_node: fn(&(dyn StdError + 'static)) -> bool,
}

impl ErrorType {
    /// Creates the descriptor for the error type `E`.
    #[must_use]
    pub fn of<E>() -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ErrorType {
            name: type_name::<E>(),
            matches_node: |node| node.is::<E>(),
        }
    }

    /// Returns the full name of the described error type
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Checks whether `error`, or any link of its source chain, is of the described type.
    #[must_use]
    pub fn matches(&self, error: &(dyn StdError + 'static)) -> bool {
        let mut node: Option<&(dyn StdError + 'static)> = Some(error);
        while let Some(current) = node {
            if (self.matches_node)(current) {
                return true;
            }
            node = current.source();
        }
        false
    }
}

impl fmt::Debug for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorType({})", self.name)
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
