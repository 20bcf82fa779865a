use strum::{Display, EnumCount, EnumIter};

/// Terminal classification of what happened inside a guarded scope.
///
/// Every guard starts out as [`Status::Pending`] and transitions exactly once, when the
/// guarded scope exits. The three terminal states mirror the three possible outcomes:
/// the expected error was raised, an unexpected error was raised, or the scope
/// completed without raising anything.
///
/// # Examples
///
/// ```rust
/// use errscope::Status;
///
/// assert_eq!("pending", Status::Pending.to_string());
/// assert!(!Status::Pending.is_terminal());
/// assert!(Status::ExpectedRaised.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// The guarded code has not finished executing yet.
    Pending,

    /// The guarded code failed with one of the expected error types.
    ExpectedRaised,

    /// The guarded code failed with an error matching none of the expected types.
    UnexpectedRaised,

    /// The guarded code completed without failing.
    UnexpectedCompleted,
}

impl Status {
    /// Returns true once the guarded scope has exited and the status will not change again.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Pending)
    }

    /// Returns true if this status implies that an error was captured by the guard.
    #[must_use]
    pub fn has_error(&self) -> bool {
        matches!(self, Status::ExpectedRaised | Status::UnexpectedRaised)
    }
}
