//! # errscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! errscope library. Import this module to get quick access to the essential types for
//! guarding fallible code in tests.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all errscope operations
pub use crate::Error;

/// The result type used throughout errscope
pub use crate::Result;

// ================================================================================================
// Guards
// ================================================================================================

/// Scoped expected-error guard
pub use crate::ExpectedError;

/// Callable wrapped by a guard
pub use crate::WrappedCallable;

/// Terminal classification of a guarded scope
pub use crate::Status;

/// Descriptor for one expected error type
pub use crate::ErrorType;

/// Error raised when an expectation is not met
pub use crate::GuardViolation;

// ================================================================================================
// Error Channel Aliases
// ================================================================================================

/// Boxed error type returned by guarded closures
pub use crate::DynError;

/// Shared handle to a captured error
pub use crate::CapturedError;
