// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # errscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/errscope.svg)](https://crates.io/crates/errscope)
//! [![Documentation](https://docs.rs/errscope/badge.svg)](https://docs.rs/errscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/errscope/blob/main/LICENSE-APACHE)
//!
//! A small test-support library for asserting that a block of fallible code fails with one
//! of a set of expected error types. `errscope` replaces ad-hoc `unwrap_err`/`matches!`
//! boilerplate with a scoped guard that classifies exactly what happened inside the guarded
//! scope and keeps the captured error around for further inspection.
//!
//! ## Features
//!
//! - **🎯 Scoped guards** - Run a closure under a guard and read the outcome afterwards
//! - **🧅 Chain-aware matching** - An expected type matches the error itself or any link of its `source()` chain
//! - **🎁 Wrap or bubble** - Unexpected errors are wrapped in a structured [`GuardViolation`] or propagated untouched
//! - **🔁 Callable wrapping** - The same guard can wrap a callable and re-apply its checks on every invocation
//!
//! ## Quick Start
//!
//! Add `errscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! errscope = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use errscope::prelude::*;
//!
//! let mut guard = ExpectedError::new([ErrorType::of::<std::num::ParseIntError>()])?;
//!
//! guard.run(|_| {
//!     let number: i32 = "not a number".parse()?;
//!     Ok(number)
//! })?;
//!
//! assert_eq!(Status::ExpectedRaised, guard.status());
//! assert!(guard.captured_error().unwrap().is::<std::num::ParseIntError>());
//! # Ok::<(), errscope::Error>(())
//! ```
//!
//! ### Failure Reporting
//!
//! When the guarded code does not fail as expected, the guard raises a [`GuardViolation`]
//! carrying the terminal [`Status`] and, for unexpected errors, the original error object:
//!
//! ```rust
//! use errscope::{Error, ErrorType, ExpectedError, Status};
//!
//! let mut guard = ExpectedError::new([ErrorType::of::<std::num::ParseIntError>()])?;
//!
//! let err = guard.run(|_| Ok("completed without failing")).unwrap_err();
//! match err {
//!     Error::Violation(violation) => {
//!         assert_eq!(Status::UnexpectedCompleted, violation.status());
//!         assert!(violation.error().is_none());
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! # Ok::<(), errscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `errscope` is organized into a handful of small modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`guard`] - The guard itself, its status machine, and the violation error
//! - [`Error`] and [`Result`] - Crate-wide error handling
//!
//! The guard is deliberately single-threaded and synchronous: one guard instance belongs to
//! one logical scope. Construct a fresh guard per scope, or use [`ExpectedError::wrap`] for
//! the one supported reuse pattern, where each invocation of the wrapped callable re-runs
//! the full check sequence over the same instance.

pub(crate) mod error;

/// Shared fixtures used by the unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// This module provides a curated selection of the most frequently used types
/// from across the errscope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use errscope::prelude::*;
///
/// let guard = ExpectedError::new([ErrorType::of::<std::io::Error>()])?;
/// assert_eq!(Status::Pending, guard.status());
/// # Ok::<(), errscope::Error>(())
/// ```
pub mod prelude;

/// Expected-error guards and their supporting types.
///
/// This module contains the scoped guard [`ExpectedError`], the terminal
/// classification [`Status`], the expected-type descriptor [`ErrorType`], and the
/// [`GuardViolation`] error raised when an expectation is not met.
pub mod guard;

/// `errscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use errscope::{ErrorType, ExpectedError, Result};
///
/// fn guard_for_io() -> Result<ExpectedError> {
///     ExpectedError::new([ErrorType::of::<std::io::Error>()])
/// }
/// # assert!(guard_for_io().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `errscope` Error type
///
/// The main error type for all operations in this crate. Covers construction-time
/// validation failures, expectation violations, and unexpected errors bubbling out of a
/// guard with wrapping disabled.
///
/// # Examples
///
/// ```rust
/// use errscope::{Error, ErrorType, ExpectedError};
///
/// let mut guard = ExpectedError::new([ErrorType::of::<std::num::ParseIntError>()])?;
/// match guard.run(|_| Ok(42)) {
///     Ok(()) => println!("an expected error was raised"),
///     Err(Error::Violation(violation)) => println!("expectation not met: {violation}"),
///     Err(Error::Unexpected(original)) => println!("bubbled through: {original}"),
///     Err(e) => println!("error: {e}"),
/// }
/// # Ok::<(), errscope::Error>(())
/// ```
pub use error::Error;

/// Scoped guard asserting that fallible code fails with an expected error type.
///
/// See [`guard::ExpectedError`] for the full contract and examples.
pub use guard::ExpectedError;

/// Terminal classification of what happened inside a guarded scope.
///
/// See [`guard::Status`].
pub use guard::Status;

/// Descriptor identifying one error type a guard accepts.
///
/// See [`guard::ErrorType`].
pub use guard::ErrorType;

/// Error raised when a guarded scope exits without meeting its expectation.
///
/// See [`guard::GuardViolation`].
pub use guard::GuardViolation;

/// A callable wrapped by a guard, re-checked on every invocation.
///
/// See [`guard::WrappedCallable`].
pub use guard::WrappedCallable;

/// Shared handle to the error captured by a guard.
///
/// See [`guard::CapturedError`].
pub use guard::CapturedError;

/// The error channel of a guarded block.
///
/// See [`guard::DynError`].
pub use guard::DynError;
