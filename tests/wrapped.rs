//! Callable-wrapping usage of the guard: every invocation of the wrapped callable
//! re-runs the full check sequence over the same guard instance.

mod support;

use std::sync::Arc;

use errscope::prelude::*;
use support::{checked_div, element_at, DivisionByZero, IndexOutOfBounds};

#[test]
fn wrapped_callable_suppresses_expected_error() {
    let guard = ExpectedError::new([ErrorType::of::<DivisionByZero>()]).unwrap();
    let mut divide_by_zero = guard.wrap(|| {
        checked_div(1, 0)?;
        Ok(())
    });

    divide_by_zero.call().unwrap();

    assert_eq!(Status::ExpectedRaised, divide_by_zero.guard().status());
    assert!(divide_by_zero
        .guard()
        .captured_error()
        .unwrap()
        .is::<DivisionByZero>());
}

#[test]
fn wrapped_callable_raises_violation_on_unexpected_error() {
    let guard = ExpectedError::new([ErrorType::of::<IndexOutOfBounds>()]).unwrap();
    let mut divide_by_zero = guard.wrap(|| {
        checked_div(1, 0)?;
        Ok(())
    });

    let err = divide_by_zero.call().unwrap_err();

    match err {
        Error::Violation(violation) => {
            assert_eq!(Status::UnexpectedRaised, violation.status());
            assert!(violation.error().unwrap().is::<DivisionByZero>());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(Status::UnexpectedRaised, divide_by_zero.guard().status());
}

#[test]
fn wrapped_callable_updates_guard_before_bubbling() {
    let guard =
        ExpectedError::with_wrap_policy([ErrorType::of::<DivisionByZero>()], false).unwrap();
    let mut out_of_bounds = guard.wrap(|| {
        element_at(&[0, 7, 42], 3)?;
        Ok(())
    });

    let err = out_of_bounds.call().unwrap_err();

    // State is already terminal by the time the original error reaches the caller.
    assert_eq!(Status::UnexpectedRaised, out_of_bounds.guard().status());
    match err {
        Error::Unexpected(original) => {
            assert!(Arc::ptr_eq(
                &original,
                out_of_bounds.guard().captured_error().unwrap()
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn wrapped_callable_raises_violation_on_completion() {
    let guard = ExpectedError::new([ErrorType::of::<DivisionByZero>()]).unwrap();
    let mut well_behaved = guard.wrap(|| checked_div(8, 2).map_err(Into::into));

    let err = well_behaved.call().unwrap_err();

    match err {
        Error::Violation(violation) => {
            assert_eq!(Status::UnexpectedCompleted, violation.status());
            assert!(violation.error().is_none());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(well_behaved.guard().captured_error().is_none());
}

#[test]
fn reinvocation_overwrites_guard_state() {
    let mut divisors = [0i64, 2, 0].into_iter();
    let mut wrapped = ExpectedError::new([ErrorType::of::<DivisionByZero>()])
        .unwrap()
        .wrap(move || {
            let divisor = divisors.next().unwrap();
            checked_div(10, divisor)?;
            Ok(())
        });

    wrapped.call().unwrap();
    assert_eq!(Status::ExpectedRaised, wrapped.guard().status());
    assert!(wrapped.guard().captured_error().is_some());

    let err = wrapped.call().unwrap_err();
    assert!(matches!(err, Error::Violation(_)));
    assert_eq!(Status::UnexpectedCompleted, wrapped.guard().status());
    assert!(wrapped.guard().captured_error().is_none());

    wrapped.call().unwrap();
    assert_eq!(Status::ExpectedRaised, wrapped.guard().status());
    assert!(wrapped.guard().captured_error().is_some());
}

#[test]
fn wrapped_and_scoped_usage_are_equivalent() {
    let mut scoped = ExpectedError::new([ErrorType::of::<DivisionByZero>()]).unwrap();
    let scoped_outcome = scoped.run(|_| {
        checked_div(1, 0)?;
        Ok(())
    });

    let mut wrapped = ExpectedError::new([ErrorType::of::<DivisionByZero>()])
        .unwrap()
        .wrap(|| {
            checked_div(1, 0)?;
            Ok(())
        });
    let wrapped_outcome = wrapped.call();

    assert!(scoped_outcome.is_ok());
    assert!(wrapped_outcome.is_ok());
    assert_eq!(scoped.status(), wrapped.guard().status());
    assert!(scoped.captured_error().unwrap().is::<DivisionByZero>());
    assert!(wrapped.guard().captured_error().unwrap().is::<DivisionByZero>());
}

#[test]
fn into_guard_returns_the_backing_guard() {
    let mut wrapped = ExpectedError::new([ErrorType::of::<DivisionByZero>()])
        .unwrap()
        .wrap(|| {
            checked_div(1, 0)?;
            Ok(())
        });
    wrapped.call().unwrap();

    let guard = wrapped.into_guard();
    assert_eq!(Status::ExpectedRaised, guard.status());
    assert!(guard.captured_error().unwrap().is::<DivisionByZero>());
}
