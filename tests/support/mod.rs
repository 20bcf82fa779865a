//! Sample error hierarchy shared by the integration tests.

#![allow(dead_code)]

use thiserror::Error;

/// Failure raised when a division has a zero divisor.
#[derive(Debug, Error)]
#[error("attempted to divide {dividend} by zero")]
pub struct DivisionByZero {
    pub dividend: i64,
}

/// Failure raised when a slice is accessed past its end.
#[derive(Debug, Error)]
#[error("index {index} out of bounds for length {len}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// High-level failure wrapping the arithmetic error that caused it.
#[derive(Debug, Error)]
#[error("statistics computation failed")]
pub struct ComputationFailed {
    #[source]
    pub cause: DivisionByZero,
}

pub fn checked_div(dividend: i64, divisor: i64) -> Result<i64, DivisionByZero> {
    if divisor == 0 {
        return Err(DivisionByZero { dividend });
    }
    Ok(dividend / divisor)
}

pub fn element_at(values: &[i64], index: usize) -> Result<i64, IndexOutOfBounds> {
    values.get(index).copied().ok_or(IndexOutOfBounds {
        index,
        len: values.len(),
    })
}

pub fn mean(values: &[i64]) -> Result<i64, ComputationFailed> {
    let total: i64 = values.iter().sum();
    checked_div(total, values.len() as i64).map_err(|cause| ComputationFailed { cause })
}
