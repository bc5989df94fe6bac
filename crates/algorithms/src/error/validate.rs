//! Validation utilities used at component boundaries

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a dimension matches the expected field degree
#[inline(always)]
pub fn dimension(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::DimensionMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a dimension does not exceed the field degree
#[inline(always)]
pub fn max_dimension(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::DimensionMismatch {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that an element to be inverted is nonzero
#[inline(always)]
pub fn nonzero(is_zero: bool, context: &'static str) -> Result<()> {
    if is_zero {
        return Err(Error::UndefinedInverse { context });
    }
    Ok(())
}
