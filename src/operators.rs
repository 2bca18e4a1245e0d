//! Elementary scalar functions and their local backward steps.
//!
//! Every function here is pure. The `*_back` functions evaluate the derivative
//! of their forward counterpart at `x` and multiply it by the upstream gradient
//! `y`, which is the single step a reverse-mode engine needs from each leaf.
//!
//! Inputs at which a result or derivative does not exist are reported as
//! [`OpError`] instead of being coerced to `0`, `inf` or `NaN`.

use crate::error::{OpError, OpResult};

/// Absolute tolerance used by [`is_close`].
pub const IS_CLOSE_TOLERANCE: f64 = 1e-2;

#[inline]
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

#[inline]
pub fn id(x: f64) -> f64 {
    x
}

#[inline]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

#[inline]
pub fn neg(x: f64) -> f64 {
    -x
}

#[inline]
pub fn lt(x: f64, y: f64) -> bool {
    x < y
}

/// Exact IEEE equality. Use [`is_close`] for a tolerant comparison.
#[inline]
pub fn eq(x: f64, y: f64) -> bool {
    x == y
}

/// Returns `x` if `x > y`, otherwise `y`.
///
/// Ties (and any comparison involving `NaN` in `x`) return `y`.
#[inline]
pub fn max(x: f64, y: f64) -> f64 {
    if x > y { x } else { y }
}

/// `|x - y| < IS_CLOSE_TOLERANCE`, an absolute rather than relative test.
#[inline]
pub fn is_close(x: f64, y: f64) -> bool {
    (x - y).abs() < IS_CLOSE_TOLERANCE
}

/// Logistic function `1 / (1 + e^-x)`.
///
/// The negative branch is evaluated as `e^x / (1 + e^x)` so that `e^-x`
/// never overflows for large negative inputs.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

#[inline]
pub fn relu(x: f64) -> f64 {
    max(0.0, x)
}

/// Natural logarithm.
///
/// # Errors
/// Returns [`OpError::Domain`] if `x <= 0`.
pub fn log(x: f64) -> OpResult<f64> {
    if x <= 0.0 {
        return Err(OpError::domain("log", x));
    }
    Ok(x.ln())
}

#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Reciprocal `1 / x`.
///
/// # Errors
/// Returns [`OpError::DivisionByZero`] if `x == 0` (either sign).
pub fn inv(x: f64) -> OpResult<f64> {
    if x == 0.0 {
        return Err(OpError::division_by_zero("inv"));
    }
    Ok(1.0 / x)
}

/// `d/dx log(x) * y`, i.e. `y / x`.
///
/// Only `x == 0` is rejected; negative `x` yields the formal value `y / x`.
///
/// # Errors
/// Returns [`OpError::DivisionByZero`] if `x == 0`.
pub fn log_back(x: f64, y: f64) -> OpResult<f64> {
    if x == 0.0 {
        return Err(OpError::division_by_zero("log_back"));
    }
    Ok(1.0 / x * y)
}

/// `d/dx (1/x) * y`, i.e. `-y / x^2`.
///
/// # Errors
/// Returns [`OpError::DivisionByZero`] if `x == 0`.
pub fn inv_back(x: f64, y: f64) -> OpResult<f64> {
    if x == 0.0 {
        return Err(OpError::division_by_zero("inv_back"));
    }
    let derivative = -1.0 / x / x;
    Ok(derivative * y)
}

/// `d/dx relu(x) * y`.
///
/// `0.0` for negative `x`, `y` untouched for positive `x`.
///
/// # Errors
/// Returns [`OpError::UndefinedDerivative`] if `x == 0`; the kink is never
/// resolved to either one-sided derivative.
pub fn relu_back(x: f64, y: f64) -> OpResult<f64> {
    if x == 0.0 {
        Err(OpError::undefined_derivative("relu_back", x))
    } else if x < 0.0 {
        Ok(0.0)
    } else {
        Ok(y)
    }
}
