//! Elementwise arithmetic, sign and rounding kernels.

use super::{BinaryOp, UnaryOp};
use crate::{NumtreeError, Result, Value};

/// -1, 0 or 1 according to the sign of `x`; NaN stays NaN.
#[inline]
pub(crate) fn sign_kernel(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

#[inline]
pub(crate) fn ceil_kernel(x: f64) -> f64 {
    -(-x).floor()
}

pub(crate) fn divide_kernel(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(NumtreeError::DivideByZero { op: "divide" });
    }
    Ok(a / b)
}

/// Floored modulo: the result takes the sign of the divisor.
pub(crate) fn modulo_kernel(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(NumtreeError::DivideByZero { op: "mod" });
    }
    Ok(a - (a / b).floor() * b)
}

/// Truncated remainder: the result takes the sign of the dividend.
pub(crate) fn remainder_kernel(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(NumtreeError::DivideByZero { op: "remainder" });
    }
    Ok(a % b)
}

/// Round the magnitude of `value` to the nearest `1 / precision`, ties away
/// from zero, then restore the sign.
pub(crate) fn round_kernel(value: f64, precision: f64) -> Result<f64> {
    if precision == 0.0 {
        return Err(NumtreeError::DivideByZero { op: "round" });
    }
    if precision < 0.0 || !precision.is_finite() {
        return Err(NumtreeError::DomainError {
            op: "round",
            value: precision,
        });
    }
    let magnitude = (0.5 + value.abs() * precision).floor() / precision;
    if value < 0.0 && magnitude != 0.0 {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Absolute value of every scalar.
///
/// # Examples
///
/// ```
/// use numtree::{kernels::abs, value};
///
/// assert_eq!(abs(&value!([-1, [2, -3.5]])).unwrap(), value!([1, [2, 3.5]]));
/// ```
pub fn abs(v: &Value) -> Result<Value> {
    UnaryOp::Abs.eval(v)
}

/// -1, 0 or 1 per scalar.
pub fn sign(v: &Value) -> Result<Value> {
    UnaryOp::Sign.eval(v)
}

pub fn floor(v: &Value) -> Result<Value> {
    UnaryOp::Floor.eval(v)
}

/// Smallest integer not less than each scalar, computed as `-floor(-x)`.
pub fn ceil(v: &Value) -> Result<Value> {
    UnaryOp::Ceil.eval(v)
}

pub fn trunc(v: &Value) -> Result<Value> {
    UnaryOp::Trunc.eval(v)
}

pub fn negate(v: &Value) -> Result<Value> {
    UnaryOp::Negate.eval(v)
}

pub fn add(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::Add.eval(a, b)
}

pub fn subtract(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::Subtract.eval(a, b)
}

pub fn multiply(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::Multiply.eval(a, b)
}

/// Elementwise division; any zero divisor fails with `DivideByZero`.
pub fn divide(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::Divide.eval(a, b)
}

/// Floored modulo, `a - floor(a / b) * b`.
///
/// # Examples
///
/// ```
/// use numtree::{kernels::modulo, value};
///
/// assert_eq!(modulo(&value!([7, -7]), &value!(3)).unwrap(), value!([1, 2]));
/// assert!(modulo(&value!(9), &value!(0)).is_err());
/// ```
pub fn modulo(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::Modulo.eval(a, b)
}

/// Truncated remainder, sign of the dividend.
pub fn remainder(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::Remainder.eval(a, b)
}

/// Round `value` to the nearest multiple of `1 / precision`.
///
/// `value` and `precision` broadcast against each other like any other
/// binary kernel, so a tree of values can be rounded with a tree of
/// precisions of a different shape.
///
/// # Errors
///
/// - `DivideByZero` for a zero precision
/// - `DomainError` for a negative or non-finite precision
///
/// # Examples
///
/// ```
/// use numtree::{kernels::round, value};
///
/// let r = round(&value!([4.12, 4.67]), &value!(10)).unwrap();
/// assert_eq!(r.to_string(), "[4.1, 4.7]");
/// ```
pub fn round(value: &Value, precision: &Value) -> Result<Value> {
    BinaryOp::Round.eval(value, precision)
}

/// [`round`] to the nearest integer.
pub fn round_default(value: &Value) -> Result<Value> {
    round(value, &Value::Scalar(1.0))
}
