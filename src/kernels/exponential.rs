//! Exponential, logarithmic, power and root kernels.

use super::{BinaryOp, UnaryOp};
use crate::{NumtreeError, Result, Value};

/// Logarithm guard: only strictly positive arguments are accepted.
pub(crate) fn log_kernel(op: &'static str, x: f64, f: fn(f64) -> f64) -> Result<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(NumtreeError::DomainError { op, value: x });
    }
    Ok(f(x))
}

pub(crate) fn sqrt_kernel(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(NumtreeError::DomainError { op: "sqrt", value: x });
    }
    Ok(x.sqrt())
}

pub(crate) fn power_kernel(base: f64, exponent: f64) -> Result<f64> {
    if base == 0.0 {
        if exponent == 0.0 {
            return Err(NumtreeError::UndefinedResult { op: "power" });
        }
        if exponent < 0.0 {
            return Err(NumtreeError::DivideByZero { op: "power" });
        }
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(NumtreeError::DomainError {
            op: "power",
            value: base,
        });
    }
    Ok(base.powf(exponent))
}

pub fn exp(v: &Value) -> Result<Value> {
    UnaryOp::Exp.eval(v)
}

/// Natural logarithm; fails with `DomainError` for scalars ≤ 0.
///
/// # Examples
///
/// ```
/// use numtree::{kernels::log, value, ErrorKind};
///
/// assert_eq!(log(&value!([1])).unwrap(), value!([0]));
/// assert_eq!(log(&value!(0)).unwrap_err().kind(), ErrorKind::DomainError);
/// ```
pub fn log(v: &Value) -> Result<Value> {
    UnaryOp::Log.eval(v)
}

/// Base-10 logarithm; same domain as [`log`].
pub fn log10(v: &Value) -> Result<Value> {
    UnaryOp::Log10.eval(v)
}

/// Base-2 logarithm; same domain as [`log`].
pub fn log2(v: &Value) -> Result<Value> {
    UnaryOp::Log2.eval(v)
}

/// Square root; fails with `DomainError` for negative scalars.
pub fn sqrt(v: &Value) -> Result<Value> {
    UnaryOp::Sqrt.eval(v)
}

/// `base` raised to `exponent`, broadcasting both.
///
/// # Errors
///
/// - `DomainError`: negative base with a fractional exponent
/// - `DivideByZero`: zero base with a negative exponent
/// - `UndefinedResult`: `power(0, 0)`
pub fn power(base: &Value, exponent: &Value) -> Result<Value> {
    BinaryOp::Power.eval(base, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_domain() {
        for x in [0.0, -1.0, f64::NAN] {
            let err = log_kernel("log", x, f64::ln).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DomainError);
        }
        assert_relative_eq!(log_kernel("log10", 1000.0, f64::log10).unwrap(), 3.0);
        assert_relative_eq!(log_kernel("log2", 8.0, f64::log2).unwrap(), 3.0);
    }

    #[test]
    fn test_sqrt_domain() {
        assert_eq!(sqrt_kernel(-4.0).unwrap_err().kind(), ErrorKind::DomainError);
        assert_eq!(sqrt_kernel(9.0).unwrap(), 3.0);
        assert_eq!(sqrt_kernel(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_power_edge_cases() {
        assert_eq!(
            power_kernel(0.0, 0.0).unwrap_err().kind(),
            ErrorKind::UndefinedResult
        );
        assert_eq!(
            power_kernel(0.0, -1.0).unwrap_err().kind(),
            ErrorKind::DivideByZero
        );
        assert_eq!(
            power_kernel(-8.0, 1.0 / 3.0).unwrap_err().kind(),
            ErrorKind::DomainError
        );
        assert_eq!(power_kernel(-2.0, 3.0).unwrap(), -8.0);
        assert_eq!(power_kernel(0.0, 2.0).unwrap(), 0.0);
        assert_relative_eq!(power_kernel(4.0, 0.5).unwrap(), 2.0);
    }

    #[test]
    fn test_power_broadcast_error_position() {
        let err = power(&value!([2, [0, -1]]), &value!([2, [-1, 0.5]])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivideByZero);
    }

    #[test]
    fn test_exp_log_inverse() {
        let v = value!([0.5, [1, 2]]);
        let back = log(&exp(&v).unwrap()).unwrap();
        for (a, b) in back.scalars().zip(v.scalars()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }
}
