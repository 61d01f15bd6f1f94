//! Trigonometric kernels.
//!
//! Angles are in radians. The inverse functions reject inputs outside
//! `[-1, 1]` and `tan` rejects odd multiples of π/2 instead of returning a
//! huge finite number.

use super::{BinaryOp, UnaryOp};
use crate::broadcast::map1;
use crate::{NumtreeError, Result, Value};

pub(crate) fn tan_kernel(x: f64, pole_epsilon: f64) -> Result<f64> {
    if x.cos().abs() <= pole_epsilon {
        return Err(NumtreeError::DomainError { op: "tan", value: x });
    }
    Ok(x.tan())
}

pub(crate) fn arcsin_kernel(x: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(NumtreeError::DomainError {
            op: "arcsin",
            value: x,
        });
    }
    Ok(x.asin())
}

pub(crate) fn arccos_kernel(x: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(NumtreeError::DomainError {
            op: "arccos",
            value: x,
        });
    }
    Ok(x.acos())
}

pub fn sin(v: &Value) -> Result<Value> {
    UnaryOp::Sin.eval(v)
}

pub fn cos(v: &Value) -> Result<Value> {
    UnaryOp::Cos.eval(v)
}

/// Tangent; fails with `DomainError` at odd multiples of π/2.
///
/// # Examples
///
/// ```
/// use numtree::{constants::HALF_PI, kernels::tan, value, ErrorKind};
///
/// assert!(tan(&value!([0, 1])).is_ok());
/// assert_eq!(tan(&value!(3.0 * HALF_PI)).unwrap_err().kind(), ErrorKind::DomainError);
/// ```
pub fn tan(v: &Value) -> Result<Value> {
    UnaryOp::Tan.eval(v)
}

/// [`tan`] with an explicit pole tolerance on |cos x|.
pub fn tan_with_epsilon(v: &Value, pole_epsilon: f64) -> Result<Value> {
    map1(v, |x| tan_kernel(x, pole_epsilon))
}

/// Inverse sine; fails with `DomainError` outside `[-1, 1]`.
pub fn arcsin(v: &Value) -> Result<Value> {
    UnaryOp::Arcsin.eval(v)
}

/// Inverse cosine; fails with `DomainError` outside `[-1, 1]`.
pub fn arccos(v: &Value) -> Result<Value> {
    UnaryOp::Arccos.eval(v)
}

pub fn arctan(v: &Value) -> Result<Value> {
    UnaryOp::Arctan.eval(v)
}

/// Four-quadrant inverse tangent of `y / x`.
pub fn arctan2(y: &Value, x: &Value) -> Result<Value> {
    BinaryOp::Arctan2.eval(y, x)
}

pub fn sinh(v: &Value) -> Result<Value> {
    UnaryOp::Sinh.eval(v)
}

pub fn cosh(v: &Value) -> Result<Value> {
    UnaryOp::Cosh.eval(v)
}

pub fn tanh(v: &Value) -> Result<Value> {
    UnaryOp::Tanh.eval(v)
}

/// Radians to degrees.
pub fn degrees(v: &Value) -> Result<Value> {
    UnaryOp::Degrees.eval(v)
}

/// Degrees to radians.
pub fn radians(v: &Value) -> Result<Value> {
    UnaryOp::Radians.eval(v)
}

/// `sqrt(a² + b²)` without intermediate overflow.
pub fn hypot(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::Hypot.eval(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TAN_POLE_EPSILON;
    use crate::constants::{HALF_PI, PI};
    use crate::ErrorKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_inverse_domain() {
        assert_eq!(
            arcsin_kernel(1.5).unwrap_err().kind(),
            ErrorKind::DomainError
        );
        assert_eq!(
            arccos_kernel(-1.0001).unwrap_err().kind(),
            ErrorKind::DomainError
        );
        assert_abs_diff_eq!(arcsin_kernel(1.0).unwrap(), HALF_PI);
        assert_abs_diff_eq!(arccos_kernel(-1.0).unwrap(), PI);
        assert!(arcsin_kernel(f64::NAN).is_err());
    }

    #[test]
    fn test_tan_poles() {
        for k in [-3.0, -1.0, 1.0, 3.0, 5.0] {
            let err = tan_kernel(k * HALF_PI, DEFAULT_TAN_POLE_EPSILON).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DomainError);
        }
        assert_abs_diff_eq!(tan_kernel(PI, DEFAULT_TAN_POLE_EPSILON).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            tan_kernel(PI / 4.0, DEFAULT_TAN_POLE_EPSILON).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tan_custom_epsilon() {
        let near_pole = value!(HALF_PI - 1e-6);
        assert!(tan(&near_pole).is_ok());
        assert!(tan_with_epsilon(&near_pole, 1e-5).is_err());
    }

    #[test]
    fn test_arcsin_error_in_container() {
        let err = arcsin(&value!([0.5, [0.1, 1.5]])).unwrap_err();
        assert!(matches!(err, NumtreeError::DomainError { op: "arcsin", value } if value == 1.5));
    }

    #[test]
    fn test_angle_conversion() {
        let deg = degrees(&value!([PI, [HALF_PI]])).unwrap();
        let flat = deg.flatten();
        assert_abs_diff_eq!(flat[0], 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(flat[1], 90.0, epsilon = 1e-12);
        let rad = radians(&deg).unwrap();
        assert_abs_diff_eq!(rad.flatten()[0], PI, epsilon = 1e-12);
    }

    #[test]
    fn test_arctan2_and_hypot() {
        let angles = arctan2(&value!([1, -1]), &value!(0)).unwrap();
        assert_abs_diff_eq!(angles.flatten()[0], HALF_PI);
        assert_abs_diff_eq!(angles.flatten()[1], -HALF_PI);
        assert_eq!(hypot(&value!(3), &value!([4])).unwrap(), value!([5]));
    }
}
