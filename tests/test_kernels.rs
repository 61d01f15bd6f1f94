//! Tests for the kernel library.
//!
//! Tests cover:
//! - Domain, division and indeterminate-form errors
//! - Rounding semantics and precision broadcasting
//! - Trig round trips
//! - Named dispatch through the kernel tables

use approx::assert_abs_diff_eq;
use numtree::constants::{DEG_PER_RAD, E, HALF_PI, PI};
use numtree::kernels::*;
use numtree::{value, ErrorKind, Value};

fn assert_close(actual: &Value, expected: &Value) {
    assert_eq!(actual.shape(), expected.shape());
    for (a, e) in actual.scalars().zip(expected.scalars()) {
        assert_abs_diff_eq!(a, e, epsilon = 1e-9);
    }
}

#[test]
fn test_domain_errors() {
    assert_eq!(arcsin(&value!(1.5)).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(arccos(&value!([0, -2])).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(log(&value!(0)).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(log10(&value!([10, -1])).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(sqrt(&value!([[4], [-4]])).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(tan(&value!(HALF_PI)).unwrap_err().kind(), ErrorKind::DomainError);
    assert_eq!(
        power(&value!(-8), &value!(0.5)).unwrap_err().kind(),
        ErrorKind::DomainError
    );
}

#[test]
fn test_division_errors() {
    assert_eq!(modulo(&value!(9), &value!(0)).unwrap_err().kind(), ErrorKind::DivideByZero);
    assert_eq!(
        remainder(&value!([9, 8]), &value!([1, 0])).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
    assert_eq!(
        power(&value!(0), &value!(-2)).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
    assert_eq!(
        power(&value!(0), &value!(0)).unwrap_err().kind(),
        ErrorKind::UndefinedResult
    );
}

#[test]
fn test_round_examples() {
    assert_eq!(round_default(&value!(5.2)).unwrap(), value!(5));
    let r = round(&value!([4.12, 4.67, -5.8, -5.21]), &value!(10)).unwrap();
    assert_close(&r, &value!([4.1, 4.7, -5.8, -5.2]));
}

#[test]
fn test_round_with_precision_tree() {
    let values = value!([3.14159, [2.71828, 1.41421]]);
    let precisions = value!([100, [10, 1000]]);
    let r = round(&values, &precisions).unwrap();
    assert_close(&r, &value!([3.14, [2.7, 1.414]]));
}

#[test]
fn test_round_precision_mismatch() {
    let err = round(&value!([1, 2, 3]), &value!([10, 10])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn test_sin_arcsin_round_trip() {
    let p = value!(1_000_000);
    for x in [-1.0, -0.75, -0.1, 0.0, 0.33, 0.9, 1.0] {
        let v = value!(x);
        let back = sin(&arcsin(&v).unwrap()).unwrap();
        assert_close(&round(&back, &p).unwrap(), &round(&v, &p).unwrap());
    }
}

#[test]
fn test_trig_values() {
    assert_close(&sin(&value!([0, HALF_PI, PI])).unwrap(), &value!([0, 1, 0]));
    assert_close(&cos(&value!([0, PI])).unwrap(), &value!([1, -1]));
    assert_close(&arctan(&value!(1)).unwrap(), &value!(PI / 4.0));
    assert_close(&tanh(&value!(0)).unwrap(), &value!(0));
    assert_close(&cosh(&value!(0)).unwrap(), &value!(1));
    assert_close(&sinh(&value!(0)).unwrap(), &value!(0));
}

#[test]
fn test_angle_constants() {
    assert_close(&degrees(&value!([1, [PI]])).unwrap(), &value!([DEG_PER_RAD, [180]]));
    assert_close(&radians(&value!(DEG_PER_RAD)).unwrap(), &value!(1));
    assert_close(&log(&value!(E)).unwrap(), &value!(1));
}

#[test]
fn test_sign_abs_floor_ceil() {
    let v = value!([-2.5, [0, 3.2]]);
    assert_eq!(sign(&v).unwrap(), value!([-1, [0, 1]]));
    assert_eq!(abs(&v).unwrap(), value!([2.5, [0, 3.2]]));
    assert_eq!(floor(&v).unwrap(), value!([-3, [0, 3]]));
    assert_eq!(ceil(&v).unwrap(), value!([-2, [0, 4]]));
    assert_eq!(trunc(&v).unwrap(), value!([-2, [0, 3]]));
    assert_eq!(negate(&v).unwrap(), value!([2.5, [0, -3.2]]));
}

#[test]
fn test_exponential_family() {
    assert_close(&exp(&value!([0, 1])).unwrap(), &value!([1, E]));
    assert_close(&log10(&value!([1, 100])).unwrap(), &value!([0, 2]));
    assert_close(&log2(&value!(1024)).unwrap(), &value!(10));
    assert_close(&power(&value!([2, [3, -2]]), &value!(3)).unwrap(), &value!([8, [27, -8]]));
}

#[test]
fn test_bitwise_family() {
    assert_eq!(bit_and(&value!(12), &value!([10, 4])).unwrap(), value!([8, 4]));
    assert_eq!(bit_or(&value!([1, 2]), &value!([4, 8])).unwrap(), value!([5, 10]));
    assert_eq!(shift_left(&value!([1, 3]), &value!(2)).unwrap(), value!([4, 12]));
    assert_eq!(shift_right(&value!(-8), &value!(1)).unwrap(), value!(-4));
    assert_eq!(bit_not(&value!([[-1]])).unwrap(), value!([[0]]));
}

#[test]
fn test_inputs_are_not_mutated() {
    let v = value!([-1, [4, 9]]);
    let snapshot = v.clone();
    let _ = abs(&v).unwrap();
    let _ = sqrt(&v);
    let _ = add(&v, &v).unwrap();
    assert_eq!(v, snapshot);
}

#[test]
fn test_named_tables() {
    let v = value!([1, [4]]);
    let op: UnaryOp = "sqrt".parse().unwrap();
    assert_eq!(op.eval(&v).unwrap(), value!([1, [2]]));

    let op: BinaryOp = "power".parse().unwrap();
    assert_eq!(op.eval(&v, &value!(2)).unwrap(), value!([1, [16]]));

    let r: Reduction = "sum".parse().unwrap();
    assert_eq!(r.eval(&v).unwrap(), 5.0);

    assert_eq!(UnaryOp::Log10.to_string(), "log10");
    assert_eq!(BinaryOp::Modulo.to_string(), "mod");
}
