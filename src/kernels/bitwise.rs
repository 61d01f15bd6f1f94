//! Bitwise kernels over doubles treated as signed 32-bit integers.
//!
//! # Conversion
//!
//! Each operand is truncated toward zero, reduced modulo 2^32 and
//! reinterpreted as an `i32`. Non-finite scalars become 0. Shift counts use
//! only their low 5 bits.
//!
//! # Examples
//!
//! ```
//! use numtree::kernels::{bit_and, bit_not, shift_right_unsigned, to_int32};
//! use numtree::value;
//!
//! assert_eq!(to_int32(4_294_967_297.0), 1);
//! assert_eq!(bit_and(&value!([12, 10]), &value!(6)).unwrap(), value!([4, 2]));
//! assert_eq!(bit_not(&value!(0)).unwrap(), value!(-1));
//! assert_eq!(shift_right_unsigned(&value!(-1), &value!(28)).unwrap(), value!(15));
//! ```

use super::{BinaryOp, UnaryOp};
use crate::constants::TWO_POW_32;
use crate::{Result, Value};

/// Convert a double to its signed 32-bit bit pattern.
#[inline]
pub fn to_int32(x: f64) -> i32 {
    if !x.is_finite() {
        return 0;
    }
    let wrapped = x.trunc().rem_euclid(TWO_POW_32);
    if wrapped >= TWO_POW_32 / 2.0 {
        (wrapped - TWO_POW_32) as i32
    } else {
        wrapped as i32
    }
}

#[inline]
fn shift_count(x: f64) -> u32 {
    (to_int32(x) as u32) & 31
}

#[inline]
pub(crate) fn bit_and_kernel(a: f64, b: f64) -> f64 {
    (to_int32(a) & to_int32(b)) as f64
}

#[inline]
pub(crate) fn bit_or_kernel(a: f64, b: f64) -> f64 {
    (to_int32(a) | to_int32(b)) as f64
}

#[inline]
pub(crate) fn bit_xor_kernel(a: f64, b: f64) -> f64 {
    (to_int32(a) ^ to_int32(b)) as f64
}

#[inline]
pub(crate) fn bit_not_kernel(x: f64) -> f64 {
    (!to_int32(x)) as f64
}

#[inline]
pub(crate) fn shift_left_kernel(a: f64, b: f64) -> f64 {
    to_int32(a).wrapping_shl(shift_count(b)) as f64
}

#[inline]
pub(crate) fn shift_right_kernel(a: f64, b: f64) -> f64 {
    to_int32(a).wrapping_shr(shift_count(b)) as f64
}

#[inline]
pub(crate) fn shift_right_unsigned_kernel(a: f64, b: f64) -> f64 {
    ((to_int32(a) as u32) >> shift_count(b)) as f64
}

pub fn bit_and(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::BitAnd.eval(a, b)
}

pub fn bit_or(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::BitOr.eval(a, b)
}

pub fn bit_xor(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::BitXor.eval(a, b)
}

pub fn bit_not(v: &Value) -> Result<Value> {
    UnaryOp::BitNot.eval(v)
}

/// Left shift, wrapping within 32 bits.
pub fn shift_left(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::ShiftLeft.eval(a, b)
}

/// Arithmetic (sign-extending) right shift.
pub fn shift_right(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::ShiftRight.eval(a, b)
}

/// Logical right shift; the result is always non-negative.
pub fn shift_right_unsigned(a: &Value, b: &Value) -> Result<Value> {
    BinaryOp::ShiftRightUnsigned.eval(a, b)
}
