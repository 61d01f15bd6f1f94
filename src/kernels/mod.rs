//! Kernel library - scalar operations dispatched through the broadcast engine.
//!
//! Every public function here is a scalar kernel plus one `map1` or `map2`
//! call; none of them look at the shape of their arguments. The kernels are
//! also reachable by name through the [`UnaryOp`], [`BinaryOp`] and
//! [`Reduction`] tables, which is how the WASM bindings dispatch.
//!
//! # Kernel Families
//!
//! - [`elementwise`]: abs, sign, rounding, arithmetic, modulo/remainder
//! - [`trig`]: circular and hyperbolic functions, angle conversion
//! - [`exponential`]: exp, logarithms, power, sqrt
//! - [`bitwise`]: 32-bit integer bit operations on doubles
//! - [`reduce`]: sum, product, min, max, or_all, mean
//!
//! # Examples
//!
//! ```
//! use numtree::kernels::{BinaryOp, UnaryOp};
//! use numtree::value;
//!
//! let op: UnaryOp = "abs".parse().unwrap();
//! assert_eq!(op.eval(&value!([-1, [2, -3]])).unwrap(), value!([1, [2, 3]]));
//!
//! let pow = BinaryOp::Power.eval(&value!([2, 3]), &value!(2)).unwrap();
//! assert_eq!(pow, value!([4, 9]));
//! ```

pub mod bitwise;
pub mod elementwise;
pub mod exponential;
pub mod reduce;
pub mod trig;

use crate::broadcast::Engine;
use crate::config::DEFAULT_TAN_POLE_EPSILON;
use crate::constants::DEG_PER_RAD;
use crate::{NumtreeError, Result, Value};
use std::fmt;
use std::str::FromStr;

pub use bitwise::*;
pub use elementwise::*;
pub use exponential::*;
pub use reduce::*;
pub use trig::*;

/// Table of single-argument kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Abs,
    Sign,
    Floor,
    Ceil,
    Trunc,
    Negate,
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    Sinh,
    Cosh,
    Tanh,
    Degrees,
    Radians,
    Exp,
    Log,
    Log10,
    Log2,
    Sqrt,
    BitNot,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 23] = [
        UnaryOp::Abs,
        UnaryOp::Sign,
        UnaryOp::Floor,
        UnaryOp::Ceil,
        UnaryOp::Trunc,
        UnaryOp::Negate,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Tan,
        UnaryOp::Arcsin,
        UnaryOp::Arccos,
        UnaryOp::Arctan,
        UnaryOp::Sinh,
        UnaryOp::Cosh,
        UnaryOp::Tanh,
        UnaryOp::Degrees,
        UnaryOp::Radians,
        UnaryOp::Exp,
        UnaryOp::Log,
        UnaryOp::Log10,
        UnaryOp::Log2,
        UnaryOp::Sqrt,
        UnaryOp::BitNot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Abs => "abs",
            UnaryOp::Sign => "sign",
            UnaryOp::Floor => "floor",
            UnaryOp::Ceil => "ceil",
            UnaryOp::Trunc => "trunc",
            UnaryOp::Negate => "negate",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Arcsin => "arcsin",
            UnaryOp::Arccos => "arccos",
            UnaryOp::Arctan => "arctan",
            UnaryOp::Sinh => "sinh",
            UnaryOp::Cosh => "cosh",
            UnaryOp::Tanh => "tanh",
            UnaryOp::Degrees => "degrees",
            UnaryOp::Radians => "radians",
            UnaryOp::Exp => "exp",
            UnaryOp::Log => "log",
            UnaryOp::Log10 => "log10",
            UnaryOp::Log2 => "log2",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::BitNot => "bit_not",
        }
    }

    /// Apply the kernel to one scalar.
    pub fn apply(self, x: f64) -> Result<f64> {
        match self {
            UnaryOp::Abs => Ok(x.abs()),
            UnaryOp::Sign => Ok(elementwise::sign_kernel(x)),
            UnaryOp::Floor => Ok(x.floor()),
            UnaryOp::Ceil => Ok(elementwise::ceil_kernel(x)),
            UnaryOp::Trunc => Ok(x.trunc()),
            UnaryOp::Negate => Ok(-x),
            UnaryOp::Sin => Ok(x.sin()),
            UnaryOp::Cos => Ok(x.cos()),
            UnaryOp::Tan => trig::tan_kernel(x, DEFAULT_TAN_POLE_EPSILON),
            UnaryOp::Arcsin => trig::arcsin_kernel(x),
            UnaryOp::Arccos => trig::arccos_kernel(x),
            UnaryOp::Arctan => Ok(x.atan()),
            UnaryOp::Sinh => Ok(x.sinh()),
            UnaryOp::Cosh => Ok(x.cosh()),
            UnaryOp::Tanh => Ok(x.tanh()),
            UnaryOp::Degrees => Ok(x * DEG_PER_RAD),
            UnaryOp::Radians => Ok(x / DEG_PER_RAD),
            UnaryOp::Exp => Ok(x.exp()),
            UnaryOp::Log => exponential::log_kernel("log", x, f64::ln),
            UnaryOp::Log10 => exponential::log_kernel("log10", x, f64::log10),
            UnaryOp::Log2 => exponential::log_kernel("log2", x, f64::log2),
            UnaryOp::Sqrt => exponential::sqrt_kernel(x),
            UnaryOp::BitNot => Ok(bitwise::bit_not_kernel(x)),
        }
    }

    /// Apply the kernel to every scalar of `v`.
    pub fn eval(self, v: &Value) -> Result<Value> {
        self.eval_with(&Engine::default(), v)
    }

    /// [`eval`](Self::eval) on a specific engine.
    pub fn eval_with(self, engine: &Engine, v: &Value) -> Result<Value> {
        engine.map1(v, |x| self.apply(x))
    }
}

/// Table of two-argument kernels. Both operands broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Remainder,
    Power,
    Round,
    Arctan2,
    Hypot,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 16] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulo,
        BinaryOp::Remainder,
        BinaryOp::Power,
        BinaryOp::Round,
        BinaryOp::Arctan2,
        BinaryOp::Hypot,
        BinaryOp::BitAnd,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::ShiftLeft,
        BinaryOp::ShiftRight,
        BinaryOp::ShiftRightUnsigned,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
            BinaryOp::Modulo => "mod",
            BinaryOp::Remainder => "remainder",
            BinaryOp::Power => "power",
            BinaryOp::Round => "round",
            BinaryOp::Arctan2 => "arctan2",
            BinaryOp::Hypot => "hypot",
            BinaryOp::BitAnd => "bit_and",
            BinaryOp::BitOr => "bit_or",
            BinaryOp::BitXor => "bit_xor",
            BinaryOp::ShiftLeft => "shift_left",
            BinaryOp::ShiftRight => "shift_right",
            BinaryOp::ShiftRightUnsigned => "shift_right_unsigned",
        }
    }

    /// Apply the kernel to one pair of scalars.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            BinaryOp::Add => Ok(a + b),
            BinaryOp::Subtract => Ok(a - b),
            BinaryOp::Multiply => Ok(a * b),
            BinaryOp::Divide => elementwise::divide_kernel(a, b),
            BinaryOp::Modulo => elementwise::modulo_kernel(a, b),
            BinaryOp::Remainder => elementwise::remainder_kernel(a, b),
            BinaryOp::Power => exponential::power_kernel(a, b),
            BinaryOp::Round => elementwise::round_kernel(a, b),
            BinaryOp::Arctan2 => Ok(a.atan2(b)),
            BinaryOp::Hypot => Ok(a.hypot(b)),
            BinaryOp::BitAnd => Ok(bitwise::bit_and_kernel(a, b)),
            BinaryOp::BitOr => Ok(bitwise::bit_or_kernel(a, b)),
            BinaryOp::BitXor => Ok(bitwise::bit_xor_kernel(a, b)),
            BinaryOp::ShiftLeft => Ok(bitwise::shift_left_kernel(a, b)),
            BinaryOp::ShiftRight => Ok(bitwise::shift_right_kernel(a, b)),
            BinaryOp::ShiftRightUnsigned => Ok(bitwise::shift_right_unsigned_kernel(a, b)),
        }
    }

    /// Apply the kernel across `a` and `b` with broadcasting.
    pub fn eval(self, a: &Value, b: &Value) -> Result<Value> {
        self.eval_with(&Engine::default(), a, b)
    }

    /// [`eval`](Self::eval) on a specific engine.
    pub fn eval_with(self, engine: &Engine, a: &Value, b: &Value) -> Result<Value> {
        engine.map2(a, b, |x, y| self.apply(x, y))
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryOp {
    type Err = NumtreeError;

    fn from_str(s: &str) -> Result<Self> {
        UnaryOp::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| NumtreeError::InvalidParameter(format!("unknown unary kernel '{}'", s)))
    }
}

impl FromStr for BinaryOp {
    type Err = NumtreeError;

    fn from_str(s: &str) -> Result<Self> {
        BinaryOp::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| NumtreeError::InvalidParameter(format!("unknown binary kernel '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_names_round_trip() {
        for op in UnaryOp::ALL {
            assert_eq!(op.name().parse::<UnaryOp>().unwrap(), op);
        }
        for op in BinaryOp::ALL {
            assert_eq!(op.name().parse::<BinaryOp>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "cube".parse::<UnaryOp>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        let err = "xor".parse::<BinaryOp>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn test_table_matches_functions() {
        let v = value!([0.25, [-0.5, 0.75]]);
        assert_eq!(UnaryOp::Arcsin.eval(&v).unwrap(), arcsin(&v).unwrap());
        assert_eq!(UnaryOp::Abs.eval(&v).unwrap(), abs(&v).unwrap());
        assert_eq!(
            BinaryOp::Round.eval(&v, &value!(10)).unwrap(),
            round(&v, &value!(10)).unwrap()
        );
    }

    #[test]
    fn test_eval_with_engine_depth() {
        let engine = Engine::new(1);
        let err = UnaryOp::Abs.eval_with(&engine, &value!([[1]])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
    }
}
