//! Reductions - fold every scalar of a value into one number.
//!
//! Scalars are visited depth-first, left to right, so `[10, [11.2], 8.1]`
//! folds `10`, `11.2`, `8.1` in that order.
//!
//! | reduction | identity | combine |
//! |-----------|----------|---------|
//! | sum | 0 | `+` |
//! | product | 1 | `*` |
//! | min | +∞ | smaller of the two |
//! | max | -∞ | larger of the two |
//! | or_all | 0 | 32-bit bitwise or |
//!
//! The product is seeded with the multiplicative identity, never the
//! additive one, so `product([10, 20, 30])` is 6000. A NaN anywhere in the
//! value makes `min` and `max` NaN rather than being skipped.
//!
//! # Examples
//!
//! ```
//! use numtree::kernels::{max, min, product, sum};
//! use numtree::value;
//!
//! let v = value!([10, 15.4, 3]);
//! assert_eq!(min(&v).unwrap(), 3.0);
//! assert_eq!(max(&v).unwrap(), 15.4);
//! assert_eq!(product(&value!([10, 20, 30])).unwrap(), 6000.0);
//! assert!((sum(&value!([10, [11.2], 8.1])).unwrap() - 29.3).abs() < 1e-9);
//! ```

use super::bitwise::bit_or_kernel;
use crate::broadcast::Engine;
use crate::{NumtreeError, Result, Value};
use std::fmt;
use std::str::FromStr;

/// Table of folds over every contained scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    Sum,
    Product,
    Min,
    Max,
    OrAll,
}

impl Reduction {
    pub const ALL: [Reduction; 5] = [
        Reduction::Sum,
        Reduction::Product,
        Reduction::Min,
        Reduction::Max,
        Reduction::OrAll,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Reduction::Sum => "sum",
            Reduction::Product => "product",
            Reduction::Min => "min",
            Reduction::Max => "max",
            Reduction::OrAll => "or_all",
        }
    }

    /// Seed of the fold; also the result for a value with no scalars.
    pub fn identity(self) -> f64 {
        match self {
            Reduction::Sum | Reduction::OrAll => 0.0,
            Reduction::Product => 1.0,
            Reduction::Min => f64::INFINITY,
            Reduction::Max => f64::NEG_INFINITY,
        }
    }

    pub fn combine(self, acc: f64, x: f64) -> f64 {
        match self {
            Reduction::Sum => acc + x,
            Reduction::Product => acc * x,
            Reduction::Min if acc.is_nan() || x.is_nan() => f64::NAN,
            Reduction::Max if acc.is_nan() || x.is_nan() => f64::NAN,
            Reduction::Min => acc.min(x),
            Reduction::Max => acc.max(x),
            Reduction::OrAll => bit_or_kernel(acc, x),
        }
    }

    pub fn eval(self, v: &Value) -> Result<f64> {
        self.eval_with(&Engine::default(), v)
    }

    pub fn eval_with(self, engine: &Engine, v: &Value) -> Result<f64> {
        engine.reduce(v, self.identity(), |acc, x| Ok(self.combine(acc, x)))
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reduction {
    type Err = NumtreeError;

    fn from_str(s: &str) -> Result<Self> {
        Reduction::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| NumtreeError::InvalidParameter(format!("unknown reduction '{}'", s)))
    }
}

/// Sum of every scalar; 0 for a value with none.
pub fn sum(v: &Value) -> Result<f64> {
    Reduction::Sum.eval(v)
}

/// Product of every scalar; 1 for a value with none.
pub fn product(v: &Value) -> Result<f64> {
    Reduction::Product.eval(v)
}

/// Smallest scalar; +∞ for a value with none, NaN if any scalar is NaN.
pub fn min(v: &Value) -> Result<f64> {
    Reduction::Min.eval(v)
}

/// Largest scalar; -∞ for a value with none, NaN if any scalar is NaN.
pub fn max(v: &Value) -> Result<f64> {
    Reduction::Max.eval(v)
}

/// Bitwise or of every scalar's 32-bit pattern.
pub fn or_all(v: &Value) -> Result<f64> {
    Reduction::OrAll.eval(v)
}

/// Arithmetic mean of every scalar.
///
/// # Errors
///
/// `UndefinedResult` if `v` contains no scalars.
pub fn mean(v: &Value) -> Result<f64> {
    let n = v.count();
    if n == 0 {
        return Err(NumtreeError::UndefinedResult { op: "mean" });
    }
    Ok(sum(v)? / n as f64)
}
