//! Broadcast engine - Shape-polymorphic dispatch of scalar kernels.
//!
//! This module is the only place that knows how values nest. Every kernel
//! in the crate is a plain scalar function handed to one of three drivers:
//!
//! - [`Engine::map1`]: apply a unary kernel to every scalar, keeping shape
//! - [`Engine::map2`]: pair two values position by position, broadcasting
//!   scalars against containers at any depth
//! - [`Engine::reduce`]: fold every contained scalar, pre-order, into one
//!
//! # Broadcasting Rules
//!
//! | left | right | result |
//! |------|-------|--------|
//! | scalar | scalar | `kernel(a, b)` |
//! | scalar | container | `[map2(a, b[i]) ...]` |
//! | container | scalar | `[map2(a[i], b) ...]` |
//! | container | container | lengths must match, `[map2(a[i], b[i]) ...]` |
//!
//! Containers are compared one level at a time, so a length mismatch deep
//! inside the tree is reported with the index path of that level.
//!
//! # Examples
//!
//! ```
//! use numtree::{broadcast, value};
//!
//! let a = value!([1, [2, 3]]);
//! let sum = broadcast::map2(&a, &value!(10), |x, y| Ok(x + y)).unwrap();
//! assert_eq!(sum, value!([11, [12, 13]]));
//!
//! let err = broadcast::map2(&value!([1, 2, 3]), &value!([1, 2]), |x, y| Ok(x + y));
//! assert!(err.is_err());
//! ```

use crate::{NumericsConfig, NumtreeError, Result, Value};
use log::debug;

/// Default recursion budget for nested values.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Recursive dispatcher for scalar kernels over nested values.
///
/// The engine carries only a recursion budget; nesting deeper than
/// `max_depth` fails with [`NumtreeError::ResourceExhausted`] rather than
/// exhausting the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    max_depth: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Engine {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn from_config(config: &NumericsConfig) -> Self {
        Self::new(config.max_depth)
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Apply a unary kernel to every scalar in `v`.
    ///
    /// The result has the same shape as `v`. The kernel may fail; the first
    /// failure in traversal order is returned and no partial result is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use numtree::{value, Engine};
    ///
    /// let engine = Engine::default();
    /// let doubled = engine.map1(&value!([1, [2], []]), |x| Ok(x * 2.0)).unwrap();
    /// assert_eq!(doubled, value!([2, [4], []]));
    /// ```
    pub fn map1<F>(&self, v: &Value, mut kernel: F) -> Result<Value>
    where
        F: FnMut(f64) -> Result<f64>,
    {
        self.map1_at(v, &mut kernel, 0)
    }

    fn map1_at<F>(&self, v: &Value, kernel: &mut F, depth: usize) -> Result<Value>
    where
        F: FnMut(f64) -> Result<f64>,
    {
        match v {
            Value::Scalar(x) => Ok(Value::Scalar(kernel(*x)?)),
            Value::Container(items) => {
                self.check_depth(depth + 1)?;
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.map1_at(item, kernel, depth + 1)?);
                }
                Ok(Value::Container(out))
            }
        }
    }

    /// Apply a binary kernel to `a` and `b` with broadcasting.
    ///
    /// # Errors
    ///
    /// - [`NumtreeError::ShapeMismatch`] if two containers paired at the same
    ///   level have different lengths; `path` locates that level
    /// - any error returned by the kernel
    /// - [`NumtreeError::ResourceExhausted`] past the depth budget
    pub fn map2<F>(&self, a: &Value, b: &Value, mut kernel: F) -> Result<Value>
    where
        F: FnMut(f64, f64) -> Result<f64>,
    {
        let mut path = Vec::new();
        self.map2_at(a, b, &mut kernel, &mut path)
    }

    fn map2_at<F>(&self, a: &Value, b: &Value, kernel: &mut F, path: &mut Vec<usize>) -> Result<Value>
    where
        F: FnMut(f64, f64) -> Result<f64>,
    {
        match (a, b) {
            (Value::Scalar(x), Value::Scalar(y)) => Ok(Value::Scalar(kernel(*x, *y)?)),
            (Value::Scalar(_), Value::Container(ys)) => {
                self.check_depth(path.len() + 1)?;
                let mut out = Vec::with_capacity(ys.len());
                for (i, y) in ys.iter().enumerate() {
                    path.push(i);
                    out.push(self.map2_at(a, y, kernel, path)?);
                    path.pop();
                }
                Ok(Value::Container(out))
            }
            (Value::Container(xs), Value::Scalar(_)) => {
                self.check_depth(path.len() + 1)?;
                let mut out = Vec::with_capacity(xs.len());
                for (i, x) in xs.iter().enumerate() {
                    path.push(i);
                    out.push(self.map2_at(x, b, kernel, path)?);
                    path.pop();
                }
                Ok(Value::Container(out))
            }
            (Value::Container(xs), Value::Container(ys)) => {
                if xs.len() != ys.len() {
                    debug!(
                        "shape mismatch at depth {}: {} vs {}",
                        path.len(),
                        xs.len(),
                        ys.len()
                    );
                    return Err(NumtreeError::ShapeMismatch {
                        path: path.clone(),
                        left: xs.len(),
                        right: ys.len(),
                    });
                }
                self.check_depth(path.len() + 1)?;
                let mut out = Vec::with_capacity(xs.len());
                for (i, (x, y)) in xs.iter().zip(ys).enumerate() {
                    path.push(i);
                    out.push(self.map2_at(x, y, kernel, path)?);
                    path.pop();
                }
                Ok(Value::Container(out))
            }
        }
    }

    /// Fold every scalar in `v`, pre-order and left to right, starting
    /// from `identity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numtree::{value, Engine};
    ///
    /// let engine = Engine::default();
    /// let total = engine.reduce(&value!([1, [2, 3]]), 0.0, |acc, x| Ok(acc + x)).unwrap();
    /// assert_eq!(total, 6.0);
    /// ```
    pub fn reduce<F>(&self, v: &Value, identity: f64, mut combine: F) -> Result<f64>
    where
        F: FnMut(f64, f64) -> Result<f64>,
    {
        let mut acc = identity;
        self.reduce_at(v, &mut acc, &mut combine, 0)?;
        Ok(acc)
    }

    fn reduce_at<F>(&self, v: &Value, acc: &mut f64, combine: &mut F, depth: usize) -> Result<()>
    where
        F: FnMut(f64, f64) -> Result<f64>,
    {
        match v {
            Value::Scalar(x) => {
                *acc = combine(*acc, *x)?;
                Ok(())
            }
            Value::Container(items) => {
                self.check_depth(depth + 1)?;
                for item in items {
                    self.reduce_at(item, acc, combine, depth + 1)?;
                }
                Ok(())
            }
        }
    }

    #[inline]
    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            debug!("nesting depth {} exceeds limit {}", depth, self.max_depth);
            return Err(NumtreeError::ResourceExhausted {
                depth,
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

/// [`Engine::map1`] with the default recursion budget.
pub fn map1<F>(v: &Value, kernel: F) -> Result<Value>
where
    F: FnMut(f64) -> Result<f64>,
{
    Engine::default().map1(v, kernel)
}

/// [`Engine::map2`] with the default recursion budget.
pub fn map2<F>(a: &Value, b: &Value, kernel: F) -> Result<Value>
where
    F: FnMut(f64, f64) -> Result<f64>,
{
    Engine::default().map2(a, b, kernel)
}

/// [`Engine::reduce`] with the default recursion budget.
pub fn reduce<F>(v: &Value, identity: f64, combine: F) -> Result<f64>
where
    F: FnMut(f64, f64) -> Result<f64>,
{
    Engine::default().reduce(v, identity, combine)
}
