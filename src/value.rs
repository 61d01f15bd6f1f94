//! Value - The numeric data model: a scalar or a ragged nested container.
//!
//! Every kernel in the crate takes and returns [`Value`]s. A value is either
//! a single `f64` or an ordered sequence of values, and sibling elements may
//! have different shapes and lengths.
//!
//! # Serialization
//!
//! Values serialize as plain JSON: scalars are numbers and containers are
//! arrays, so `[10, [11.2], 8.1]` round-trips unchanged.
//!
//! # Examples
//!
//! ```
//! use numtree::{value, Value};
//!
//! let v = value!([10, [11.2], 8.1]);
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.count(), 3);
//! assert_eq!(v.depth(), 2);
//! assert_eq!(v.to_string(), "[10, [11.2], 8.1]");
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar or an ordered, possibly ragged, container of values.
///
/// Values have value semantics: operations borrow their inputs and build a
/// new result, so a caller's value is never observably changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single double-precision real
    Scalar(f64),
    /// Zero or more nested values
    Container(Vec<Value>),
}

/// Structural shape of a [`Value`], ignoring the scalar payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Container(Vec<Shape>),
}

impl Value {
    /// Build a container from anything convertible into values.
    ///
    /// # Examples
    ///
    /// ```
    /// use numtree::Value;
    ///
    /// let v = Value::container([1.0, 2.0, 3.0]);
    /// assert_eq!(v.len(), 3);
    /// ```
    pub fn container<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Container(items.into_iter().map(Into::into).collect())
    }

    /// The empty container `[]`.
    pub fn empty() -> Self {
        Value::Container(Vec::new())
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(x) => Some(*x),
            Value::Container(_) => None,
        }
    }

    #[inline]
    pub fn as_container(&self) -> Option<&[Value]> {
        match self {
            Value::Scalar(_) => None,
            Value::Container(items) => Some(items),
        }
    }

    /// Number of direct elements; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Container(items) => items.len(),
        }
    }

    /// True only for the empty container.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Container(items) if items.is_empty())
    }

    /// Nesting depth: 0 for a scalar, one more than the deepest child for a
    /// container (so `[]` has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            Value::Scalar(_) => 0,
            Value::Container(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
        }
    }

    /// Number of scalars transitively contained.
    pub fn count(&self) -> usize {
        self.scalars().count()
    }

    /// Structural shape of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use numtree::{value, Shape};
    ///
    /// let v = value!([1, [2, 3]]);
    /// assert_eq!(
    ///     v.shape(),
    ///     Shape::Container(vec![
    ///         Shape::Scalar,
    ///         Shape::Container(vec![Shape::Scalar, Shape::Scalar]),
    ///     ])
    /// );
    /// ```
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(_) => Shape::Scalar,
            Value::Container(items) => Shape::Container(items.iter().map(Value::shape).collect()),
        }
    }

    /// Pre-order iterator over every contained scalar, siblings in order.
    pub fn scalars(&self) -> Scalars<'_> {
        Scalars { stack: vec![self] }
    }

    /// All contained scalars in traversal order.
    pub fn flatten(&self) -> Vec<f64> {
        self.scalars().collect()
    }
}

/// Iterator returned by [`Value::scalars`].
pub struct Scalars<'a> {
    stack: Vec<&'a Value>,
}

impl<'a> Iterator for Scalars<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        while let Some(v) = self.stack.pop() {
            match v {
                Value::Scalar(x) => return Some(*x),
                Value::Container(items) => self.stack.extend(items.iter().rev()),
            }
        }
        None
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(x) => write!(f, "{}", x),
            Value::Container(items) => write!(f, "[{}]", items.iter().join(", ")),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(0.0)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Scalar(x as f64)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Scalar(x as f64)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Scalar(x as f64)
    }
}

impl From<u32> for Value {
    fn from(x: u32) -> Self {
        Value::Scalar(x as f64)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::container(items)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::container(iter)
    }
}
