//! Error types for numtree.
//!
//! This module provides a unified error type for every kernel, engine and
//! generator operation, using the `thiserror` crate for ergonomic error
//! handling.

use thiserror::Error;

/// The main error type for numtree operations.
///
/// Every failure is detected either by a scalar kernel or by the broadcast
/// engine's shape comparison, and is returned at the first violation found
/// in depth-first, left-to-right traversal order.
#[derive(Error, Debug)]
pub enum NumtreeError {
    /// Two containers paired at the same level have different lengths
    #[error(
        "Shape mismatch at {}: left has {} elements, right has {}",
        fmt_path(.path),
        .left,
        .right
    )]
    ShapeMismatch {
        /// Index path from the root to the mismatched level
        path: Vec<usize>,
        /// Length of the left container
        left: usize,
        /// Length of the right container
        right: usize,
    },

    /// A scalar lies outside the kernel's mathematical domain
    #[error("Domain error in {op}: {value}")]
    DomainError {
        /// Kernel name
        op: &'static str,
        /// The offending scalar
        value: f64,
    },

    /// A divisor scalar is zero
    #[error("Division by zero in {op}")]
    DivideByZero {
        /// Kernel name
        op: &'static str,
    },

    /// Mathematically indeterminate input, e.g. `power(0, 0)`
    #[error("Undefined result in {op}")]
    UndefinedResult {
        /// Kernel name
        op: &'static str,
    },

    /// Random draw bounds are invalid
    #[error("Range error: {0}")]
    RangeError(String),

    /// Nesting exceeds the engine's recursion budget
    #[error("Nesting depth {depth} exceeds limit {limit}")]
    ResourceExhausted {
        /// Depth reached
        depth: usize,
        /// Configured limit
        limit: usize,
    },

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary serialization error occurred
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Fieldless classification of [`NumtreeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ShapeMismatch,
    DomainError,
    DivideByZero,
    UndefinedResult,
    RangeError,
    ResourceExhausted,
    InvalidParameter,
    Io,
    Serialization,
}

impl NumtreeError {
    /// Classify this error without looking at its payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use numtree::{ErrorKind, NumtreeError};
    ///
    /// let err = NumtreeError::DivideByZero { op: "modulo" };
    /// assert_eq!(err.kind(), ErrorKind::DivideByZero);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumtreeError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            NumtreeError::DomainError { .. } => ErrorKind::DomainError,
            NumtreeError::DivideByZero { .. } => ErrorKind::DivideByZero,
            NumtreeError::UndefinedResult { .. } => ErrorKind::UndefinedResult,
            NumtreeError::RangeError(_) => ErrorKind::RangeError,
            NumtreeError::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
            NumtreeError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            NumtreeError::Io(_) => ErrorKind::Io,
            NumtreeError::Json(_) | NumtreeError::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

fn fmt_path(path: &[usize]) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        let parts: Vec<String> = path.iter().map(|i| format!("[{}]", i)).collect();
        parts.concat()
    }
}

/// A specialized `Result` type for numtree operations.
///
/// This is a type alias for `Result<T, NumtreeError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, NumtreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NumtreeError::ShapeMismatch {
            path: vec![],
            left: 3,
            right: 2,
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch at root: left has 3 elements, right has 2"
        );

        let err = NumtreeError::ShapeMismatch {
            path: vec![1, 0],
            left: 2,
            right: 1,
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch at [1][0]: left has 2 elements, right has 1"
        );

        let err = NumtreeError::DomainError {
            op: "arcsin",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "Domain error in arcsin: 1.5");
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            NumtreeError::UndefinedResult { op: "power" }.kind(),
            ErrorKind::UndefinedResult
        );
        assert_eq!(
            NumtreeError::RangeError("bad".into()).kind(),
            ErrorKind::RangeError
        );
        assert_eq!(
            NumtreeError::ResourceExhausted { depth: 5, limit: 4 }.kind(),
            ErrorKind::ResourceExhausted
        );
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
