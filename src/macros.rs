//! Literal macro for building nested values.

/// Build a [`Value`](crate::Value) from a nested bracket literal.
///
/// Bracketed groups become containers; anything else is converted with
/// `Value::from`, so integers, floats, negative literals and arbitrary
/// expressions all work.
///
/// # Examples
///
/// ```
/// use numtree::{value, Value};
///
/// let v = value!([4.12, -5.8, [1, 2], []]);
/// assert_eq!(v.len(), 4);
///
/// let s = value!(2.5);
/// assert_eq!(s, Value::Scalar(2.5));
/// ```
#[macro_export]
macro_rules! value {
    (@elems [$($out:expr),*]) => {
        vec![$($out),*]
    };
    (@elems [$($out:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::value!(@elems [$($out,)* $crate::value!([$($inner)*])] $($($rest)*)?)
    };
    (@elems [$($out:expr),*] $elem:expr $(, $($rest:tt)*)?) => {
        $crate::value!(@elems [$($out,)* $crate::Value::from($elem)] $($($rest)*)?)
    };
    ([$($inner:tt)*]) => {
        $crate::Value::Container($crate::value!(@elems [] $($inner)*))
    };
    ($x:expr) => {
        $crate::Value::from($x)
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_flat() {
        let v = value!([1, 2.5, -3]);
        assert_eq!(
            v,
            Value::Container(vec![
                Value::Scalar(1.0),
                Value::Scalar(2.5),
                Value::Scalar(-3.0)
            ])
        );
    }

    #[test]
    fn test_nested_and_trailing_comma() {
        let v = value!([[1, [2]], [], 3,]);
        assert_eq!(v.to_string(), "[[1, [2]], [], 3]");
    }

    #[test]
    fn test_expressions() {
        let x = 4.0;
        let v = value!([x * 2.0, -x]);
        assert_eq!(v.flatten(), vec![8.0, -4.0]);
    }
}
