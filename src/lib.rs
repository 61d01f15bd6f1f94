//! Numtree - Shape-Polymorphic Numerics over Ragged Nested Values
//!
//! Numtree is a numeric utility library whose every function works the same
//! on a single number or on an arbitrarily deep, possibly ragged, nest of
//! numbers. Elementwise math, reductions, bitwise operations and a seeded
//! random generator all share one computation model.
//!
//! # Key Characteristics
//!
//! - One data type, [`Value`]: a scalar or a container of values
//! - One broadcast engine, [`Engine`], that lifts scalar kernels to any shape
//! - Fail-fast errors: the first out-of-domain scalar or length mismatch
//!   aborts the whole call
//! - Reproducible randomness: same seed, same draws
//!
//! # Architecture
//!
//! - **Value**: the `Scalar | Container` data model ([`value`])
//! - **Broadcast Engine**: `map1`, `map2` with broadcasting, and `reduce`
//!   ([`broadcast`])
//! - **Kernel Library**: scalar kernels dispatched through the engine
//!   ([`kernels`])
//! - **Random Subsystem**: a seedable generator and a process-wide instance
//!   ([`random`])
//!
//! # Examples
//!
//! ## Broadcasting Kernels
//!
//! ```
//! use numtree::{value, kernels::{round, sin, arcsin}};
//!
//! let x = value!([0.1, [0.2, -0.3]]);
//! let back = sin(&arcsin(&x).unwrap()).unwrap();
//! let p = value!(1_000_000);
//! assert_eq!(round(&back, &p).unwrap(), round(&x, &p).unwrap());
//!
//! let r = round(&value!([4.12, 4.67, -5.8, -5.21]), &value!(10)).unwrap();
//! assert_eq!(r.to_string(), "[4.1, 4.7, -5.8, -5.2]");
//! ```
//!
//! ## Errors
//!
//! ```
//! use numtree::{value, ErrorKind, kernels::{add, arcsin, modulo}};
//!
//! let err = add(&value!([1, 2, 3]), &value!([1, 2])).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
//! assert_eq!(arcsin(&value!(1.5)).unwrap_err().kind(), ErrorKind::DomainError);
//! assert_eq!(modulo(&value!(9), &value!(0)).unwrap_err().kind(), ErrorKind::DivideByZero);
//! ```
//!
//! ## Random Draws
//!
//! ```
//! use numtree::Generator;
//!
//! let mut g = Generator::seeded(12345);
//! let a = g.draw_bounded(1000).unwrap();
//! g.reseed(12345);
//! assert_eq!(g.draw_bounded(1000).unwrap(), a);
//! assert!(g.draw_range(5, 5).is_err());
//! ```
//!
//! # Concurrency
//!
//! Kernels are pure and allocation-only. The process-wide generator in
//! [`random`] sits behind a mutex; reproducibility is only guaranteed for a
//! single sequential caller, so concurrent users should hold their own
//! [`Generator`] or use [`random::with_global`].

#[macro_use]
mod macros;

pub mod broadcast;
pub mod config;
pub mod constants;
pub mod error;
pub mod kernels;
pub mod numerics;
pub mod random;
pub mod value;

#[cfg(feature = "wasm")]
pub mod wasm_interface;

// Re-exports for convenient access
pub use broadcast::{Engine, DEFAULT_MAX_DEPTH};
pub use config::NumericsConfig;
pub use error::{ErrorKind, NumtreeError, Result};
pub use kernels::{BinaryOp, Reduction, UnaryOp};
pub use numerics::Numerics;
pub use random::Generator;
pub use value::{Shape, Value};

#[cfg(feature = "wasm")]
pub use wasm_interface::WasmNumerics;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Numtree";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(ver.contains("Numtree"));
        assert!(ver.contains("1.0.0"));
    }

    #[test]
    fn test_re_exports() {
        let _engine = Engine::default();
        let _result: Result<()> = Ok(());
        assert_eq!(DEFAULT_MAX_DEPTH, 1024);
        assert_eq!(UnaryOp::Abs.eval(&Value::Scalar(-2.0)).unwrap(), Value::Scalar(2.0));
    }
}
