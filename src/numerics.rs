//! Numerics - a configured engine and generator in one handle.
//!
//! The free kernel functions use built-in defaults. `Numerics` applies a
//! [`NumericsConfig`] instead: its recursion budget, its default rounding
//! precision, its tangent pole tolerance and its generator seed.
//!
//! # Examples
//!
//! ```
//! use numtree::kernels::{Reduction, UnaryOp};
//! use numtree::{value, Numerics, NumericsConfig};
//!
//! let mut num = Numerics::new(NumericsConfig::default().with_seed(1)).unwrap();
//! let v = value!([-1.26, [2.5]]);
//!
//! assert_eq!(num.unary(UnaryOp::Abs, &v).unwrap(), value!([1.26, [2.5]]));
//! assert_eq!(num.round(&v).unwrap(), value!([-1, [3]]));
//! assert_eq!(num.reduce_named("max", &v).unwrap(), 2.5);
//!
//! let x = num.generator_mut().draw_range(1, 6).unwrap();
//! assert!((1..=6).contains(&x));
//! ```

use crate::broadcast::Engine;
use crate::kernels::{trig, BinaryOp, Reduction, UnaryOp};
use crate::{Generator, NumericsConfig, Result, Value};

/// Configured entry point to the kernel tables and the generator.
#[derive(Debug, Clone)]
pub struct Numerics {
    config: NumericsConfig,
    engine: Engine,
    generator: Generator,
}

impl Numerics {
    /// Build from a validated config.
    pub fn new(config: NumericsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine: Engine::from_config(&config),
            generator: Generator::from_config(&config),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &NumericsConfig {
        &self.config
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[inline]
    pub fn generator_mut(&mut self) -> &mut Generator {
        &mut self.generator
    }

    /// Apply a unary kernel. `tan` uses the configured pole tolerance.
    pub fn unary(&self, op: UnaryOp, v: &Value) -> Result<Value> {
        match op {
            UnaryOp::Tan => {
                let eps = self.config.tan_pole_epsilon;
                self.engine.map1(v, |x| trig::tan_kernel(x, eps))
            }
            _ => op.eval_with(&self.engine, v),
        }
    }

    pub fn binary(&self, op: BinaryOp, a: &Value, b: &Value) -> Result<Value> {
        op.eval_with(&self.engine, a, b)
    }

    pub fn reduce(&self, reduction: Reduction, v: &Value) -> Result<f64> {
        reduction.eval_with(&self.engine, v)
    }

    /// Round with the configured default precision.
    pub fn round(&self, v: &Value) -> Result<Value> {
        self.binary(BinaryOp::Round, v, &Value::Scalar(self.config.default_precision))
    }

    /// Look up a unary kernel by name and apply it.
    pub fn unary_named(&self, name: &str, v: &Value) -> Result<Value> {
        self.unary(name.parse()?, v)
    }

    /// Look up a binary kernel by name and apply it.
    pub fn binary_named(&self, name: &str, a: &Value, b: &Value) -> Result<Value> {
        self.binary(name.parse()?, a, b)
    }

    /// Look up a reduction by name and apply it.
    pub fn reduce_named(&self, name: &str, v: &Value) -> Result<f64> {
        self.reduce(name.parse()?, v)
    }
}

impl Default for Numerics {
    fn default() -> Self {
        let config = NumericsConfig::default();
        Self {
            engine: Engine::from_config(&config),
            generator: Generator::from_config(&config),
            config,
        }
    }
}
