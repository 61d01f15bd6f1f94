//! Runtime configuration.
//!
//! `NumericsConfig` collects the few tunables the crate has: the engine's
//! recursion budget, the default rounding precision, the tangent pole
//! tolerance and an optional generator seed. It serializes to JSON for
//! hand-edited files and to bincode for compact storage.
//!
//! # Example
//!
//! ```
//! use numtree::NumericsConfig;
//!
//! let config = NumericsConfig::from_json(r#"{ "max_depth": 64, "seed": 7 }"#).unwrap();
//! assert_eq!(config.max_depth, 64);
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.default_precision, 1.0);
//! ```

use crate::{broadcast::DEFAULT_MAX_DEPTH, NumtreeError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default |cos x| below which `tan(x)` is treated as a pole.
pub const DEFAULT_TAN_POLE_EPSILON: f64 = 1e-12;

/// Tunables shared by the engine, the kernels and the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NumericsConfig {
    /// Deepest nesting the engine will recurse into
    pub max_depth: usize,
    /// Precision used by `round` when none is given
    pub default_precision: f64,
    /// Seed for [`Generator::from_config`](crate::Generator::from_config);
    /// `None` draws from OS entropy
    pub seed: Option<u64>,
    /// |cos x| threshold for tangent poles
    pub tan_pole_epsilon: f64,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            default_precision: 1.0,
            seed: None,
            tan_pole_epsilon: DEFAULT_TAN_POLE_EPSILON,
        }
    }
}

impl NumericsConfig {
    /// Set a fixed generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the engine's recursion budget.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(NumtreeError::InvalidParameter(
                "max_depth must be at least 1".into(),
            ));
        }
        if !self.default_precision.is_finite() || self.default_precision <= 0.0 {
            return Err(NumtreeError::InvalidParameter(format!(
                "default_precision must be a positive finite number, got {}",
                self.default_precision
            )));
        }
        if !self.tan_pole_epsilon.is_finite() || self.tan_pole_epsilon < 0.0 {
            return Err(NumtreeError::InvalidParameter(format!(
                "tan_pole_epsilon must be a non-negative finite number, got {}",
                self.tan_pole_epsilon
            )));
        }
        Ok(())
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to binary (bincode).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode).
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        let config: Self = bincode::deserialize(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Write this config as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
