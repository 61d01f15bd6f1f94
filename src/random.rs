//! Random - seeded generator with a reproducibility contract.
//!
//! All draws are layered on one primitive, [`Generator::draw_bounded`],
//! which returns an integer in `[1, maximum]` for `maximum` up to
//! [`RAND_CEILING`]. Range and unit-interval draws are built from it.
//!
//! # Reproducibility
//!
//! Two generators seeded with the same value and asked for the same
//! sequence of draws produce identical outputs (within one build of the
//! crate; the underlying `StdRng` algorithm may change between `rand`
//! releases).
//!
//! # Process-wide Generator
//!
//! The free functions in this module ([`reseed`], [`draw_bounded`], ...)
//! share one generator behind a mutex, entropy-seeded on first use. Each
//! call locks it once, so a sequence of separate calls from several threads
//! may interleave; use [`with_global`] to run a whole sequence under one
//! lock, or keep a private [`Generator`].
//!
//! # Examples
//!
//! ```
//! use numtree::{value, Generator};
//!
//! let mut g = Generator::seeded(12345);
//! let a = g.draw_bounded(1000).unwrap();
//! g.reseed(12345);
//! assert_eq!(g.draw_bounded(1000).unwrap(), a);
//!
//! let noise = g.unit_like(&value!([0, [0, 0]])).unwrap();
//! assert_eq!(noise.shape(), value!([0, [0, 0]]).shape());
//! ```

use crate::broadcast::Engine;
pub use crate::constants::RAND_CEILING;
use crate::{NumericsConfig, NumtreeError, Result, Value};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// A seedable random generator handle.
///
/// Keeps the seed it was last given (if any) so callers can report it.
#[derive(Clone, Debug)]
pub struct Generator {
    rng: StdRng,
    seed: Option<u64>,
    engine: Engine,
}

impl Generator {
    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
            engine: Engine::default(),
        }
    }

    /// Create a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            engine: Engine::default(),
        }
    }

    /// Create a generator from `config.seed` (entropy when absent), using
    /// the configured recursion budget for broadcast draws.
    pub fn from_config(config: &NumericsConfig) -> Self {
        let mut generator = match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        generator.engine = Engine::from_config(config);
        generator
    }

    /// Deterministically reinitialize the generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        debug!("reseeding generator with {}", seed);
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = Some(seed);
    }

    /// The last explicit seed, or `None` for an entropy-seeded generator.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    fn raw(&mut self, maximum: i64) -> i64 {
        self.rng.gen_range(1..=maximum)
    }

    /// Draw an integer uniformly from `[1, maximum]`.
    ///
    /// # Errors
    ///
    /// `RangeError` if `maximum < 1` or `maximum > RAND_CEILING`.
    pub fn draw_bounded(&mut self, maximum: i64) -> Result<i64> {
        if !(1..=RAND_CEILING).contains(&maximum) {
            return Err(NumtreeError::RangeError(format!(
                "maximum must be in [1, {}], got {}",
                RAND_CEILING, maximum
            )));
        }
        let x = self.raw(maximum);
        trace!("draw_bounded({}) -> {}", maximum, x);
        Ok(x)
    }

    /// Draw an integer uniformly from `[lo, hi]`, as
    /// `lo + (draw_bounded(hi - lo + 1) - 1)`.
    ///
    /// # Errors
    ///
    /// `RangeError` if `lo >= hi` or the span exceeds `RAND_CEILING`.
    pub fn draw_range(&mut self, lo: i64, hi: i64) -> Result<i64> {
        let span = range_span(lo, hi)?;
        Ok(lo + (self.draw_bounded(span)? - 1))
    }

    /// Draw a real from `[0, 1]`.
    ///
    /// Two bounded draws are taken and the smaller divided by the larger;
    /// the result is 0 if either draw is 1, the lowest value the primitive
    /// can return.
    pub fn draw_unit(&mut self) -> f64 {
        let a = self.raw(RAND_CEILING);
        let b = self.raw(RAND_CEILING);
        unit_from_pair(a, b)
    }

    /// One bounded draw per scalar of `maxima`, each scalar being that
    /// draw's maximum. The result has the shape of `maxima`.
    pub fn bounded_each(&mut self, maxima: &Value) -> Result<Value> {
        let engine = self.engine;
        engine.map1(maxima, |m| {
            let maximum = integral_bound(m)?;
            Ok(self.draw_bounded(maximum)? as f64)
        })
    }

    /// One `[lo, hi]` draw per scalar of `template`.
    pub fn range_like(&mut self, template: &Value, lo: i64, hi: i64) -> Result<Value> {
        let span = range_span(lo, hi)?;
        let engine = self.engine;
        engine.map1(template, |_| Ok((lo + (self.draw_bounded(span)? - 1)) as f64))
    }

    /// One unit-interval draw per scalar of `template`.
    pub fn unit_like(&mut self, template: &Value) -> Result<Value> {
        let engine = self.engine;
        engine.map1(template, |_| Ok(self.draw_unit()))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Smaller draw over larger draw; 0 if either is the minimum draw.
fn unit_from_pair(a: i64, b: i64) -> f64 {
    if a == 1 || b == 1 {
        return 0.0;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    lo as f64 / hi as f64
}

fn range_span(lo: i64, hi: i64) -> Result<i64> {
    if lo >= hi {
        return Err(NumtreeError::RangeError(format!(
            "lower bound {} must be below upper bound {}",
            lo, hi
        )));
    }
    hi.checked_sub(lo)
        .and_then(|d| d.checked_add(1))
        .filter(|span| *span <= RAND_CEILING)
        .ok_or_else(|| {
            NumtreeError::RangeError(format!(
                "range [{}, {}] is wider than {}",
                lo, hi, RAND_CEILING
            ))
        })
}

fn integral_bound(x: f64) -> Result<i64> {
    if !x.is_finite() || x.fract() != 0.0 {
        return Err(NumtreeError::RangeError(format!(
            "bound must be an integer, got {}",
            x
        )));
    }
    Ok(x as i64)
}

// =============================================================================
// Process-wide generator
// =============================================================================

static GLOBAL: OnceLock<Mutex<Generator>> = OnceLock::new();

fn global() -> MutexGuard<'static, Generator> {
    GLOBAL
        .get_or_init(|| Mutex::new(Generator::from_entropy()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with exclusive access to the process-wide generator.
///
/// # Examples
///
/// ```
/// use numtree::random::with_global;
///
/// let (a, b) = with_global(|g| {
///     g.reseed(7);
///     let a = g.draw_bounded(100).unwrap();
///     g.reseed(7);
///     (a, g.draw_bounded(100).unwrap())
/// });
/// assert_eq!(a, b);
/// ```
pub fn with_global<T, F>(f: F) -> T
where
    F: FnOnce(&mut Generator) -> T,
{
    let mut guard = global();
    f(&mut guard)
}

/// Reseed the process-wide generator.
pub fn reseed(seed: u64) {
    global().reseed(seed);
}

/// [`Generator::draw_bounded`] on the process-wide generator.
pub fn draw_bounded(maximum: i64) -> Result<i64> {
    global().draw_bounded(maximum)
}

/// [`Generator::draw_range`] on the process-wide generator.
pub fn draw_range(lo: i64, hi: i64) -> Result<i64> {
    global().draw_range(lo, hi)
}

/// [`Generator::draw_unit`] on the process-wide generator.
pub fn draw_unit() -> f64 {
    global().draw_unit()
}

/// [`Generator::bounded_each`] on the process-wide generator.
pub fn bounded_each(maxima: &Value) -> Result<Value> {
    global().bounded_each(maxima)
}

/// [`Generator::range_like`] on the process-wide generator.
pub fn range_like(template: &Value, lo: i64, hi: i64) -> Result<Value> {
    global().range_like(template, lo, hi)
}

/// [`Generator::unit_like`] on the process-wide generator.
pub fn unit_like(template: &Value) -> Result<Value> {
    global().unit_like(template)
}
