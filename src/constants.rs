//! Numeric constants.

/// π
pub const PI: f64 = std::f64::consts::PI;

/// π/2
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

/// Euler's number
pub const E: f64 = std::f64::consts::E;

/// Degrees per radian (180/π)
pub const DEG_PER_RAD: f64 = 180.0 / PI;

/// Largest maximum accepted by bounded draws (2^30 - 1)
pub const RAND_CEILING: i64 = (1 << 30) - 1;

/// Modulus of the 32-bit wrap applied by bitwise kernels
pub const TWO_POW_32: f64 = 4_294_967_296.0;
