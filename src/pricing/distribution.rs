//! Standard normal distribution functions.

use statrs::function::erf::erfc;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function (CDF).
///
/// Φ(x) = ½·erfc(−x/√2). Going through `erfc` keeps full relative precision
/// in the lower tail, where `1 + erf(x)` would cancel.
#[inline]
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function (PDF).
#[inline]
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
