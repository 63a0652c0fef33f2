//! Escape-time evaluation with smooth (fractional) iteration counts.
//!
//! The returned value lies in `[0, max_iterations]`. Exactly
//! `max_iterations` marks an interior point; anything below it is a
//! smoothed escape count. On escape at iteration `n` with `|z|² = m > 4`
//! the smoothed count is `n + 1 - log2(ln(m) / 2)`. Since `m > 4` the inner
//! logarithm is always positive; only an overflowing orbit (`m = ∞`) makes
//! the formula non-finite, in which case the integer count is used.

use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::f64::consts::LN_2;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Evaluates `point` under `kind`.
///
/// Mandelbrot iterates `z ← z² + point` from `z = 0`; Julia iterates
/// `z ← z² + constant` from `z = point`.
#[must_use]
pub fn evaluate(point: Complex, kind: FractalKind, max_iterations: u32) -> f64 {
    match kind {
        FractalKind::Mandelbrot => escape_orbit(Complex::ZERO, point, max_iterations),
        FractalKind::Julia { constant } => escape_orbit(point, constant, max_iterations),
    }
}

/// Runs `z ← z² + constant` from `start`, testing `|z|² > 4` before each step
/// and once more after the last one.
#[must_use]
pub(crate) fn escape_orbit(start: Complex, constant: Complex, max_iterations: u32) -> f64 {
    let mut z = start;

    for iteration in 0..max_iterations {
        let magnitude_squared = z.magnitude_squared();
        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            return smooth_escape(iteration, magnitude_squared, max_iterations);
        }
        z = z * z + constant;
    }

    // an orbit leaving on the final step is still exterior
    let magnitude_squared = z.magnitude_squared();
    if magnitude_squared > ESCAPE_RADIUS_SQUARED {
        return smooth_escape(max_iterations, magnitude_squared, max_iterations);
    }

    f64::from(max_iterations)
}

#[must_use]
pub(crate) fn smooth_escape(iteration: u32, magnitude_squared: f64, max_iterations: u32) -> f64 {
    let ceiling = largest_escaped_value(max_iterations);
    let smoothed = f64::from(iteration) + 1.0 - (magnitude_squared.ln() / 2.0).ln() / LN_2;

    if smoothed.is_finite() {
        smoothed.clamp(0.0, ceiling)
    } else {
        f64::from(iteration).min(ceiling)
    }
}

/// The largest value strictly below `max_iterations`, so an escaped point is
/// never reported as interior.
fn largest_escaped_value(max_iterations: u32) -> f64 {
    if max_iterations == 0 {
        return 0.0;
    }

    f64::from_bits(f64::from(max_iterations).to_bits() - 1)
}
