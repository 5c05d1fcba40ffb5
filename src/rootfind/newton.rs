//! Newton iteration with a finite-difference slope.

use tracing::trace;

use crate::error::RootFindError;
use crate::rootfind::{RootFindOptions, RootSearch};

/// Newton steps `x - f(x) / f'(x)` from a single starting guess.
///
/// The slope comes from a central difference with step `cbrt(eps) * (1 + |x|)`,
/// so no analytic derivative is required. A slope below machine epsilon aborts
/// with [`RootFindError::VanishedSlope`] instead of taking an unbounded step.
pub fn solve<F: Fn(f64) -> f64>(
    f: F,
    start: f64,
    options: RootFindOptions,
) -> Result<RootSearch, RootFindError> {
    options.validate()?;
    let mut x = start;
    let mut approximations = Vec::new();

    loop {
        let fx = f(x);
        if fx.abs() < options.tolerance {
            return Ok(RootSearch {
                root: x,
                approximations,
            });
        }
        if approximations.len() >= options.max_iterations {
            return Err(RootFindError::MaxIterations(options.max_iterations));
        }
        let slope = central_difference(&f, x);
        if slope.abs() < f64::EPSILON {
            return Err(RootFindError::VanishedSlope(x));
        }
        x -= fx / slope;
        approximations.push(x);
        trace!(x, fx, slope, "newton step");
    }
}

fn central_difference<F: Fn(f64) -> f64>(f: &F, x: f64) -> f64 {
    let step = f64::EPSILON.cbrt() * (1.0 + x.abs());
    (f(x + step) - f(x - step)) / (2.0 * step)
}
