//! Steffensen iteration: Newton-like convergence without a derivative.

use tracing::trace;

use crate::error::RootFindError;
use crate::rootfind::{RootFindOptions, RootSearch};

/// Iterates `x - f(x) / g(x)` with the Steffensen slope
/// `g(x) = f(x + f(x)) / f(x) - 1`.
///
/// Near a simple root `g` approaches `f'`, giving quadratic convergence from
/// function values alone. The tolerance check runs before `g`, so an exact
/// zero of `f` never reaches the division.
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
        let slope = f(x + fx) / fx - 1.0;
        if slope.abs() < f64::EPSILON {
            return Err(RootFindError::VanishedSlope(x));
        }
        x -= fx / slope;
        approximations.push(x);
        trace!(x, fx, slope, "steffensen step");
    }
}
