//! Regula falsi: secant-line intercepts that never leave the bracket.

use tracing::trace;

use crate::error::RootFindError;
use crate::rootfind::{bracketed_values, Bracket, RootFindOptions, RootSearch};

/// Replaces one bracket endpoint per iteration with the x-intercept of the
/// chord through `(lo, f(lo))` and `(hi, f(hi))`, keeping the sign change.
pub fn solve<F: Fn(f64) -> f64>(
    f: F,
    bracket: Bracket,
    options: RootFindOptions,
) -> Result<RootSearch, RootFindError> {
    options.validate()?;
    let (mut f_lo, mut f_hi) = bracketed_values(&f, &bracket)?;
    let (mut lo, mut hi) = (bracket.lo, bracket.hi);
    let mut approximations = Vec::new();

    for iteration in 0..options.max_iterations {
        // The sign change keeps f_hi - f_lo away from zero.
        let intercept = lo - f_lo * (hi - lo) / (f_hi - f_lo);
        let f_intercept = f(intercept);
        approximations.push(intercept);
        trace!(iteration, intercept, f_intercept, "false position step");
        if f_intercept.abs() < options.tolerance {
            return Ok(RootSearch {
                root: intercept,
                approximations,
            });
        }
        if f_lo * f_intercept < 0.0 {
            hi = intercept;
            f_hi = f_intercept;
        } else {
            lo = intercept;
            f_lo = f_intercept;
        }
    }
    Err(RootFindError::MaxIterations(options.max_iterations))
}
