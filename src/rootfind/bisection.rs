//! Interval halving on a sign-changing bracket.

use tracing::trace;

use crate::error::RootFindError;
use crate::rootfind::{bracketed_values, Bracket, RootFindOptions, RootSearch};

/// Repeatedly halves the bracket, keeping the half whose endpoints still
/// change sign, until the midpoint value satisfies the tolerance.
pub fn solve<F: Fn(f64) -> f64>(
    f: F,
    bracket: Bracket,
    options: RootFindOptions,
) -> Result<RootSearch, RootFindError> {
    options.validate()?;
    let (mut f_lo, _) = bracketed_values(&f, &bracket)?;
    let (mut lo, mut hi) = (bracket.lo, bracket.hi);
    let mut approximations = Vec::new();

    for iteration in 0..options.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        approximations.push(mid);
        trace!(iteration, mid, f_mid, "bisection step");
        if f_mid.abs() < options.tolerance {
            return Ok(RootSearch {
                root: mid,
                approximations,
            });
        }
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    Err(RootFindError::MaxIterations(options.max_iterations))
}
