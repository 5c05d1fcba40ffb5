//! Bracketed secant iteration.
//!
//! The next candidate is the secant intercept of the current interval, and
//! the interval then shrinks to whichever side still brackets the root. The
//! sign-change precondition makes this a safeguarded secant rather than the
//! free-running two-point form.

use tracing::trace;

use crate::error::RootFindError;
use crate::rootfind::{bracketed_values, Bracket, RootFindOptions, RootSearch};

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
        let candidate = lo - f_lo * (hi - lo) / (f_hi - f_lo);
        let f_candidate = f(candidate);
        approximations.push(candidate);
        trace!(iteration, candidate, f_candidate, "secant step");
        if f_candidate.abs() < options.tolerance {
            return Ok(RootSearch {
                root: candidate,
                approximations,
            });
        }
        if f_lo * f_candidate < 0.0 {
            hi = candidate;
            f_hi = f_candidate;
        } else {
            lo = candidate;
            f_lo = f_candidate;
        }
    }
    Err(RootFindError::MaxIterations(options.max_iterations))
}
