//! Scalar root-finding methods over `f: f64 -> f64`.
//!
//! Every method shares the same contract: iterate until `|f(x)|` drops below
//! the configured tolerance, keep the full approximation trail, and fail with
//! [`RootFindError::MaxIterations`] instead of looping forever. The bracketed
//! methods ([`bisection`], [`false_position`], [`secant`]) additionally demand
//! a sign change over the starting interval; the open methods ([`newton`],
//! [`steffensen`]) start from a single guess.

pub mod bisection;
pub mod false_position;
pub mod horner;
pub mod newton;
pub mod secant;
pub mod steffensen;

use crate::error::RootFindError;

/// A closed search interval `[lo, hi]` with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo: f64,
    pub hi: f64,
}

impl Bracket {
    pub fn new(lo: f64, hi: f64) -> Result<Self, RootFindError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(RootFindError::InvalidBracket { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

/// Stopping controls shared by all methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootFindOptions {
    /// Accept `x` as a root once `|f(x)| < tolerance`.
    pub tolerance: f64,
    /// Hard cap on iterations before giving up.
    pub max_iterations: usize,
}

impl Default for RootFindOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-2,
            max_iterations: 200,
        }
    }
}

impl RootFindOptions {
    pub(crate) fn validate(&self) -> Result<(), RootFindError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(RootFindError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// A finished search: the accepted root plus the trail that led to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSearch {
    /// First iterate that satisfied the tolerance.
    pub root: f64,
    /// Every candidate produced along the way, ending with `root` whenever at
    /// least one iteration ran.
    pub approximations: Vec<f64>,
}

impl RootSearch {
    pub fn iterations(&self) -> usize {
        self.approximations.len()
    }
}

/// Evaluates both endpoints and insists on a sign change across the bracket.
pub(crate) fn bracketed_values<F: Fn(f64) -> f64>(
    f: &F,
    bracket: &Bracket,
) -> Result<(f64, f64), RootFindError> {
    let f_lo = f(bracket.lo);
    let f_hi = f(bracket.hi);
    if f_lo * f_hi >= 0.0 {
        return Err(RootFindError::NoSignChange {
            lo: bracket.lo,
            hi: bracket.hi,
        });
    }
    Ok((f_lo, f_hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_requires_ordered_finite_endpoints() {
        assert_eq!(Bracket::new(0.0, 1.0).unwrap().width(), 1.0);
        assert!(matches!(
            Bracket::new(1.0, 1.0),
            Err(RootFindError::InvalidBracket { .. })
        ));
        assert!(matches!(
            Bracket::new(2.0, -1.0),
            Err(RootFindError::InvalidBracket { .. })
        ));
        assert!(matches!(
            Bracket::new(f64::NAN, 1.0),
            Err(RootFindError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn default_options_are_loose() {
        let options = RootFindOptions::default();
        assert_eq!(options.tolerance, 1e-2);
        assert_eq!(options.max_iterations, 200);
    }

    #[test]
    fn options_reject_nonpositive_tolerance() {
        let options = RootFindOptions {
            tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(
            options.validate(),
            Err(RootFindError::InvalidTolerance(0.0))
        );
    }

    #[test]
    fn sign_change_is_required() {
        let bracket = Bracket::new(1.0, 2.0).unwrap();
        let err = bracketed_values(&|x: f64| x * x + 1.0, &bracket).unwrap_err();
        assert_eq!(err, RootFindError::NoSignChange { lo: 1.0, hi: 2.0 });
    }

    #[test]
    fn sign_change_accepts_either_orientation() {
        let bracket = Bracket::new(-1.0, 1.0).unwrap();
        assert!(bracketed_values(&|x: f64| x, &bracket).is_ok());
        assert!(bracketed_values(&|x: f64| -x, &bracket).is_ok());
    }
}
