//! Horner evaluation of dense polynomials and grid scans built on it.

use crate::error::RootFindError;
use crate::rootfind::Bracket;

/// Evaluates a polynomial given by `coefficients` in descending powers of
/// `x`. An empty slice evaluates to zero.
pub fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Samples the polynomial on the grid `lo, lo + step, lo + 2 step, ...`,
/// stopping before `hi`. Points are `(x, p(x))` pairs in grid order.
pub fn sample(
    coefficients: &[f64],
    range: Bracket,
    step: f64,
) -> Result<Vec<(f64, f64)>, RootFindError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(RootFindError::InvalidStep(step));
    }
    let mut points = Vec::new();
    let mut k = 0usize;
    loop {
        // Scaling from lo keeps the grid free of accumulated rounding.
        let x = range.lo + k as f64 * step;
        if x >= range.hi {
            break;
        }
        points.push((x, evaluate(coefficients, x)));
        k += 1;
    }
    Ok(points)
}

/// Returns the grid points where `|p(x)|` falls below `tolerance`, in
/// ascending order. A coarse step can miss a zero whose window lies between
/// two grid points; tighten `step` against `tolerance` accordingly.
pub fn scan_zeros(
    coefficients: &[f64],
    range: Bracket,
    step: f64,
    tolerance: f64,
) -> Result<Vec<f64>, RootFindError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(RootFindError::InvalidTolerance(tolerance));
    }
    Ok(sample(coefficients, range, step)?
        .into_iter()
        .filter(|&(_, y)| y.abs() < tolerance)
        .map(|(x, _)| x)
        .collect())
}
