//! Jacobi relaxation: every sweep reads only the previous iterate.

use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace};

use crate::error::SolverError;
use crate::solver::{validate_system, RelaxationRun};

/// Runs `sweeps` Jacobi sweeps on `A x = f` starting from the zero vector.
///
/// Each sweep computes the whole next iterate from a frozen copy of the
/// current one; the two buffers are swapped between sweeps, so no component
/// ever sees a value updated in the same sweep.
pub fn solve(
    matrix: &DMatrix<f64>,
    rhs: &DVector<f64>,
    sweeps: usize,
) -> Result<RelaxationRun, SolverError> {
    validate_system(matrix, rhs)?;
    let n = rhs.len();
    debug!(n, sweeps, "starting jacobi relaxation");

    let mut current = DVector::<f64>::zeros(n);
    let mut next = DVector::<f64>::zeros(n);
    let mut sweep_deltas = Vec::with_capacity(sweeps);

    for sweep in 0..sweeps {
        let mut max_delta = 0.0f64;
        for i in 0..n {
            let mut offdiag = 0.0;
            for j in 0..n {
                if j != i {
                    offdiag += matrix[(i, j)] * current[j];
                }
            }
            next[i] = (rhs[i] - offdiag) / matrix[(i, i)];
            max_delta = max_delta.max((next[i] - current[i]).abs());
        }
        std::mem::swap(&mut current, &mut next);
        sweep_deltas.push(max_delta);
        trace!(sweep, max_delta, "jacobi sweep done");
    }

    let residual_norm = (rhs - matrix * &current).norm();
    debug!(residual_norm, "jacobi relaxation finished");
    Ok(RelaxationRun {
        solution: current,
        sweeps,
        sweep_deltas,
        residual_norm,
    })
}
