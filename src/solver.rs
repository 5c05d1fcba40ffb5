//! Stationary relaxation solvers for square linear systems.
//!
//! Both schemes share the same outer shape: start from the zero vector, run a
//! fixed number of sweeps, record the largest component change of every sweep
//! and the final residual norm. They differ only in when an updated component
//! becomes visible: [`jacobi`] reads a frozen copy of the previous iterate,
//! [`gauss_seidel`] reuses values updated earlier in the same sweep.

pub mod gauss_seidel;
pub mod jacobi;

use nalgebra::{DMatrix, DVector};

use crate::error::SolverError;

/// Outcome of a fixed-sweep relaxation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxationRun {
    /// Iterate after the final sweep.
    pub solution: DVector<f64>,
    /// Number of sweeps actually performed.
    pub sweeps: usize,
    /// Largest absolute component change of each sweep, in sweep order.
    pub sweep_deltas: Vec<f64>,
    /// Euclidean norm of `f - A x` at the final iterate.
    pub residual_norm: f64,
}

impl RelaxationRun {
    /// Change recorded by the final sweep, or `None` when no sweep ran.
    pub fn last_delta(&self) -> Option<f64> {
        self.sweep_deltas.last().copied()
    }
}

/// Shape and diagonal checks both schemes rely on before sweeping.
pub(crate) fn validate_system(
    matrix: &DMatrix<f64>,
    rhs: &DVector<f64>,
) -> Result<(), SolverError> {
    if matrix.nrows() != matrix.ncols() {
        return Err(SolverError::NotSquare {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
        });
    }
    if rhs.len() != matrix.nrows() {
        return Err(SolverError::RhsMismatch {
            expected: matrix.nrows(),
            got: rhs.len(),
        });
    }
    for i in 0..matrix.nrows() {
        if matrix[(i, i)] == 0.0 {
            return Err(SolverError::ZeroDiagonal(i));
        }
    }
    Ok(())
}
