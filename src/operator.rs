//! Dense assembly of the discrete 2-D Laplace operator and its synthetic
//! right-hand side.
//!
//! The operator is the classical 5-point stencil on a `dim x dim` node grid
//! flattened row-major: -4 on the diagonal, 1 for each in-grid neighbor,
//! nothing across grid-row boundaries (free boundary, no wraparound). The
//! forcing vector samples `sin(kx*x) * sin(ky*y)`, an eigenfunction of the
//! continuous Laplacian, at the interior node coordinates.

use nalgebra::{DMatrix, DVector};

use crate::domain::grid2d::{EigenPair, NodeGrid2D};

/// The assembled linear system `A x = f` for one grid/eigenpair choice.
#[derive(Debug, Clone, PartialEq)]
pub struct LaplaceSystem {
    pub grid: NodeGrid2D,
    pub eigen: EigenPair,
    pub matrix: DMatrix<f64>,
    pub forcing: DVector<f64>,
}

impl LaplaceSystem {
    /// Builds the stencil matrix and forcing vector. Infallible: `grid` has
    /// already validated the perfect-square invariant the index masks rely on.
    pub fn assemble(grid: NodeGrid2D, eigen: EigenPair) -> Self {
        let n = grid.nodes();
        let dim = grid.dim();
        let h = grid.spacing();

        let mut matrix = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = -4.0;

            // Horizontal links, masked where i sits at a grid-row boundary.
            if i >= 1 && i % dim != 0 {
                matrix[(i, i - 1)] = 1.0;
            }
            if i + 1 < n && (i + 1) % dim != 0 {
                matrix[(i, i + 1)] = 1.0;
            }

            // Vertical links one grid row away.
            if i >= dim {
                matrix[(i, i - dim)] = 1.0;
            }
            if i + dim < n {
                matrix[(i, i + dim)] = 1.0;
            }
        }

        let mut forcing = DVector::<f64>::zeros(n);
        let (kx, ky) = (eigen.0 as f64, eigen.1 as f64);
        for row in 0..dim {
            for col in 0..dim {
                let value = (kx * (row as f64 + 1.0) * h).sin() * (ky * (col as f64 + 1.0) * h).sin();
                forcing[grid.flatten(row, col)] = value;
            }
        }

        Self {
            grid,
            eigen,
            matrix,
            forcing,
        }
    }

    /// Euclidean norm of `f - A x`.
    pub fn residual_norm(&self, x: &DVector<f64>) -> f64 {
        (&self.forcing - &self.matrix * x).norm()
    }

    /// Sum of the off-diagonal entries of row `i`. For the stencil this
    /// equals the node's in-grid neighbor count.
    pub fn offdiagonal_row_sum(&self, i: usize) -> f64 {
        let mut sum = 0.0;
        for j in 0..self.matrix.ncols() {
            if j != i {
                sum += self.matrix[(i, j)];
            }
        }
        sum
    }

    /// Strict diagonal dominance of row `i`: `|a_ii| > sum_{j != i} |a_ij|`.
    /// Holds exactly at boundary nodes; interior rows are only weakly
    /// dominant (4 against four 1-entries).
    pub fn is_strictly_dominant_row(&self, i: usize) -> bool {
        let mut offdiag = 0.0;
        for j in 0..self.matrix.ncols() {
            if j != i {
                offdiag += self.matrix[(i, j)].abs();
            }
        }
        self.matrix[(i, i)].abs() > offdiag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dmatrix;
    use std::f64::consts::PI;

    fn assemble(nodes: usize, kx: i32, ky: i32) -> LaplaceSystem {
        let grid = NodeGrid2D::new(nodes).unwrap();
        LaplaceSystem::assemble(grid, EigenPair(kx, ky))
    }

    #[test]
    fn n4_matrix_matches_five_point_stencil() {
        let system = assemble(4, 1, 1);
        let expected = dmatrix![
            -4.0,  1.0,  1.0,  0.0;
             1.0, -4.0,  0.0,  1.0;
             1.0,  0.0, -4.0,  1.0;
             0.0,  1.0,  1.0, -4.0
        ];
        assert_eq!(system.matrix, expected);
    }

    #[test]
    fn matrix_is_symmetric_for_all_valid_sizes() {
        for nodes in [1, 4, 9, 16, 25] {
            let system = assemble(nodes, 2, 3);
            assert_eq!(system.matrix, system.matrix.transpose());
        }
    }

    #[test]
    fn offdiagonal_row_sums_count_in_grid_neighbors() {
        for nodes in [4, 9, 16, 25] {
            let system = assemble(nodes, 1, 1);
            for i in 0..nodes {
                assert_relative_eq!(
                    system.offdiagonal_row_sum(i),
                    system.grid.neighbor_count(i) as f64,
                    epsilon = 1e-15
                );
            }
        }
    }

    #[test]
    fn strict_dominance_exactly_at_boundary_nodes() {
        // On a 2x2 grid every node is a corner; on 3x3 the center row is
        // only weakly dominant.
        let small = assemble(4, 1, 1);
        for i in 0..4 {
            assert!(small.is_strictly_dominant_row(i));
        }

        let system = assemble(9, 1, 1);
        for i in 0..9 {
            assert_eq!(
                system.is_strictly_dominant_row(i),
                system.grid.is_boundary_node(i)
            );
        }
    }

    #[test]
    fn forcing_samples_the_sine_product() {
        let system = assemble(4, 1, 2);
        let h = PI / 3.0;
        for row in 0..2 {
            for col in 0..2 {
                let expected =
                    (1.0 * (row as f64 + 1.0) * h).sin() * (2.0 * (col as f64 + 1.0) * h).sin();
                assert_relative_eq!(
                    system.forcing[row * 2 + col],
                    expected,
                    epsilon = 1e-15
                );
            }
        }
    }

    #[test]
    fn forcing_populates_every_entry() {
        for nodes in [1, 4, 9, 16] {
            let system = assemble(nodes, 1, 1);
            assert_eq!(system.forcing.len(), nodes);
            // kx = ky = 1 keeps every sample inside the first sine arch,
            // so no entry can be left at the zero initializer.
            for i in 0..nodes {
                assert!(system.forcing[i] > 0.0, "entry {i} not populated");
            }
        }
    }

    #[test]
    fn forcing_vanishes_when_eigen_index_hits_the_boundary_multiple() {
        // dim + 1 = 3: kx = 3 makes every x-sample a multiple of pi.
        let system = assemble(4, 3, 1);
        for i in 0..4 {
            assert_relative_eq!(system.forcing[i], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_node_system() {
        let system = assemble(1, 1, 1);
        assert_eq!(system.matrix, dmatrix![-4.0]);
        // h = pi/2, so the sample sits at the sine peak.
        assert_relative_eq!(system.forcing[0], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn rebuild_is_bit_identical() {
        let first = assemble(16, 2, 5);
        let second = assemble(16, 2, 5);
        assert_eq!(first.matrix, second.matrix);
        assert_eq!(first.forcing, second.forcing);
    }

    #[test]
    fn residual_of_zero_iterate_is_forcing_norm() {
        let system = assemble(9, 1, 1);
        let zero = DVector::zeros(9);
        assert_relative_eq!(
            system.residual_norm(&zero),
            system.forcing.norm(),
            epsilon = 1e-15
        );
    }
}
