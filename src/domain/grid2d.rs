use std::f64::consts::PI;

use crate::error::ConfigError;

/// Eigenfunction indices (x, y) for the sine-product forcing term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EigenPair(pub i32, pub i32);

/// A square grid of `nodes = dim * dim` interior nodes, flattened row-major:
/// node `(row, col)` lives at index `row * dim + col`.
///
/// Construction validates the perfect-square invariant once; everything
/// downstream sizes its buffers from the validated dimension instead of
/// re-deriving `sqrt(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeGrid2D {
    nodes: usize,
    dim: usize,
}

impl NodeGrid2D {
    pub fn new(nodes: usize) -> Result<Self, ConfigError> {
        if nodes == 0 {
            return Err(ConfigError::InvalidNodeCount(0));
        }
        let dim = (nodes as f64).sqrt().round() as usize;
        if dim * dim != nodes {
            return Err(ConfigError::NotPerfectSquare(nodes));
        }
        Ok(Self { nodes, dim })
    }

    /// Total node count `n`.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Nodes per grid row/column, `sqrt(n)`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Mesh spacing `h = pi / (dim + 1)`: the grid samples the open unit
    /// square with one layer of implicit zero-boundary nodes outside it.
    pub fn spacing(&self) -> f64 {
        PI / (self.dim as f64 + 1.0)
    }

    /// Row-major flattened index of `(row, col)`.
    pub fn flatten(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.dim && col < self.dim);
        row * self.dim + col
    }

    /// Inverse of [`NodeGrid2D::flatten`].
    pub fn position(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.nodes);
        (index / self.dim, index % self.dim)
    }

    /// Number of in-grid neighbors of a node: 4 in the interior, 3 on an
    /// edge, 2 in a corner (0 for the degenerate 1x1 grid).
    pub fn neighbor_count(&self, index: usize) -> usize {
        let (row, col) = self.position(index);
        let mut count = 0;
        if col > 0 {
            count += 1;
        }
        if col + 1 < self.dim {
            count += 1;
        }
        if row > 0 {
            count += 1;
        }
        if row + 1 < self.dim {
            count += 1;
        }
        count
    }

    /// True when the node sits on the outer ring of the grid.
    pub fn is_boundary_node(&self, index: usize) -> bool {
        self.neighbor_count(index) < 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn accepts_perfect_squares() {
        for (nodes, dim) in [(1, 1), (4, 2), (9, 3), (16, 4), (25, 5), (100, 10)] {
            let grid = NodeGrid2D::new(nodes).unwrap();
            assert_eq!(grid.nodes(), nodes);
            assert_eq!(grid.dim(), dim);
        }
    }

    #[test]
    fn rejects_non_squares() {
        for nodes in [2, 3, 5, 8, 12, 15, 24] {
            assert!(matches!(
                NodeGrid2D::new(nodes),
                Err(ConfigError::NotPerfectSquare(n)) if n == nodes
            ));
        }
    }

    #[test]
    fn rejects_zero_nodes() {
        assert!(matches!(
            NodeGrid2D::new(0),
            Err(ConfigError::InvalidNodeCount(0))
        ));
    }

    #[test]
    fn spacing_divides_pi_by_dim_plus_one() {
        let grid = NodeGrid2D::new(9).unwrap();
        assert_relative_eq!(grid.spacing(), PI / 4.0, epsilon = 1e-15);

        // The 1x1 grid puts its single node at the midpoint, h = pi/2.
        let tiny = NodeGrid2D::new(1).unwrap();
        assert_relative_eq!(tiny.spacing(), PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn flatten_and_position_round_trip() {
        let grid = NodeGrid2D::new(16).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                let index = grid.flatten(row, col);
                assert_eq!(grid.position(index), (row, col));
            }
        }
        assert_eq!(grid.flatten(0, 0), 0);
        assert_eq!(grid.flatten(3, 3), 15);
    }

    #[test]
    fn neighbor_counts_on_3x3() {
        let grid = NodeGrid2D::new(9).unwrap();
        // Corners, edges, interior of the 3x3 grid.
        for corner in [0, 2, 6, 8] {
            assert_eq!(grid.neighbor_count(corner), 2);
            assert!(grid.is_boundary_node(corner));
        }
        for edge in [1, 3, 5, 7] {
            assert_eq!(grid.neighbor_count(edge), 3);
            assert!(grid.is_boundary_node(edge));
        }
        assert_eq!(grid.neighbor_count(4), 4);
        assert!(!grid.is_boundary_node(4));
    }

    #[test]
    fn single_node_grid_has_no_neighbors() {
        let grid = NodeGrid2D::new(1).unwrap();
        assert_eq!(grid.neighbor_count(0), 0);
        assert!(grid.is_boundary_node(0));
    }
}
