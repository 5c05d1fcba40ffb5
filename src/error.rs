use thiserror::Error;

/// Problem-setup failures: everything that can go wrong before any
/// computation starts. Reported to the user, process exits non-zero.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("node count must be positive, got {0}")]
    InvalidNodeCount(i64),

    #[error("node count {0} is not a perfect square")]
    NotPerfectSquare(usize),

    #[error("iteration count must be non-negative, got {0}")]
    InvalidIterationCount(i64),

    #[error("expected an integer for {field}, got {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    #[error("input ended while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Guards on the linear-system inputs. The assembled Laplacian can never
/// trip these (its diagonal is -4 everywhere), but the solvers accept any
/// dense system and validate eagerly instead of producing garbage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },

    #[error("right-hand side has {got} entries, expected {expected}")]
    RhsMismatch { expected: usize, got: usize },

    #[error("zero diagonal entry at row {0}")]
    ZeroDiagonal(usize),
}

/// Failures of the scalar root-finding methods.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindError {
    #[error("invalid bracket: lo {lo} must be below hi {hi}")]
    InvalidBracket { lo: f64, hi: f64 },

    #[error("no sign change over [{lo}, {hi}]")]
    NoSignChange { lo: f64, hi: f64 },

    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("step must be positive, got {0}")]
    InvalidStep(f64),

    #[error("slope vanished at x = {0}; cannot take the next step")]
    VanishedSlope(f64),

    #[error("no convergence within {0} iterations")]
    MaxIterations(usize),
}
