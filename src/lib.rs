//! Dense 2-D Laplace operator assembly and classical iterative solvers.
//!
//! The crate builds the 5-point stencil system for a square node grid and
//! compares Jacobi against Gauss-Seidel relaxation on it, with a console
//! protocol for parameters and results plus an optional JSON export. A small
//! family of scalar root-finding routines backs the companion demo binary.

pub mod console;
pub mod domain;
pub mod error;
pub mod io;
pub mod operator;
pub mod report;
pub mod rootfind;
pub mod solver;
