//! Inverse Kinematics module
//!
//! This module contains the chain model and both solvers: the iterative
//! FABRIK solver for arbitrary segment counts and the closed-form two-link
//! solver.

pub mod chain;
pub mod solver;
pub mod two_link;

pub use chain::{Chain, ChainBuilder};
pub use solver::{FabrikSolver, SolveResult, SolverConfig};
pub use two_link::{joint_positions, solve_angles};
